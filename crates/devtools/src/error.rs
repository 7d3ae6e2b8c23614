#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Preferences file error: {0}")]
    Preferences(String),

    #[error("Image error: {0}")]
    Image(String),
}
