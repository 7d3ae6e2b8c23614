#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Model Context Protocol server exposing the devtools utilities")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Serve newline-delimited JSON-RPC on stdin/stdout
    #[clap(name = "stdio")]
    Stdio,

    /// Serve JSON-RPC over HTTP (`/sse` and `/message`)
    #[clap(name = "sse")]
    Sse(SseOptions),
}

#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// Port to listen on
    #[arg(short, long, env = "DEVTOOLS_MCP_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "DEVTOOLS_MCP_HOST", default_value = "127.0.0.1")]
    pub host: String,
}
