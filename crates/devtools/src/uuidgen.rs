use crate::prelude::{println, *};

pub const MAX_COUNT: usize = 1000;

#[derive(Debug, clap::Args)]
pub struct UuidOptions {
    /// How many UUIDs to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Print in uppercase
    #[arg(short, long)]
    pub upper: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Random (version 4) UUIDs, at most [`MAX_COUNT`].
pub fn generate(count: usize, upper: bool) -> Vec<String> {
    (0..count.min(MAX_COUNT))
        .map(|_| {
            let id = uuid::Uuid::new_v4().hyphenated().to_string();
            if upper {
                id.to_uppercase()
            } else {
                id
            }
        })
        .collect()
}

pub fn run(options: UuidOptions, _global: crate::Global) -> Result<()> {
    let ids = generate(options.count, options.upper);

    if options.json {
        return print_json(&ids);
    }

    for id in ids {
        println!("{id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtools_core::validate::validate_uuid;

    #[test]
    fn test_generated_ids_validate() {
        let ids = generate(3, false);
        assert_eq!(ids.len(), 3);
        for id in &ids {
            assert!(validate_uuid(id).is_ok(), "{id}");
        }
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_count_is_capped() {
        assert_eq!(generate(MAX_COUNT + 5, true).len(), MAX_COUNT);
    }
}
