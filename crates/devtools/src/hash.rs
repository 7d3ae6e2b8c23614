use std::path::PathBuf;

use colored::Colorize;
use devtools_core::hash::{self, HashAlgorithm, HashDigest};

use crate::input::{read_file, read_text};
use crate::prelude::{println, *};

#[derive(Debug, clap::Args)]
pub struct HashOptions {
    /// Text to hash (reads stdin when omitted)
    pub text: Option<String>,

    /// Hash the contents of a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Only compute one algorithm: md5, sha224, sha256, sha384 or sha512
    #[arg(short, long, value_parser = parse_algorithm)]
    pub algorithm: Option<HashAlgorithm>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_algorithm(name: &str) -> Result<HashAlgorithm, String> {
    HashAlgorithm::ALL
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| f!("unknown algorithm '{name}'"))
}

pub fn digests(bytes: &[u8], algorithm: Option<HashAlgorithm>) -> Vec<HashDigest> {
    match algorithm {
        Some(algorithm) => vec![HashDigest {
            algorithm,
            hex: hash::hash_bytes(algorithm, bytes),
        }],
        None => hash::hash_all(bytes),
    }
}

pub fn run(options: HashOptions, _global: crate::Global) -> Result<()> {
    let bytes = match &options.file {
        Some(path) => read_file(path)?,
        None => read_text(options.text)?.into_bytes(),
    };

    let digests = digests(&bytes, options.algorithm);

    if options.json {
        return print_json(&digests);
    }

    if let [digest] = digests.as_slice() {
        println!("{}", digest.hex);
        return Ok(());
    }

    let mut table = new_table();
    for digest in &digests {
        table.add_row(prettytable::row![
            digest.algorithm.name().to_uppercase().green(),
            digest.hex
        ]);
    }
    table.printstd();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("SHA256"), Ok(HashAlgorithm::Sha256));
        assert!(parse_algorithm("sha1").is_err());
    }

    #[test]
    fn test_digests_single_or_all() {
        assert_eq!(digests(b"abc", Some(HashAlgorithm::Md5)).len(), 1);
        assert_eq!(digests(b"abc", None).len(), HashAlgorithm::ALL.len());
    }
}
