//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// An incremental calculator driven by key sequences
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "An incremental calculator driven by key sequences")]
pub struct CliArgs {
    /// Key sequences to type, e.g. "2+3*4=" or "16{sqrt}". Reads one sequence
    /// per line from stdin when none are given.
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(short = 't', long)]
    pub trace: bool,

    /// Print the session (display, history, error flag) as JSON
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Copy the final display to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Settings file to use instead of ~/.config/keycalc/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_and_flags() {
        let args = CliArgs::try_parse_from(["keycalc", "--json", "-t", "2+3=", "{sqrt}"]).unwrap();
        assert_eq!(args.keys, vec!["2+3=".to_string(), "{sqrt}".to_string()]);
        assert!(args.json);
        assert!(args.trace);
        assert!(!args.copy);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_config_path() {
        let args = CliArgs::try_parse_from(["keycalc", "--config", "/tmp/k.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/k.toml")));
        assert!(args.keys.is_empty());
    }
}
