use std::path::PathBuf;

use clap::Parser;

/// cubeplayer - an ASCII music player for your terminal
#[derive(Parser, Debug)]
#[command(name = "cubeplayer", version, about)]
pub struct Args {
    /// Files or folders to play. Without any, the last folder is reopened
    /// (or a folder browser is shown)
    pub paths: Vec<PathBuf>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_flags() {
        let args = Args::parse_from(["cubeplayer", "a.mp3", "music", "--config", "c.toml"]);
        assert_eq!(args.paths, vec![PathBuf::from("a.mp3"), PathBuf::from("music")]);
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert!(!args.print_config);
    }

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::parse_from(["cubeplayer"]);
        assert!(args.paths.is_empty());
        assert!(args.config.is_none());
    }
}
