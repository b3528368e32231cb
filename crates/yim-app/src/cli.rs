use std::path::PathBuf;

use clap::Parser;

/// YimMenu V2 launcher.
#[derive(Parser, Debug)]
#[command(name = "yim-launcher", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["yim-launcher"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "yim-launcher",
            "--config",
            "/tmp/launcher.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/launcher.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["yim-launcher", "--title", "x"]).is_err());
    }
}
