use std::path::PathBuf;

use clap::Parser;

/// Nori: chat with your knowledge-base coach from the terminal.
#[derive(Parser, Debug)]
#[command(name = "nori", version, about)]
pub struct Args {
    /// Send one message, print the reply and exit.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// User ID override.
    #[arg(short = 'u', long)]
    pub user_id: Option<String>,

    /// Studio ID override.
    #[arg(short = 's', long)]
    pub studio_id: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON (API key masked) and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "nori", "-u", "coach-1", "--studio-id", "42", "-m", "hello", "--config", "/tmp/n.toml",
        ])
        .unwrap();
        assert_eq!(args.user_id.as_deref(), Some("coach-1"));
        assert_eq!(args.studio_id.as_deref(), Some("42"));
        assert_eq!(args.message.as_deref(), Some("hello"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/n.toml")));
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn no_args_is_interactive() {
        let args = Args::try_parse_from(["nori"]).unwrap();
        assert!(args.message.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn print_config_flag() {
        let args = Args::try_parse_from(["nori", "--print-config"]).unwrap();
        assert!(args.print_config);
    }
}
