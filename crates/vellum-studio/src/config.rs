use std::path::PathBuf;

use clap::Parser;

/// Host settings taken from the command line.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "vellum-studio")]
#[command(about = "Replays a pointer script against the vellum demo UI and prints every frame")]
pub struct StudioConfig {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Pointer script to replay (default: built-in demo session)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// env_logger filter, e.g. "debug" or "vellum_ui=trace"
    #[arg(long = "log")]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = StudioConfig::try_parse_from(["vellum-studio"]).unwrap();
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.script, None);
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn parses_all_options() {
        let config = StudioConfig::try_parse_from([
            "vellum-studio", "--width", "800", "--height", "600", "--script", "s.txt", "--log", "trace",
        ])
        .unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.script, Some(PathBuf::from("s.txt")));
        assert_eq!(config.log_filter.as_deref(), Some("trace"));
    }

    #[test]
    fn help_is_reported_as_display_request() {
        let err = StudioConfig::try_parse_from(["vellum-studio", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(StudioConfig::try_parse_from(["vellum-studio", "--width"]).is_err());
        assert!(StudioConfig::try_parse_from(["vellum-studio", "--width", "wide"]).is_err());
        assert!(StudioConfig::try_parse_from(["vellum-studio", "--height", "0"]).is_err());
        assert!(StudioConfig::try_parse_from(["vellum-studio", "--fullscreen"]).is_err());
    }
}
