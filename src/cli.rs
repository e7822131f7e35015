//! Command-line arguments.

use rosterview::app::UiEvent;
use rosterview::{Config, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// TOML configuration file. CLI flags override its values.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Roster location: a file path or an http(s) URL.
    #[arg(short = 's', long)]
    source: Option<String>,

    /// Write the page here instead of stdout.
    #[arg(short = 'o', long = "out")]
    output: Option<String>,

    /// Built-in theme name (classroom, chalkboard).
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Custom TOML theme file. Takes precedence over --theme.
    #[arg(long)]
    theme_file: Option<String>,

    /// Tracing filter directive, e.g. "debug".
    #[arg(long)]
    trace_level: Option<String>,

    /// Export OTLP JSON spans to this file.
    #[arg(long)]
    trace_file: Option<String>,

    /// Control event to replay after load, e.g. "click:sort-marks" or
    /// "input:search-bar=bo". Repeatable; applied in order.
    #[arg(short = 'e', long = "event", value_name = "TRIGGER:CONTROL[=VALUE]")]
    events: Vec<UiEvent>,

    /// Read further control events from stdin, one per line.
    #[arg(short = 'i', long)]
    interactive: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    config_file: Option<PathBuf>,
    overrides: Config,
    events: Vec<UiEvent>,
    interactive: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    #[allow(dead_code)]
    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            config_file: args.config,
            overrides: Config {
                source: args.source.unwrap_or_default(),
                output: args.output,
                theme_name: args.theme,
                theme_file: args.theme_file,
                trace_level: args.trace_level,
                trace_file: args.trace_file,
            },
            events: args.events,
            interactive: args.interactive,
        }
    }

    /// Defaults, then the config file (if given), then flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let base = match &self.config_file {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, base: Config) -> Config {
        let flags = self.overrides.clone();
        Config {
            source: if flags.source.is_empty() { base.source } else { flags.source },
            output: flags.output.or(base.output),
            theme_name: flags.theme_name.or(base.theme_name),
            theme_file: flags.theme_file.or(base.theme_file),
            trace_level: flags.trace_level.or(base.trace_level),
            trace_file: flags.trace_file.or(base.trace_file),
        }
    }

    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    pub const fn interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rosterview::app::Trigger;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let args = CommandLineArgs::parse_from(["rosterview"]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config, Config::default());
        assert!(args.events().is_empty());
        assert!(!args.interactive());
    }

    #[test]
    fn test_events_keep_order() {
        let args = CommandLineArgs::parse_from([
            "rosterview",
            "-e",
            "input:search-bar=bo",
            "--event",
            "click:sort-marks",
        ]);

        let events = args.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].trigger, Trigger::Input);
        assert_eq!(events[1].control, "sort-marks");
    }

    #[test]
    fn test_malformed_event_is_rejected() {
        let result = ClapArgs::try_parse_from(["rosterview", "--event", "sort-marks"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "source = \"from-file.json\"").unwrap();
        writeln!(file, "theme = \"chalkboard\"").unwrap();
        writeln!(file, "trace_level = \"warn\"").unwrap();

        let path = file.path().display().to_string();
        let args = CommandLineArgs::parse_from([
            "rosterview",
            "--config",
            path.as_str(),
            "--source",
            "from-flag.json",
            "--out",
            "page.html",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.source, "from-flag.json");
        assert_eq!(config.output.as_deref(), Some("page.html"));
        assert_eq!(config.theme_name.as_deref(), Some("chalkboard"));
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = CommandLineArgs::parse_from(["rosterview", "-c", "/nonexistent/rosterview.toml"]);
        assert!(args.resolve_config().is_err());
    }
}
