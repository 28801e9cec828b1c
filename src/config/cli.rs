use crate::config::settings::Settings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Comma-separated languages, overriding the configured list
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Print the reports as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Settings from the config file (or defaults) with command-line overrides applied.
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading settings from {}", path);
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };

        if !self.languages.is_empty() {
            settings.languages = self.languages.iter().map(|l| l.trim().to_string()).collect();
            tracing::debug!("Languages overridden to {:?}", settings.languages);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from(["vacancy-stats", "--languages", "Rust, Go", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.config, None);

        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.languages, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["vacancy-stats"]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.languages.len(), 9);
        assert!(!cli.json);
    }
}
