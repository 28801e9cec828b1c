use crate::utils::error::{Result, VacancyError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub languages: Vec<String>,
    pub request_timeout_seconds: Option<u64>,
    pub headhunter: HeadHunterSettings,
    pub superjob: SuperJobSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterSettings {
    pub endpoint: String,
    pub title: String,
    /// HeadHunter region id; 1 is Moscow.
    pub area: u32,
    pub search_prefix: String,
    pub currency: String,
    pub request_delay_ms: u64,
    pub per_page: Option<u32>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobSettings {
    pub endpoint: String,
    pub title: String,
    pub town: String,
    pub period_days: u32,
    /// "Development, programming" catalogue section.
    pub catalogue: u32,
    pub search_prefix: String,
    pub currency: String,
    pub request_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            request_timeout_seconds: None,
            headhunter: HeadHunterSettings::default(),
            superjob: SuperJobSettings::default(),
        }
    }
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            title: "HeadHunter Moscow".to_string(),
            area: 1,
            search_prefix: "Программист".to_string(),
            currency: "RUR".to_string(),
            request_delay_ms: 300,
            per_page: None,
            user_agent: concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            title: "SuperJob Moscow".to_string(),
            town: "Москва".to_string(),
            period_days: 30,
            catalogue: 48,
            search_prefix: "Программист".to_string(),
            currency: "rub".to_string(),
            request_delay_ms: 500,
        }
    }
}

impl HeadHunterSettings {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl SuperJobSettings {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Settings {
    /// Loads settings from a TOML file; missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VacancyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Like `from_toml_str`, resolving `${VAR}` placeholders through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_env_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| VacancyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders; unknown ones are left as-is.
    fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VacancyError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn validate_settings(&self) -> Result<()> {
        validate_non_empty_list("languages", &self.languages)?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;
        validate_non_empty_string("headhunter.user_agent", &self.headhunter.user_agent)?;
        if let Some(per_page) = self.headhunter.per_page {
            validate_range("headhunter.per_page", per_page, 1, 100)?;
        }

        validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validate_non_empty_string("superjob.currency", &self.superjob.currency)?;

        if let Some(timeout) = self.request_timeout_seconds {
            validate_range("request_timeout_seconds", timeout, 1, 3600)?;
        }

        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.validate_settings()
    }
}
