use crate::utils::error::{Result, VacancyError};
use reqwest::header::HeaderValue;

pub const SUPERJOB_TOKEN_VAR: &str = "SUPER_JOB_TOKEN";
pub const HEADHUNTER_TOKEN_VAR: &str = "HH_ACCESS_TOKEN";

/// API keys for both job boards.
///
/// The SuperJob key is mandatory. HeadHunter's public search works without a
/// token, so it is only attached when present.
#[derive(Clone)]
pub struct Credentials {
    pub superjob_token: String,
    pub headhunter_token: Option<String>,
}

impl Credentials {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let superjob_token =
            non_blank(SUPERJOB_TOKEN_VAR).ok_or_else(|| VacancyError::MissingCredential {
                variable: SUPERJOB_TOKEN_VAR.to_string(),
            })?;
        ensure_header_safe(SUPERJOB_TOKEN_VAR, &superjob_token)?;

        let headhunter_token = non_blank(HEADHUNTER_TOKEN_VAR);
        if let Some(token) = &headhunter_token {
            ensure_header_safe(HEADHUNTER_TOKEN_VAR, token)?;
        }

        Ok(Self {
            superjob_token,
            headhunter_token,
        })
    }
}

// Tokens travel as header values; control characters would only fail at send time.
fn ensure_header_safe(variable: &str, token: &str) -> Result<()> {
    HeaderValue::from_str(token)
        .map(|_| ())
        .map_err(|_| VacancyError::InvalidConfigValueError {
            field: variable.to_string(),
            value: "***".to_string(),
            reason: "Token contains characters that are not allowed in an HTTP header".to_string(),
        })
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("superjob_token", &"***")
            .field("headhunter_token", &self.headhunter_token.as_ref().map(|_| "***"))
            .finish()
    }
}
