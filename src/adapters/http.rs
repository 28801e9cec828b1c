use crate::utils::error::{Result, VacancyError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Sends the request and decodes a JSON body. Any non-2xx status is an error.
pub async fn fetch_json<T: DeserializeOwned>(provider: &str, request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();

    tracing::debug!("{} response status: {} ({})", provider, status, url);

    if !status.is_success() {
        return Err(VacancyError::UnexpectedStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| VacancyError::MalformedResponse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

/// Search phrase sent to the providers, e.g. "Программист Go".
pub fn search_text(prefix: &str, language: &str) -> String {
    format!("{} {}", prefix.trim(), language.trim()).trim().to_string()
}
