use crate::adapters::http::{fetch_json, search_text};
use crate::adapters::pacing::RequestPacer;
use crate::config::settings::HeadHunterSettings;
use crate::domain::model::{Listing, SalaryBounds, VacancyPage};
use crate::domain::ports::{Pagination, VacancySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;

pub const PROVIDER_NAME: &str = "HeadHunter";

#[derive(Debug, Deserialize)]
struct SearchPage {
    found: u64,
    pages: u32,
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<i64>,
    to: Option<i64>,
    currency: Option<String>,
}

impl From<SearchPage> for VacancyPage {
    fn from(page: SearchPage) -> Self {
        let listings = page
            .items
            .into_iter()
            .map(|vacancy| match vacancy.salary {
                Some(salary) => Listing {
                    currency: salary.currency,
                    bounds: SalaryBounds::new(salary.from, salary.to),
                },
                None => Listing {
                    currency: None,
                    bounds: SalaryBounds::default(),
                },
            })
            .collect();

        VacancyPage {
            found: page.found,
            pages: Some(page.pages),
            listings,
        }
    }
}

/// Resume-board source backed by the HeadHunter vacancy search API.
pub struct HeadHunterSource {
    client: Client,
    settings: HeadHunterSettings,
    token: Option<String>,
    pacer: RequestPacer,
}

impl HeadHunterSource {
    pub fn new(client: Client, settings: HeadHunterSettings, token: Option<String>) -> Self {
        let pacer = RequestPacer::new(settings.request_delay());
        Self {
            client,
            settings,
            token,
            pacer,
        }
    }

    pub fn with_pacer(mut self, pacer: RequestPacer) -> Self {
        self.pacer = pacer;
        self
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("area", self.settings.area.to_string()),
            ("page", page.to_string()),
            ("text", search_text(&self.settings.search_prefix, language)),
            ("only_with_salary", "true".to_string()),
        ];
        if let Some(per_page) = self.settings.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn pagination(&self) -> Pagination {
        Pagination::PageCount
    }

    fn target_currency(&self) -> &str {
        &self.settings.currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        self.pacer.pause().await;

        tracing::debug!("Requesting {} page {} for {}", PROVIDER_NAME, page, language);
        let mut request = self
            .client
            .get(&self.settings.endpoint)
            .header(USER_AGENT, &self.settings.user_agent)
            .query(&self.query(language, page));
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let page: SearchPage = fetch_json(PROVIDER_NAME, request).await?;
        Ok(page.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_page_conversion() {
        let body = serde_json::json!({
            "found": 2,
            "pages": 1,
            "per_page": 20,
            "items": [
                {"id": "1", "salary": {"from": 100000, "to": null, "currency": "RUR", "gross": true}},
                {"id": "2", "salary": null}
            ]
        });

        let page: SearchPage = serde_json::from_value(body).unwrap();
        let page = VacancyPage::from(page);

        assert_eq!(page.found, 2);
        assert_eq!(page.pages, Some(1));
        assert_eq!(page.listings[0].currency.as_deref(), Some("RUR"));
        assert_eq!(page.listings[0].bounds, SalaryBounds::new(Some(100_000), None));
        assert_eq!(page.listings[1].currency, None);
    }

    #[test]
    fn test_query_includes_per_page_when_set() {
        let settings = HeadHunterSettings {
            per_page: Some(50),
            ..Default::default()
        };
        let source = HeadHunterSource::new(Client::new(), settings, None);
        let query = source.query("Go", 3);

        assert!(query.contains(&("area", "1".to_string())));
        assert!(query.contains(&("page", "3".to_string())));
        assert!(query.contains(&("text", "Программист Go".to_string())));
        assert!(query.contains(&("per_page", "50".to_string())));
    }
}
