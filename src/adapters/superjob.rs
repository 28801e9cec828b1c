use crate::adapters::http::{fetch_json, search_text};
use crate::adapters::pacing::RequestPacer;
use crate::config::settings::SuperJobSettings;
use crate::domain::model::{Listing, SalaryBounds, VacancyPage};
use crate::domain::ports::{Pagination, VacancySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const PROVIDER_NAME: &str = "SuperJob";
pub const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SearchPage {
    total: u64,
    objects: Vec<Vacancy>,
}

// Unspecified payments come back as 0.
#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: Option<i64>,
    payment_to: Option<i64>,
    currency: Option<String>,
}

impl From<SearchPage> for VacancyPage {
    fn from(page: SearchPage) -> Self {
        let listings = page
            .objects
            .into_iter()
            .map(|vacancy| Listing {
                currency: vacancy.currency,
                bounds: SalaryBounds::new(vacancy.payment_from, vacancy.payment_to),
            })
            .collect();

        VacancyPage {
            found: page.total,
            pages: None,
            listings,
        }
    }
}

pub struct SuperJobSource {
    client: Client,
    settings: SuperJobSettings,
    token: String,
    pacer: RequestPacer,
}

impl SuperJobSource {
    pub fn new(client: Client, settings: SuperJobSettings, token: String) -> Self {
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
        vec![
            ("keyword", search_text(&self.settings.search_prefix, language)),
            ("page", page.to_string()),
            ("town", self.settings.town.clone()),
            ("period", self.settings.period_days.to_string()),
            ("catalogues", self.settings.catalogue.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn pagination(&self) -> Pagination {
        Pagination::UntilEmpty
    }

    fn target_currency(&self) -> &str {
        &self.settings.currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        if page > 0 {
            self.pacer.pause().await;
        }

        tracing::debug!("Requesting {} page {} for {}", PROVIDER_NAME, page, language);
        let request = self
            .client
            .get(&self.settings.endpoint)
            .header(APP_ID_HEADER, &self.token)
            .query(&self.query(language, page));

        let page: SearchPage = fetch_json(PROVIDER_NAME, request).await?;
        Ok(page.into())
    }
}
