use crate::core::estimator::{average_salary, estimate_salary};
use crate::domain::model::{LanguageStat, StatisticsReport, VacancyPage};
use crate::domain::ports::{Pagination, VacancySource};
use crate::utils::error::{Result, VacancyError};

/// Pages through a source for each language and reduces listings to statistics.
pub struct Aggregator<S: VacancySource> {
    source: S,
}

impl<S: VacancySource> Aggregator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Builds a fresh report with one entry per language, in the given order.
    pub async fn collect<L: AsRef<str>>(&self, languages: &[L]) -> Result<StatisticsReport> {
        let mut report = StatisticsReport::new();

        for language in languages {
            let language = language.as_ref();
            let stat = self.collect_language(language).await?;
            tracing::info!(
                "{} / {}: found {}, processed {}, average {:?}",
                self.source.name(),
                language,
                stat.vacancies_found,
                stat.vacancies_processed,
                stat.average_salary
            );
            report.insert(language, stat);
        }

        Ok(report)
    }

    pub async fn collect_language(&self, language: &str) -> Result<LanguageStat> {
        let mut estimates = Vec::new();
        let mut vacancies_found = 0;
        let mut page_number = 0u32;

        loop {
            let page = self.source.fetch_page(language, page_number).await?;
            tracing::debug!(
                "{} / {}: page {} with {} listings",
                self.source.name(),
                language,
                page_number,
                page.listings.len()
            );

            if page_number == 0 {
                vacancies_found = page.found;
            }

            if self.source.pagination() == Pagination::UntilEmpty && page.listings.is_empty() {
                break;
            }

            self.accumulate(&page, &mut estimates);

            if self.source.pagination() == Pagination::PageCount {
                let pages = page.pages.ok_or_else(|| VacancyError::MalformedResponse {
                    provider: self.source.name().to_string(),
                    message: "page count missing from search results".to_string(),
                })?;
                if page_number + 1 >= pages {
                    break;
                }
            }

            page_number += 1;
        }

        Ok(LanguageStat {
            vacancies_found,
            vacancies_processed: estimates.len() as u64,
            average_salary: average_salary(&estimates),
        })
    }

    fn accumulate(&self, page: &VacancyPage, estimates: &mut Vec<i64>) {
        let currency = self.source.target_currency();
        let usable = page
            .listings
            .iter()
            .filter(|listing| listing.currency.as_deref() == Some(currency))
            .filter_map(|listing| estimate_salary(listing.bounds));
        estimates.extend(usable);
    }
}
