use crate::adapters::http::build_client;
use crate::adapters::{HeadHunterSource, SuperJobSource};
use crate::app::report::{render_json, render_table};
use crate::config::{Credentials, Settings};
use crate::core::aggregator::Aggregator;
use crate::domain::model::StatisticsReport;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct ProviderReport {
    pub title: String,
    pub report: StatisticsReport,
}

impl ProviderReport {
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            render_json(&self.title, &self.report)
        } else {
            Ok(render_table(&self.title, &self.report))
        }
    }
}

/// Collects the HeadHunter report, then the SuperJob report.
///
/// Requests are strictly sequential. The first failure aborts the whole run
/// and no report is returned.
pub async fn collect_reports(
    settings: &Settings,
    credentials: &Credentials,
) -> Result<Vec<ProviderReport>> {
    let client = build_client(settings.request_timeout())?;

    let headhunter = Aggregator::new(HeadHunterSource::new(
        client.clone(),
        settings.headhunter.clone(),
        credentials.headhunter_token.clone(),
    ));
    tracing::info!("Collecting {} for {} languages", settings.headhunter.title, settings.languages.len());
    let headhunter_report = headhunter.collect(&settings.languages).await?;

    let superjob = Aggregator::new(SuperJobSource::new(
        client,
        settings.superjob.clone(),
        credentials.superjob_token.clone(),
    ));
    tracing::info!("Collecting {} for {} languages", settings.superjob.title, settings.languages.len());
    let superjob_report = superjob.collect(&settings.languages).await?;

    Ok(vec![
        ProviderReport {
            title: settings.headhunter.title.clone(),
            report: headhunter_report,
        },
        ProviderReport {
            title: settings.superjob.title.clone(),
            report: superjob_report,
        },
    ])
}

pub fn render_reports(reports: &[ProviderReport], json: bool) -> Result<String> {
    let rendered = reports
        .iter()
        .map(|report| report.render(json))
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join("\n"))
}
