pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HeadHunterSource, RequestPacer, SuperJobSource};
pub use app::report::{render_json, render_table};
pub use app::runner::{collect_reports, render_reports, ProviderReport};
pub use config::{Credentials, Settings};
pub use crate::core::aggregator::Aggregator;
pub use crate::core::estimator::estimate_salary;
pub use domain::model::{LanguageStat, SalaryBounds, StatisticsReport};
pub use utils::error::{Result, VacancyError};
