pub mod aggregator;
pub mod estimator;

pub use crate::domain::model::{LanguageStat, Listing, SalaryBounds, StatisticsReport, VacancyPage};
pub use crate::domain::ports::{Pagination, VacancySource};
pub use crate::utils::error::Result;
