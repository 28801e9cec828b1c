use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// How a source signals that a language has no more pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Every page carries the total page count.
    PageCount,
    /// Paging stops at the first page without listings.
    UntilEmpty,
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    fn name(&self) -> &str;
    fn pagination(&self) -> Pagination;
    /// Currency code a listing must carry to be counted.
    fn target_currency(&self) -> &str;
    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}
