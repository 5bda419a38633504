pub mod board;
pub mod profiles;

use serde::Deserialize;

/// Pagination query parameters shared by the page and API routes.
///
/// Accepted but not wired to any on-page control; the defaults match the
/// listing's page 0 / size 10 contract.
#[derive(Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(spellscan_sdk::config::DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
            .unwrap_or(spellscan_sdk::config::DEFAULT_PAGE_SIZE)
    }
}
