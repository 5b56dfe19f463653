use serde::Deserialize;

use crate::model::{account::DriverStatus, api::PaginatedDto};

/// Page selection for admin listings.
#[derive(Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    20
}

impl PaginationParam {
    /// Page size, never zero.
    pub fn per_page(&self) -> u64 {
        self.entries.max(1)
    }

    /// Wraps one page of items in the pagination envelope.
    pub fn into_page<T>(self, items: Vec<T>, total: u64) -> PaginatedDto<T> {
        let per_page = self.per_page();

        PaginatedDto {
            items,
            total,
            page: self.page,
            per_page,
            total_pages: total.div_ceil(per_page),
        }
    }
}

#[derive(Deserialize)]
pub struct DriverStatusParam {
    pub status: Option<DriverStatus>,
}

#[derive(Deserialize)]
pub struct TransactionLimitParam {
    pub limit: Option<u64>,
}
