//! Server-side pagination envelope and the row arithmetic built on it.
//!
//! Pages are 1-based everywhere in this module.

use serde::{Deserialize, Serialize};

/// Метаданные пагинации из ответа списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: u32,
    pub current_page: u32,
    pub total_pages: u32,
    pub limit: u32,
}

/// Ответ списка: записи одной страницы плюс метаданные
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Ordinal shown in the `#` column for the item at `index` on `page`.
///
/// A page of 0 is treated as page 1.
pub fn row_ordinal(index: usize, page: u32, limit: u32) -> u64 {
    let page = u64::from(page.max(1));
    index as u64 + 1 + (page - 1) * u64::from(limit)
}

/// Number of rows the server should return for `page`.
pub fn rows_on_page(total: u32, page: u32, limit: u32) -> u32 {
    let skipped = u64::from(limit) * u64::from(page.max(1) - 1);
    let remaining = u64::from(total).saturating_sub(skipped);
    remaining.min(u64::from(limit)) as u32
}

pub fn total_pages(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}
