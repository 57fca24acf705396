use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Pagination echo attached to every collection response. `next_page` is the
/// offset of the next page, or `null` when the listed window already reaches
/// the end of the collection.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
    #[serde(rename = "nextPage")]
    pub next_page: Option<u64>,
}

impl Pagination {
    pub fn new(limit: u64, offset: u64, total: u64) -> Self {
        // limit and offset come straight from the query string; a window
        // too large to add up already reaches past the end
        let next_page = offset.checked_add(limit).filter(|next| *next < total);

        Self {
            limit,
            offset,
            total,
            next_page,
        }
    }
}
