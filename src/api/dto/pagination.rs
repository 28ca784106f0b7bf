//! Pagination query parameters for the listing endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Lower/upper bound for `per_page`.
const PER_PAGE_MIN: u32 = 1;
const PER_PAGE_MAX: u32 = 100;

/// Query parameters for `GET /api/urls`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl ListQueryParams {
    /// Validates the parameters and resolves defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `per_page`: 100
    ///
    /// # Validation
    ///
    /// - `page` must be > 0
    /// - `per_page` must be in [1, 100]
    ///
    /// Out-of-range values are rejected here, before any storage call.
    ///
    /// # Returns
    ///
    /// `(page, per_page)` for the listing query.
    pub fn validate_and_resolve(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(PER_PAGE_MAX);

        if page == 0 {
            return Err("page must be greater than 0".to_string());
        }

        if !(PER_PAGE_MIN..=PER_PAGE_MAX).contains(&per_page) {
            return Err(format!(
                "per_page must be between {} and {}",
                PER_PAGE_MIN, PER_PAGE_MAX
            ));
        }

        Ok((i64::from(page), i64::from(per_page)))
    }
}
