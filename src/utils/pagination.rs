use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// One page of results plus the numbers a client needs to walk the rest.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u32, page: u32, per_page: u32) -> Paginated<T> {
        let per_page = per_page.max(1);

        Self {
            items,
            meta: PageMeta {
                total,
                page: page.max(1),
                per_page,
                total_pages: total.div_ceil(per_page),
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn first_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        self.per_page.clamp(1, MAX_PER_PAGE) as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) as i64 - 1) * self.limit()
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let Query(pagination) = parts
            .extract::<Query<Pagination>>()
            .await
            .map_err(|err| {
                tracing::warn!("Rejected pagination options: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "page and per_page must be positive integers" })),
                )
                    .into_response()
            })?;

        Ok(Pagination {
            page: pagination.page.max(1),
            per_page: pagination.per_page.clamp(1, MAX_PER_PAGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_offset_from_page() {
        let pagination = Pagination {
            page: 3,
            per_page: 20,
        };

        assert_eq!(pagination.limit(), 20);
        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn clamps_zero_page_and_size() {
        let pagination = Pagination {
            page: 0,
            per_page: 0,
        };

        assert_eq!(pagination.limit(), 1);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn caps_page_size() {
        let pagination = Pagination {
            page: 1,
            per_page: 5000,
        };

        assert_eq!(pagination.limit(), MAX_PER_PAGE as i64);
    }

    #[test]
    fn counts_partial_last_page() {
        let page = Paginated::new(vec![1, 2, 3], 21, 1, 10);

        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.map(|n| n * 2).items, vec![2, 4, 6]);
    }
}
