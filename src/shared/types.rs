use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for every JSON response, success or error
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

/// Listing metadata; `total` is the number of items returned
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl Meta {
    pub fn counting(len: usize) -> Self {
        Self {
            total: i64::try_from(len).unwrap_or(i64::MAX),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful listing with `meta.total` set to the item count
    pub fn listing(items: Vec<T>) -> Self {
        let meta = Meta::counting(items.len());
        Self::success(Some(items), None, Some(meta))
    }
}
