use serde::{Deserialize, Serialize};

/// Response envelope returned by every API endpoint.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope with the default message.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status: 200,
            message: "Request successful".to_string(),
            data: Some(data),
            meta: None,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: 201,
            ..Self::ok(data)
        }
    }

    pub fn with_meta(data: T, meta: PageMeta) -> Self {
        Self {
            meta: Some(meta),
            ..Self::ok(data)
        }
    }

    /// Successful envelope with explicitly nullable data, for endpoints that
    /// legitimately return nothing.
    pub fn ok_nullable(data: Option<T>) -> Self {
        Self {
            data,
            ..Self::ok_empty()
        }
    }

    fn ok_empty() -> Self {
        Self {
            success: true,
            status: 200,
            message: "Request successful".to_string(),
            data: None,
            meta: None,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Successful envelope carrying only a message, with null data.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::ok_empty()
        }
    }
}

/// Pagination block carried in the envelope `meta` field.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        Self {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit.max(1)),
        }
    }
}

/// The envelope returned when an API request fails.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub status: u16,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ErrorDto {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            message: message.into(),
            data: None,
        }
    }
}
