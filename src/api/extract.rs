//! Request Extractors
//!
//! `ApiJson` wraps axum's `Json` so body rejections come back as
//! `ApiError` with the usual `{"error": ...}` body instead of plain text.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejection is an `ApiError`.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
