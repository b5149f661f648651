//! `Json` and `Query` extractors whose rejections render as [`AppError`].
//!
//! Axum's own rejections answer in plain text; these keep every error body
//! in the `{ "detail": ... }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] in handler arguments.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Drop-in replacement for [`axum::extract::Query`] in handler arguments.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
