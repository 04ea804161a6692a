//! Custom extractors for Axum handlers.
//!
//! All extractors reject with [`AppError`](crate::AppError), so malformed input surfaces in
//! the standard error envelope instead of axum's plain-text rejections.

pub mod id_path;
pub mod json_body;
pub mod validated_json;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use validated_json::ValidatedJson;
