//! HTTP middleware.

pub mod cors;
pub mod request_id;
