//! Success-response envelope.
//!
//! Every loyalty endpoint that returns a body wraps it in `{ "data": ... }`;
//! error bodies carry `{ "error": ..., "code": ... }` instead (see
//! `crate::error`).

use serde::Serialize;

/// The `{ "data": T }` wrapper around a successful response payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
