//! Body extraction for match payloads
//!
//! Unlike `axum::Json`, this does not require a JSON content type and
//! treats an empty body as `null` rather than rejecting it.

use crate::error::AppError;
use crate::store::MatchRecord;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPayload(pub MatchRecord);

impl<S> FromRequest<S> for MatchPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        parse_record(&bytes).map(MatchPayload)
    }
}

fn parse_record(bytes: &[u8]) -> Result<MatchRecord, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}
