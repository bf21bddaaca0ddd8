// ABOUTME: JSON body extractor with a uniform 400 rejection
// ABOUTME: Accepts any content type and reports syntax and type errors alike as a bad body

use std::convert::Infallible;
use std::marker::PhantomData;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

/// Decodes the request body as JSON.
///
/// Unlike `axum::Json`, this does not require a `Content-Type` header, and every
/// decoding failure, whether syntax or a type mismatch, is rejected with
/// [`ApiError::InvalidBody`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        decode_json(&bytes).map(JsonBody)
    }
}

/// A JSON body whose read and decode errors are held back until [`DeferredJson::decode`].
///
/// Lets a handler validate its path first and still answer a bad body, including one over
/// the size limit, with [`ApiError::InvalidBody`].
#[derive(Debug)]
pub struct DeferredJson<T> {
    body: Result<Bytes, ApiError>,
    _target: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> DeferredJson<T> {
    pub fn decode(self) -> Result<T, ApiError> {
        decode_json(&self.body?)
    }
}

impl<S, T> FromRequest<S> for DeferredJson<T>
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(DeferredJson {
            body: read_body(req, state).await,
            _target: PhantomData,
        })
    }
}

async fn read_body<S: Send + Sync>(req: Request, state: &S) -> Result<Bytes, ApiError> {
    Bytes::from_request(req, state).await.map_err(|e| {
        warn!(error = %e, "Failed to read request body");
        ApiError::InvalidBody
    })
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        warn!(error = %e, "Invalid request body");
        ApiError::InvalidBody
    })
}
