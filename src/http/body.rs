//! Request body collection with an optional size cap

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::Request;
use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("failed to read request body: {0}")]
    Read(String),
}

/// Collect the whole request body.
///
/// A declared `Content-Length` over the limit is rejected before reading;
/// bodies without one are checked after collection.
pub async fn read_body<B>(req: Request<B>, limit: Option<u64>) -> Result<Bytes, BodyError>
where
    B: Body,
    B::Error: Display,
{
    if let Some(limit) = limit {
        if let Some(declared) = declared_length(&req) {
            if declared > limit {
                return Err(BodyError::TooLarge { limit });
            }
        }
    }

    let bytes = req
        .into_body()
        .collect()
        .await
        .map_err(|e| BodyError::Read(e.to_string()))?
        .to_bytes();

    match limit {
        Some(limit) if bytes.len() as u64 > limit => Err(BodyError::TooLarge { limit }),
        _ => Ok(bytes),
    }
}

fn declared_length<B>(req: &Request<B>) -> Option<u64> {
    let value = req.headers().get("content-length")?;
    match value.to_str().ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(size) => Some(size),
        None => {
            crate::logger::log_warning(&format!(
                "Invalid Content-Length value: {value:?}, skipping size check"
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;

    fn request(body: &'static str, content_length: Option<&str>) -> Request<Full<Bytes>> {
        let mut builder = Request::post("/api/write-file");
        if let Some(len) = content_length {
            builder = builder.header("content-length", len);
        }
        builder.body(Full::new(Bytes::from(body))).unwrap()
    }

    #[tokio::test]
    async fn test_unlimited() {
        let bytes = read_body(request("{\"a\":1}", None), None).await.unwrap();
        assert_eq!(&bytes[..], b"{\"a\":1}");
    }

    #[tokio::test]
    async fn test_declared_length_over_limit() {
        let err = read_body(request("tiny", Some("1000")), Some(10))
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::TooLarge { limit: 10 }));
    }

    #[tokio::test]
    async fn test_actual_length_over_limit() {
        let err = read_body(request("0123456789abc", None), Some(10))
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::TooLarge { .. }));
    }

    #[tokio::test]
    async fn test_within_limit() {
        let bytes = read_body(request("0123456789", Some("10")), Some(10))
            .await
            .unwrap();
        assert_eq!(bytes.len(), 10);
    }
}
