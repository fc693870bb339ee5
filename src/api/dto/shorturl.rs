//! DTOs for the short URL endpoints.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;

use crate::domain::entities::UrlRecord;

/// Submission for `POST /api/shorturl`.
///
/// Accepts a JSON object or a urlencoded form carrying a `url` field. The
/// extractor never rejects: a missing body, an unknown content type, a
/// malformed payload or a repeated form key all yield `url: None`, and a
/// JSON value of the wrong type is kept as-is. Validation then reports both
/// cases as "not a string".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortUrlRequest {
    pub url: Option<Value>,
}

impl ShortUrlRequest {
    /// The submitted URL when it is a string.
    pub fn url_text(&self) -> Option<&str> {
        self.url.as_ref().and_then(Value::as_str)
    }

    fn from_json(body: &[u8]) -> Self {
        let url = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => fields.remove("url"),
            _ => None,
        };

        Self { url }
    }

    fn from_form(body: &[u8]) -> Self {
        let mut values = url::form_urlencoded::parse(body)
            .filter(|(key, _)| key == "url")
            .map(|(_, value)| value.into_owned());

        let url = match (values.next(), values.next()) {
            (Some(single), None) => Some(Value::String(single)),
            _ => None,
        };

        Self { url }
    }
}

impl<S> FromRequest<S> for ShortUrlRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        let Ok(body) = Bytes::from_request(req, state).await else {
            return Ok(Self::default());
        };

        let request = if content_type.starts_with("application/json") {
            Self::from_json(&body)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            Self::from_form(&body)
        } else {
            Self::default()
        };

        Ok(request)
    }
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<UrlRecord> for ShortUrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
