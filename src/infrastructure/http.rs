//! HTTP License Service Adapter
//!
//! Implements `CatalogProvider` and `LicenseService` over a blocking
//! `reqwest` client. Every failure is terminal; nothing is retried.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::domain::entities::{Domain, LicenseRequest, Restriction, Source};
use crate::domain::ports::{CatalogProvider, LicenseReceipt, LicenseService, RawCatalog, ServiceError};
use crate::domain::value_objects::{LicenseId, MediaType};

pub const DEFAULT_BASE_URL: &str = "https://api.generator.licenses.ai/api/v1/license/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const RESTRICTION_PATH: &str = "restriction/";
const DOMAIN_PATH: &str = "domain/";
const SOURCE_PATH: &str = "source/";

/// Clones share the connection pool.
#[derive(Clone)]
pub struct HttpLicenseApi {
    client: Client,
    base_url: Url,
}

impl HttpLicenseApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("railgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url.join(path).map_err(|e| ServiceError::Transport {
            message: format!("invalid endpoint '{path}': {e}"),
        })
    }

    fn get(&self, url: Url) -> Result<Response, ServiceError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().map_err(transport)?;
        tracing::debug!(status = %response.status(), "response");
        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let response = self.get(self.endpoint(path)?)?;
        decode_json(ensure_success(response)?)
    }

    /// `GET domain/`; anything but 200 means the service is unavailable.
    fn probe(&self) -> Result<Response, ServiceError> {
        let response = self.get(self.endpoint(DOMAIN_PATH)?)?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(response)
        } else {
            tracing::warn!(%status, "license service availability probe failed");
            Err(ServiceError::Unavailable {
                status: status.as_u16(),
            })
        }
    }
}

impl CatalogProvider for HttpLicenseApi {
    fn check_available(&self) -> Result<(), ServiceError> {
        self.probe().map(|_| ())
    }

    /// Domains come first: their answer doubles as the availability probe.
    fn fetch_catalog(&self) -> Result<RawCatalog, ServiceError> {
        let domains: Vec<Domain> = decode_json(self.probe()?)?;
        let restrictions: Vec<Restriction> = self.get_json(RESTRICTION_PATH)?;
        let sources: Vec<Source> = self.get_json(SOURCE_PATH)?;
        tracing::debug!(
            restrictions = restrictions.len(),
            domains = domains.len(),
            sources = sources.len(),
            "catalog fetched"
        );

        Ok(RawCatalog {
            restrictions,
            domains,
            sources,
        })
    }
}

impl LicenseService for HttpLicenseApi {
    fn submit(&self, request: &LicenseRequest) -> Result<LicenseReceipt, ServiceError> {
        tracing::debug!(url = %self.base_url, label = %request.terms.label(), "POST license");
        let response = self
            .client
            .post(self.base_url.clone())
            .json(request)
            .send()
            .map_err(transport)?;
        tracing::debug!(status = %response.status(), "response");

        let receipt: LicenseReceipt = decode_json(ensure_success(response)?)?;
        tracing::debug!(id = %receipt.id, "license stored");
        Ok(receipt)
    }

    fn generate_url(&self, id: &LicenseId, media: MediaType) -> String {
        format!("{}{}/generate?media_type={}", self.base_url, id, media.mime())
    }

    fn generate(&self, id: &LicenseId, media: MediaType) -> Result<String, ServiceError> {
        let url = Url::parse(&self.generate_url(id, media)).map_err(|e| ServiceError::Transport {
            message: format!("invalid license id '{id}': {e}"),
        })?;
        let response = ensure_success(self.get(url)?)?;
        response.text().map_err(|e| ServiceError::Decode {
            message: e.to_string(),
        })
    }
}

/// Parse `raw` and make sure joining relative paths keeps its last segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).with_context(|| format!("Invalid API URL '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Invalid API URL '{raw}': expected http or https");
    }
    Ok(url)
}

/// Translate a non-2xx answer into the error the user sees.
///
/// 429 bodies carry `{"error": ...}`, other failures `{"detail": ...}`.
pub fn map_error_response(status: u16, body: &str) -> ServiceError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let field = |key: &str| {
        parsed.as_ref().and_then(|v| v.get(key)).map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    };
    let fallback = || {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown error")
                .to_string()
        } else {
            trimmed.to_string()
        }
    };

    if status == 429 {
        ServiceError::RateLimited {
            message: field("error").unwrap_or_else(fallback),
        }
    } else {
        ServiceError::Rejected {
            status,
            detail: field("detail").unwrap_or_else(fallback),
        }
    }
}

fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let err = map_error_response(status.as_u16(), &body);
    tracing::warn!(%status, error = %err, "license service request failed");
    Err(err)
}

fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let body = response.text().map_err(|e| ServiceError::Decode {
        message: e.to_string(),
    })?;
    serde_json::from_str(&body).map_err(|e| ServiceError::Decode {
        message: e.to_string(),
    })
}

fn transport(err: reqwest::Error) -> ServiceError {
    tracing::warn!(error = %err, "license service unreachable");
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };
    ServiceError::Transport { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = normalize_base_url("http://localhost:8000/api/v1/license").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/license/");
        assert_eq!(
            url.join("domain/").unwrap().as_str(),
            "http://localhost:8000/api/v1/license/domain/"
        );
    }

    #[test]
    fn base_url_rejects_other_schemes() {
        assert!(normalize_base_url("ftp://example.com/").is_err());
        assert!(normalize_base_url("not a url").is_err());
    }

    #[test]
    fn generate_url_uses_plain_media_type() {
        let api = HttpLicenseApi::new(DEFAULT_BASE_URL, Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.generate_url(&LicenseId::new("42"), MediaType::Markdown),
            "https://api.generator.licenses.ai/api/v1/license/42/generate?media_type=text/markdown"
        );
    }

    #[test]
    fn rate_limit_uses_error_field() {
        let err = map_error_response(429, r#"{"error": "Too many licenses today"}"#);
        assert_eq!(
            err,
            ServiceError::RateLimited {
                message: "Too many licenses today".to_string()
            }
        );
    }

    #[test]
    fn rejection_uses_detail_field() {
        let err = map_error_response(400, r#"{"detail": "restriction 99 does not exist"}"#);
        assert_eq!(
            err,
            ServiceError::Rejected {
                status: 400,
                detail: "restriction 99 does not exist".to_string()
            }
        );
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = map_error_response(422, r#"{"detail": [{"loc": ["body", "name"]}]}"#);
        match err {
            ServiceError::Rejected { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("\"loc\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_falls_back_to_text_or_reason() {
        assert_eq!(
            map_error_response(502, "upstream down"),
            ServiceError::Rejected {
                status: 502,
                detail: "upstream down".to_string()
            }
        );
        assert_eq!(
            map_error_response(500, ""),
            ServiceError::Rejected {
                status: 500,
                detail: "Internal Server Error".to_string()
            }
        );
    }
}
