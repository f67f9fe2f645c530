//! Cloudflare REST API client.
//!
//! Blocking, one request at a time. Deletes report the raw status and body
//! rather than failing on an HTTP error status; only transport problems are
//! errors there. Listing decodes the standard `{success, errors, result,
//! result_info}` envelope and does fail on `success: false`.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::constants::NAMESPACE_PAGE_SIZE;
use crate::core::namespace::Namespace;
use crate::core::wrangler::Credentials;
use crate::error::{ApiError, Result};

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Status and body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    result: Option<T>,
    result_info: Option<ResultInfo>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResultInfo {
    #[serde(default)]
    total_pages: Option<u32>,
}

/// Account-scoped API client.
pub struct CloudflareApi {
    client: Client,
    account_url: String,
    api_token: String,
}

impl CloudflareApi {
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self> {
        let account_url = format!(
            "{}/accounts/{}",
            base_url.trim_end_matches('/'),
            credentials.account_id
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(concat!("workers-preview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Transport {
                url: account_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            account_url,
            api_token: credentials.api_token.clone(),
        })
    }

    /// `DELETE /accounts/<account>/workers/scripts/<name>`
    pub fn delete_script(&self, name: &str) -> Result<ApiResponse> {
        self.delete(&format!("{}/workers/scripts/{}", self.account_url, name))
    }

    /// `DELETE /accounts/<account>/storage/kv/namespaces/<id>`
    pub fn delete_namespace(&self, id: &str) -> Result<ApiResponse> {
        self.delete(&format!(
            "{}/storage/kv/namespaces/{}",
            self.account_url, id
        ))
    }

    /// All KV namespaces in the account, following pagination.
    pub fn list_namespaces(&self) -> Result<Vec<Namespace>> {
        let url = format!("{}/storage/kv/namespaces", self.account_url);
        let mut namespaces = Vec::new();
        let mut page = 1u32;

        loop {
            debug!(%url, page, "listing namespaces");
            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.api_token)
                .query(&[("page", page), ("per_page", NAMESPACE_PAGE_SIZE)])
                .send()
                .map_err(|source| ApiError::Transport {
                    url: url.clone(),
                    source,
                })?;
            let status = response.status().as_u16();
            let envelope: Envelope<Vec<Namespace>> =
                response.json().map_err(|source| ApiError::Decode {
                    url: url.clone(),
                    source,
                })?;

            if !envelope.success {
                let message = envelope
                    .errors
                    .iter()
                    .map(|e| format!("{} ({})", e.message, e.code))
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ApiError::Unsuccessful {
                    url,
                    status,
                    message,
                }
                .into());
            }

            let batch = envelope.result.unwrap_or_default();
            let fetched = batch.len();
            namespaces.extend(batch);

            let total_pages = envelope
                .result_info
                .and_then(|info| info.total_pages)
                .unwrap_or(page);
            if fetched == 0 || page >= total_pages {
                break;
            }
            page += 1;
        }

        debug!(count = namespaces.len(), "namespaces listed");
        Ok(namespaces)
    }

    fn delete(&self, url: &str) -> Result<ApiResponse> {
        debug!(%url, "DELETE");
        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.api_token)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })?;
        let response = ApiResponse { status, body };

        if response.is_success() {
            debug!(status, "deleted");
        } else {
            warn!(%url, status, body = %response.body, "delete was not successful");
        }
        Ok(response)
    }
}
