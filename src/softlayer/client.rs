// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! REST client for the classic infrastructure DNS services.
//!
//! Calls are one-shot: a failed request is reported to the caller and never retried.

use super::types::{
    CreatedRecord, ErrorBody, Parameters, ResourceRecordTemplate, SrvRecordTemplate, Zone,
    ZoneTemplate,
};
use super::DnsService;
use crate::config::ApiConfig;
use crate::constants::{SERVICE_DNS_DOMAIN, SERVICE_RESOURCE_RECORD, SERVICE_SRV_RECORD};
use crate::errors::ApiError;
use crate::import::{ServiceRecord, TargetRecord};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

/// Client for the `SoftLayer_Dns_*` services.
#[derive(Clone)]
pub struct SoftLayerClient {
    http: HttpClient,
    base_url: String,
    username: String,
    api_key: String,
}

impl std::fmt::Debug for SoftLayerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftLayerClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl SoftLayerClient {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be constructed
    /// (for example when no TLS backend is available).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.endpoint.as_str().trim_end_matches('/').to_string();
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("slcli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport {
                url: base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url,
            username: config.username.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of `service::method`, optionally addressing a path argument.
    fn url(&self, service: &str, method: &str, argument: Option<&str>) -> String {
        match argument {
            Some(argument) => format!("{}/{service}/{method}/{argument}.json", self.base_url),
            None => format!("{}/{service}/{method}.json", self.base_url),
        }
    }

    /// Execute a request and decode the JSON response.
    async fn request<B, T>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + std::fmt::Debug + Sync,
        T: DeserializeOwned,
    {
        debug!(method = %method, url = %url, body = ?body, "API request");

        let mut request = self
            .http
            .request(method.clone(), url)
            .basic_auth(&self.username, Some(&self.api_key));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => (body.code, body.error),
                Err(_) if text.is_empty() => (None, status.to_string()),
                Err(_) => (None, text),
            };
            error!(
                method = %method,
                url = %url,
                status = %status,
                code = ?code,
                error = %message,
                "API request failed"
            );
            return Err(ApiError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                code,
                message,
            });
        }

        debug!(method = %method, url = %url, status = %status, response_len = text.len(), "API request successful");

        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl DnsService for SoftLayerClient {
    async fn create_zone(&self, name: &str) -> Result<Zone, ApiError> {
        let url = self.url(SERVICE_DNS_DOMAIN, "createObject", None);
        let template = ZoneTemplate {
            name,
            resource_records: Vec::new(),
        };
        self.request(Method::POST, &url, Some(&Parameters::new(&template)))
            .await
    }

    async fn get_zone_by_name(&self, name: &str) -> Result<Zone, ApiError> {
        let url = self.url(SERVICE_DNS_DOMAIN, "getByDomainName", Some(name));
        let zones: Vec<Zone> = self.request(Method::GET, &url, None::<&()>).await?;

        zones
            .into_iter()
            .find(|zone| zone.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ApiError::ZoneNotFound {
                zone: name.to_string(),
            })
    }

    async fn create_record(&self, record: &TargetRecord) -> Result<CreatedRecord, ApiError> {
        let url = self.url(SERVICE_RESOURCE_RECORD, "createObject", None);
        let template = ResourceRecordTemplate::from(record);
        self.request(Method::POST, &url, Some(&Parameters::new(&template)))
            .await
    }

    async fn create_service_record(
        &self,
        record: &ServiceRecord,
    ) -> Result<CreatedRecord, ApiError> {
        let url = self.url(SERVICE_SRV_RECORD, "createObject", None);
        let template = SrvRecordTemplate::from(record);
        self.request(Method::POST, &url, Some(&Parameters::new(&template)))
            .await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
