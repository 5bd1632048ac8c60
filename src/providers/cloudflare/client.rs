use std::time::Duration;

use reqwest::{Client, StatusCode, header};

use crate::providers::cloudflare::error::CloudflareProviderError;
use crate::providers::cloudflare::types::*;

const PER_PAGE: u32 = 100;

pub struct CloudflareConfig {
    pub email: String,
    pub api_key: String,
    pub api_url: String,
}

pub struct CloudflareClient {
    config: CloudflareConfig,
    client: Client,
}

impl CloudflareClient {
    pub fn new(config: CloudflareConfig) -> Result<Self, CloudflareProviderError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "X-Auth-Email",
            header::HeaderValue::from_str(&config.email)
                .map_err(|_| CloudflareProviderError::Auth("invalid e-mail value".to_string()))?,
        );
        let mut api_key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| CloudflareProviderError::Auth("invalid API key value".to_string()))?;
        api_key.set_sensitive(true);
        headers.insert("X-Auth-Key", api_key);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { config, client })
    }

    /// Lists zones, optionally filtered by exact name.
    pub async fn zones(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<CloudflareZone>, CloudflareProviderError> {
        self.get_paged("/zones", name.map(|n| ("name", n))).await
    }

    pub async fn post_zone(
        &self,
        req: &CreateZoneRequest,
    ) -> Result<CloudflareZone, CloudflareProviderError> {
        let url = format!("{}/zones", self.config.api_url);
        self.handle_request(self.client.post(url).json(req).send())
            .await
    }

    pub async fn dns_records(
        &self,
        zone_id: &str,
    ) -> Result<Vec<CloudflareRecord>, CloudflareProviderError> {
        self.get_paged(&format!("/zones/{zone_id}/dns_records"), None)
            .await
    }

    pub async fn post_dns_record(
        &self,
        zone_id: &str,
        req: &CreateRecordRequest,
    ) -> Result<CloudflareRecord, CloudflareProviderError> {
        let url = format!("{}/zones/{}/dns_records", self.config.api_url, zone_id);
        self.handle_request(self.client.post(url).json(req).send())
            .await
    }

    pub async fn delete_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
    ) -> Result<(), CloudflareProviderError> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.config.api_url, zone_id, record_id
        );
        let _: DeletedRecord = self.handle_request(self.client.delete(url).send()).await?;
        Ok(())
    }

    /// Walks a paginated list endpoint until `result_info` says there are no
    /// further pages.
    async fn get_paged<T>(
        &self,
        path: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<T>, CloudflareProviderError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.config.api_url, path);
        let mut results = Vec::new();
        let mut page = 1u32;
        loop {
            let mut request = self
                .client
                .get(&url)
                .query(&[("page", page.to_string()), ("per_page", PER_PAGE.to_string())]);
            if let Some((key, value)) = filter {
                request = request.query(&[(key, value)]);
            }
            let response = request.send().await?;
            let body: ApiResponse<Vec<T>> = read_envelope(response).await?;
            results.extend(body.result.unwrap_or_default());
            match body.result_info {
                Some(info) if info.page < info.total_pages => page = info.page + 1,
                _ => break,
            }
        }
        Ok(results)
    }

    async fn handle_request<T, F>(&self, fut: F) -> Result<T, CloudflareProviderError>
    where
        F: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
        T: serde::de::DeserializeOwned,
    {
        let response = fut.await?;
        let body: ApiResponse<T> = read_envelope(response).await?;
        body.result.ok_or(CloudflareProviderError::InvalidResponse)
    }
}

async fn read_envelope<T>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>, CloudflareProviderError>
where
    T: serde::de::DeserializeOwned,
{
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => Err(CloudflareProviderError::RateLimited),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let message = response
                .json::<ApiResponse<serde_json::Value>>()
                .await
                .ok()
                .and_then(|body| body.errors.into_iter().next())
                .map(|error| error.message)
                .unwrap_or_else(|| "authentication rejected".to_string());
            Err(CloudflareProviderError::Auth(message))
        }
        _ => {
            let body: ApiResponse<T> = response.json().await?;
            if body.success {
                Ok(body)
            } else {
                let error = body.errors.into_iter().next().unwrap_or(ApiError {
                    code: 0,
                    message: "unknown error".to_string(),
                });
                Err(CloudflareProviderError::Api {
                    code: error.code,
                    message: error.message,
                })
            }
        }
    }
}
