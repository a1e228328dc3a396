use crate::enhancement::traits::EnhancementProvider;
use crate::error::AppError;
use crate::models::EnhancementConfig;
use crate::reading::service::AnnualReadingRequest;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

/// HTTP client for an LLM-backed annual reading endpoint.
///
/// POSTs the reading request as JSON and returns the response body. The body may
/// be the interpretation itself or wrap it under an `"interpretation"` key.
#[derive(Clone)]
pub struct HttpEnhancementClient {
    client: Client,
    endpoint: Url,
    auth_token: Option<String>,
}

impl HttpEnhancementClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// `AppError::Config` when no endpoint is configured or it is not a valid URL.
    pub fn new(config: &EnhancementConfig) -> Result<Self, AppError> {
        let endpoint = config.endpoint.as_deref().ok_or_else(|| {
            AppError::Config("TAROT_ENHANCEMENT_URL is required when enhancement is enabled".to_string())
        })?;
        let endpoint = Url::parse(endpoint)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, request: &AnnualReadingRequest) -> reqwest::RequestBuilder {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.auth_token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("Ignoring malformed enhancement auth token: {}", e),
            }
        }

        self.client
            .post(self.endpoint.clone())
            .headers(headers)
            .json(request)
    }
}

/// Unwraps `{"interpretation": {...}}` envelopes; anything else passes through.
fn unwrap_payload(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("interpretation").is_some_and(Value::is_object) => {
            map.remove("interpretation").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[async_trait]
impl EnhancementProvider for HttpEnhancementClient {
    async fn enhance(&self, request: &AnnualReadingRequest) -> Result<Value, AppError> {
        info!(year = request.year, endpoint = %self.endpoint, "Requesting enhanced interpretation");

        let res = self.build_request(request).send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Enhancement(format!(
                "Enhancement request failed with status {}: {}",
                status, body
            )));
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| AppError::Enhancement(format!("Invalid enhancement response body: {}", e)))?;

        Ok(unwrap_payload(body))
    }
}
