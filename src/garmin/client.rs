// ABOUTME: Authenticated Garmin Connect API client with session resumption
// ABOUTME: Re-reads GARTH_TOKEN per call, refreshes expired tokens, retries rate limits
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Connect API client
//!
//! Wraps a shared [`reqwest::Client`] with the session handling every tool
//! needs: `GARTH_TOKEN` is re-read from the environment on each call, the
//! decoded token pair is cached until the variable changes, and an expired
//! `OAuth2` token is refreshed through the `OAuth1` exchange before the
//! request goes out.

use crate::config::environment::GarminConfig;
use crate::constants::endpoints::{connectapi_base, API_USER_AGENT};
use crate::constants::{env_config, limits};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::garmin::exchange::{self, OauthConsumer};
use crate::garmin::tokens::SessionTokens;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Retry behavior for rate-limited Connect API calls.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts before a 429 response is surfaced as an error
    pub max_retries: u32,
    /// First backoff delay in milliseconds, doubled per attempt
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: limits::MAX_RETRIES,
            initial_backoff_ms: limits::RETRY_BACKOFF_MS,
        }
    }
}

/// Decoded session plus the raw environment string it came from. The raw
/// string is kept so a changed `GARTH_TOKEN` triggers a reload while a
/// refreshed `OAuth2` token survives between calls.
struct SessionState {
    raw: String,
    tokens: SessionTokens,
}

/// Authenticated Garmin Connect API client.
pub struct GarminClient {
    http: reqwest::Client,
    default_domain: String,
    retry: RetryConfig,
    session: Mutex<Option<SessionState>>,
    consumer: Mutex<Option<OauthConsumer>>,
}

impl GarminClient {
    /// Create a client for the configured Garmin domain.
    ///
    /// # Errors
    ///
    /// Returns a config error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &GarminConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(limits::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            default_domain: config.domain.clone(),
            retry: RetryConfig::default(),
            session: Mutex::new(None),
            consumer: Mutex::new(None),
        })
    }

    /// GET a Connect API endpoint and return its JSON body.
    ///
    /// Empty and `204 No Content` responses yield `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns auth errors when no usable session exists, a rate-limit error
    /// when retries are exhausted, and external-service errors for other
    /// failures.
    pub async fn connectapi(&self, endpoint: &str) -> AppResult<Value> {
        self.execute(endpoint, &[]).await
    }

    /// GET a Connect API endpoint with query parameters.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::connectapi`].
    pub async fn connectapi_with_query(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> AppResult<Value> {
        self.execute(endpoint, query).await
    }

    async fn execute(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<Value> {
        let (base_url, authorization) = self.ensure_session().await?;
        let url = build_url(&base_url, endpoint);
        debug!(url = %url, "Garmin Connect API request");

        let mut attempt: u32 = 0;
        loop {
            let mut request = self
                .http
                .get(&url)
                .header(USER_AGENT, API_USER_AGENT)
                .header(AUTHORIZATION, &authorization);
            if !query.is_empty() {
                request = request.query(query);
            }

            let response = request
                .send()
                .await
                .map_err(|e| AppError::from(e).with_endpoint(endpoint))?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                attempt += 1;
                if attempt >= self.retry.max_retries {
                    warn!(
                        endpoint = %endpoint,
                        max_retries = self.retry.max_retries,
                        "Garmin Connect rate limit hit, retries exhausted"
                    );
                    return Err(AppError::rate_limited().with_endpoint(endpoint));
                }

                let backoff_ms = self.retry.initial_backoff_ms * 2_u64.pow(attempt - 1);
                warn!(
                    endpoint = %endpoint,
                    attempt,
                    backoff_ms,
                    "Garmin Connect rate limit hit, backing off"
                );
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                continue;
            }

            return parse_response(endpoint, response).await;
        }
    }

    /// Resolve a usable session, loading and refreshing tokens as needed.
    ///
    /// Returns the Connect API base URL for the session's domain and the
    /// `Authorization` header value. Both are cloned out so the session lock
    /// is not held across the actual request.
    async fn ensure_session(&self) -> AppResult<(String, String)> {
        let raw = env_config::garth_token()
            .ok_or_else(|| AppError::new(ErrorCode::AuthRequired, "GARTH_TOKEN is not set"))?;

        let mut guard = self.session.lock().await;

        let reusable = guard.as_ref().is_some_and(|state| state.raw == raw);
        if !reusable {
            let tokens = SessionTokens::loads(&raw)?;
            info!(
                domain = %tokens.oauth1.resolved_domain(),
                "resumed Garmin session from GARTH_TOKEN"
            );
            *guard = Some(SessionState { raw, tokens });
        }

        let Some(state) = guard.as_mut() else {
            return Err(AppError::internal("session state unavailable after load"));
        };

        if state.tokens.oauth2.is_expired() {
            info!("OAuth2 token expired, refreshing through token exchange");
            let consumer = self.consumer().await?;
            state.tokens.oauth2 =
                exchange::exchange(&self.http, &consumer, &state.tokens.oauth1).await?;
        }

        let domain = state
            .tokens
            .oauth1
            .domain
            .as_deref()
            .filter(|domain| !domain.is_empty())
            .unwrap_or(&self.default_domain);

        Ok((
            connectapi_base(domain),
            state.tokens.oauth2.authorization_header(),
        ))
    }

    /// Consumer credentials for the token exchange, fetched once and cached.
    async fn consumer(&self) -> AppResult<OauthConsumer> {
        let mut guard = self.consumer.lock().await;
        if let Some(consumer) = guard.as_ref() {
            return Ok(consumer.clone());
        }

        let fetched = exchange::fetch_consumer(&self.http).await?;
        *guard = Some(fetched.clone());
        Ok(fetched)
    }
}

/// Join an endpoint path onto the Connect API base URL.
fn build_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}/{}", endpoint.trim_start_matches('/'))
}

/// Map a Connect API response onto a JSON value or an application error.
async fn parse_response(endpoint: &str, response: reqwest::Response) -> AppResult<Value> {
    let status = response.status();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::new(
            ErrorCode::ExternalAuthFailed,
            format!("Garmin Connect denied the request with HTTP {status}"),
        )
        .with_endpoint(endpoint)),
        StatusCode::NOT_FOUND => {
            Err(AppError::not_found(format!("Garmin Connect resource {endpoint}"))
                .with_endpoint(endpoint))
        }
        _ if status.is_success() => {
            let body = response.text().await.unwrap_or_default();
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&body).map_err(|e| {
                AppError::new(
                    ErrorCode::SerializationError,
                    format!("Garmin Connect returned a non-JSON body for {endpoint}"),
                )
                .with_source(e)
            })
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(
                AppError::external_service("Garmin Connect", format!("HTTP {status}: {body}"))
                    .with_endpoint(endpoint),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_build_url_joins_with_single_slash() {
        let base = "https://connectapi.garmin.com";
        assert_eq!(
            build_url(base, "activity-service/activity/123"),
            "https://connectapi.garmin.com/activity-service/activity/123"
        );
        assert_eq!(
            build_url(base, "/activity-service/activity/123"),
            "https://connectapi.garmin.com/activity-service/activity/123"
        );
    }

    #[test]
    fn test_build_url_keeps_inline_query() {
        assert_eq!(
            build_url(
                "https://connectapi.garmin.cn",
                "gear-service/gear/filterGear?userProfilePk=42"
            ),
            "https://connectapi.garmin.cn/gear-service/gear/filterGear?userProfilePk=42"
        );
    }

    #[test]
    fn test_retry_config_defaults() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_retries, limits::MAX_RETRIES);
        assert_eq!(retry.initial_backoff_ms, limits::RETRY_BACKOFF_MS);
    }

    #[test]
    fn test_client_construction() {
        let config = GarminConfig {
            domain: "garmin.com".to_owned(),
        };
        let client = GarminClient::new(&config).unwrap();
        assert_eq!(client.default_domain, "garmin.com");
    }
}
