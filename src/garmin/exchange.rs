// ABOUTME: OAuth1-to-OAuth2 token exchange against the Garmin auth service
// ABOUTME: Fetches consumer credentials and refreshes expired Bearer tokens
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Token exchange
//!
//! An expired `OAuth2` Bearer token is refreshed by re-running the exchange:
//! a signed POST to the oauth-service using the long-lived `OAuth1`
//! credential. The consumer key pair used for signing is published by the
//! upstream garth project and fetched once per process.

use crate::constants::endpoints::{MOBILE_USER_AGENT, OAUTH_CONSUMER_URL, OAUTH_EXCHANGE_PATH};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::garmin::oauth1::Oauth1Signer;
use crate::garmin::tokens::{OAuth1Token, OAuth2Token};
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

/// Consumer key pair published for garth-compatible clients.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OauthConsumer {
    /// `OAuth1` consumer key
    pub consumer_key: String,
    /// `OAuth1` consumer secret
    pub consumer_secret: String,
}

/// Fetch the shared consumer credentials.
///
/// # Errors
///
/// Returns an external service error when the credentials endpoint is
/// unreachable or returns something other than the expected JSON document.
pub async fn fetch_consumer(http: &reqwest::Client) -> AppResult<OauthConsumer> {
    debug!("fetching OAuth consumer credentials");
    let response = http.get(OAUTH_CONSUMER_URL).send().await?;

    if !response.status().is_success() {
        return Err(AppError::external_service(
            "OAuth consumer endpoint",
            format!("HTTP {}", response.status()),
        ));
    }

    response.json::<OauthConsumer>().await.map_err(|e| {
        AppError::new(
            ErrorCode::ExternalServiceError,
            "OAuth consumer credentials response was not valid JSON",
        )
        .with_source(e)
    })
}

/// Exchange an `OAuth1` credential for a fresh `OAuth2` Bearer token.
///
/// The request is `OAuth1`-signed; when the credential carries an MFA token
/// it is sent as a form field and folded into the signature.
///
/// # Errors
///
/// Returns [`ErrorCode::AuthExpired`] when Garmin rejects the credential and
/// an external service error for transport failures or unexpected responses.
pub async fn exchange(
    http: &reqwest::Client,
    consumer: &OauthConsumer,
    oauth1: &OAuth1Token,
) -> AppResult<OAuth2Token> {
    let url = exchange_url(oauth1.resolved_domain());
    debug!(domain = %oauth1.resolved_domain(), "requesting OAuth2 token exchange");

    let signer = Oauth1Signer::new(
        &*consumer.consumer_key,
        &*consumer.consumer_secret,
        &*oauth1.oauth_token,
        &*oauth1.oauth_token_secret,
    );

    let form_params: Vec<(String, String)> = match &oauth1.mfa_token {
        Some(mfa) => vec![("mfa_token".to_owned(), mfa.clone())],
        None => Vec::new(),
    };

    let auth_header = signer.authorization_header("POST", &url, &form_params)?;

    let mut request = http
        .post(&url)
        .header(USER_AGENT, MOBILE_USER_AGENT)
        .header(AUTHORIZATION, auth_header)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if !form_params.is_empty() {
        request = request.form(&form_params);
    }

    let response = request.send().await?;
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(AppError::new(
            ErrorCode::AuthExpired,
            "Garmin rejected the OAuth1 credential; generate a new GARTH_TOKEN",
        ));
    }
    if !status.is_success() {
        return Err(AppError::external_service(
            "Garmin Connect",
            format!("token exchange failed with HTTP {status}"),
        ));
    }

    let mut token: OAuth2Token = response.json().await.map_err(|e| {
        AppError::new(
            ErrorCode::ExternalServiceError,
            "token exchange response was not a valid OAuth2 token",
        )
        .with_source(e)
    })?;

    let now = Utc::now().timestamp();
    token.expires_at = now + token.expires_in;
    token.refresh_token_expires_at = now + token.refresh_token_expires_in;

    Ok(token)
}

/// Exchange endpoint for a Garmin domain.
fn exchange_url(domain: &str) -> String {
    format!(
        "{}{OAUTH_EXCHANGE_PATH}",
        crate::constants::endpoints::connectapi_base(domain)
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_exchange_url_per_domain() {
        assert_eq!(
            exchange_url("garmin.com"),
            "https://connectapi.garmin.com/oauth-service/oauth/exchange/user/2.0"
        );
        assert_eq!(
            exchange_url("garmin.cn"),
            "https://connectapi.garmin.cn/oauth-service/oauth/exchange/user/2.0"
        );
    }

    #[test]
    fn test_consumer_deserializes_published_shape() {
        let json = r#"{"consumer_key": "key-abc", "consumer_secret": "secret-xyz"}"#;
        let consumer: OauthConsumer = serde_json::from_str(json).unwrap();
        assert_eq!(consumer.consumer_key, "key-abc");
        assert_eq!(consumer.consumer_secret, "secret-xyz");
    }

    #[test]
    fn test_exchange_response_token_shape() {
        // Response bodies carry lifetimes but no absolute timestamps; those
        // are filled in after the exchange.
        let json = r#"{
            "scope": "CONNECT_READ CONNECT_WRITE",
            "jti": "jti-1",
            "token_type": "Bearer",
            "access_token": "at",
            "refresh_token": "rt",
            "expires_in": 3599,
            "refresh_token_expires_in": 7199
        }"#;
        let token: OAuth2Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.expires_at, 0);
        assert_eq!(token.refresh_token_expires_at, 0);
        assert_eq!(token.expires_in, 3599);
    }
}
