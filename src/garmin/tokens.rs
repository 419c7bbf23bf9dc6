// ABOUTME: OAuth1/OAuth2 token models matching the garth session dump layout
// ABOUTME: Encodes and decodes the GARTH_TOKEN base64 payload used to resume sessions
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Session token models
//!
//! A `GARTH_TOKEN` is the base64 encoding of a two-element JSON array
//! `[oauth1, oauth2]`. The `OAuth1` credential is long-lived (about a year)
//! and signs the token exchange; the `OAuth2` credential is the short-lived
//! Bearer token sent on every Connect API request.

use crate::constants::endpoints::DEFAULT_GARMIN_DOMAIN;
use crate::errors::{AppError, AppResult, ErrorCode};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Long-lived `OAuth1` credential used to obtain `OAuth2` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth1Token {
    /// OAuth1 token identifier
    pub oauth_token: String,
    /// OAuth1 token secret used in request signing
    pub oauth_token_secret: String,
    /// MFA token issued when the account has multi-factor auth enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_token: Option<String>,
    /// Expiration of the MFA token, carried verbatim as produced upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_expiration_timestamp: Option<String>,
    /// Garmin domain the token was issued for (`garmin.com` or `garmin.cn`)
    #[serde(default)]
    pub domain: Option<String>,
}

impl OAuth1Token {
    /// Create a token for the default `garmin.com` domain.
    #[must_use]
    pub fn new(oauth_token: impl Into<String>, oauth_token_secret: impl Into<String>) -> Self {
        Self {
            oauth_token: oauth_token.into(),
            oauth_token_secret: oauth_token_secret.into(),
            mfa_token: None,
            mfa_expiration_timestamp: None,
            domain: Some(DEFAULT_GARMIN_DOMAIN.to_owned()),
        }
    }

    /// Domain the session belongs to, falling back to `garmin.com` when the
    /// dump carries no domain.
    #[must_use]
    pub fn resolved_domain(&self) -> &str {
        self.domain
            .as_deref()
            .filter(|domain| !domain.is_empty())
            .unwrap_or(DEFAULT_GARMIN_DOMAIN)
    }
}

/// Short-lived `OAuth2` Bearer credential for Connect API requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Token {
    /// Granted scopes
    pub scope: String,
    /// JWT identifier
    pub jti: String,
    /// Token type, normally `Bearer`
    pub token_type: String,
    /// Access token sent in the `Authorization` header
    pub access_token: String,
    /// Refresh token (unused by the exchange flow, kept for compatibility)
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    /// Absolute access token expiry as a Unix timestamp
    #[serde(default)]
    pub expires_at: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expires_in: i64,
    /// Absolute refresh token expiry as a Unix timestamp
    #[serde(default)]
    pub refresh_token_expires_at: i64,
}

impl OAuth2Token {
    /// Whether the access token is past its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now().timestamp()
    }

    /// Whether the refresh window is past its expiry.
    #[must_use]
    pub fn is_refresh_expired(&self) -> bool {
        self.refresh_token_expires_at < Utc::now().timestamp()
    }

    /// `Authorization` header value for Connect API requests.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// The `[oauth1, oauth2]` pair carried by a `GARTH_TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Long-lived signing credential
    pub oauth1: OAuth1Token,
    /// Short-lived Bearer credential
    pub oauth2: OAuth2Token,
}

impl SessionTokens {
    /// Decode a `GARTH_TOKEN` string.
    ///
    /// Accepts both padded and unpadded standard base64 and ignores
    /// surrounding whitespace, since tokens are usually pasted into an
    /// environment variable by hand.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::AuthMalformed`] error when the input is not
    /// valid base64 or does not decode to an `[oauth1, oauth2]` JSON array.
    pub fn loads(encoded: &str) -> AppResult<Self> {
        let trimmed = encoded.trim();
        let bytes = STANDARD
            .decode(trimmed)
            .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
            .map_err(|e| {
                AppError::new(ErrorCode::AuthMalformed, "GARTH_TOKEN is not valid base64")
                    .with_source(e)
            })?;

        let (oauth1, oauth2): (OAuth1Token, OAuth2Token) = serde_json::from_slice(&bytes)
            .map_err(|e| {
                AppError::new(
                    ErrorCode::AuthMalformed,
                    "GARTH_TOKEN does not decode to an [oauth1, oauth2] token pair",
                )
                .with_source(e)
            })?;

        Ok(Self { oauth1, oauth2 })
    }

    /// Encode the pair back into the `GARTH_TOKEN` wire format.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the tokens cannot be encoded as
    /// JSON, which indicates a bug rather than bad input.
    pub fn dumps(&self) -> AppResult<String> {
        let json = serde_json::to_vec(&(&self.oauth1, &self.oauth2))?;
        Ok(STANDARD.encode(json))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample_oauth1() -> OAuth1Token {
        OAuth1Token::new("token-abc", "secret-xyz")
    }

    fn sample_oauth2(expires_at: i64) -> OAuth2Token {
        OAuth2Token {
            scope: "CONNECT_READ CONNECT_WRITE".to_owned(),
            jti: "jti-123".to_owned(),
            token_type: "Bearer".to_owned(),
            access_token: "access-123".to_owned(),
            refresh_token: "refresh-123".to_owned(),
            expires_in: 3599,
            expires_at,
            refresh_token_expires_in: 7199,
            refresh_token_expires_at: expires_at + 3600,
        }
    }

    #[test]
    fn test_oauth1_token_default_domain() {
        let token = sample_oauth1();
        assert_eq!(token.resolved_domain(), "garmin.com");
        assert_eq!(token.domain.as_deref(), Some("garmin.com"));
    }

    #[test]
    fn test_oauth1_token_resolved_domain_handles_null_and_empty() {
        let mut token = sample_oauth1();
        token.domain = None;
        assert_eq!(token.resolved_domain(), "garmin.com");

        token.domain = Some(String::new());
        assert_eq!(token.resolved_domain(), "garmin.com");

        token.domain = Some("garmin.cn".to_owned());
        assert_eq!(token.resolved_domain(), "garmin.cn");
    }

    #[test]
    fn test_oauth2_token_expiry_predicates() {
        let now = Utc::now().timestamp();

        let live = sample_oauth2(now + 3600);
        assert!(!live.is_expired());
        assert!(!live.is_refresh_expired());

        let stale = sample_oauth2(now - 60);
        assert!(stale.is_expired());
        assert!(!stale.is_refresh_expired());
    }

    #[test]
    fn test_oauth2_token_authorization_header() {
        let token = sample_oauth2(Utc::now().timestamp() + 3600);
        assert_eq!(token.authorization_header(), "Bearer access-123");
    }

    #[test]
    fn test_session_tokens_round_trip() {
        let tokens = SessionTokens {
            oauth1: sample_oauth1(),
            oauth2: sample_oauth2(1_700_000_000),
        };

        let encoded = tokens.dumps().unwrap();
        let decoded = SessionTokens::loads(&encoded).unwrap();

        assert_eq!(decoded, tokens);
    }

    #[test]
    fn test_loads_accepts_unpadded_base64_and_whitespace() {
        let tokens = SessionTokens {
            oauth1: sample_oauth1(),
            oauth2: sample_oauth2(1_700_000_000),
        };

        let padded = tokens.dumps().unwrap();
        let unpadded = padded.trim_end_matches('=').to_owned();
        let noisy = format!("  {unpadded}\n");

        let decoded = SessionTokens::loads(&noisy).unwrap();
        assert_eq!(decoded, tokens);
    }

    #[test]
    fn test_loads_accepts_garth_dump_with_null_fields() {
        // Layout produced by the Python garth library, nulls included.
        let json = r#"[
            {"oauth_token": "ot", "oauth_token_secret": "os",
             "mfa_token": null, "mfa_expiration_timestamp": null,
             "domain": null},
            {"scope": "CONNECT_READ", "jti": "j", "token_type": "Bearer",
             "access_token": "at", "refresh_token": "rt",
             "expires_in": 3599, "expires_at": 1700000000,
             "refresh_token_expires_in": 7199,
             "refresh_token_expires_at": 1700003600}
        ]"#;
        let encoded = STANDARD.encode(json);

        let tokens = SessionTokens::loads(&encoded).unwrap();
        assert_eq!(tokens.oauth1.oauth_token, "ot");
        assert_eq!(tokens.oauth1.resolved_domain(), "garmin.com");
        assert_eq!(tokens.oauth2.access_token, "at");
        assert_eq!(tokens.oauth2.expires_at, 1_700_000_000);
    }

    #[test]
    fn test_loads_rejects_invalid_base64() {
        let error = SessionTokens::loads("not base64 at all!!!").unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthMalformed);
    }

    #[test]
    fn test_loads_rejects_wrong_json_shape() {
        let encoded = STANDARD.encode(r#"{"oauth_token": "not an array"}"#);
        let error = SessionTokens::loads(&encoded).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthMalformed);
        assert!(error.source.is_some());
    }
}
