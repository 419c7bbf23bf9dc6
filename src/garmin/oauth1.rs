// ABOUTME: RFC 5849 OAuth1 request signing with HMAC-SHA1
// ABOUTME: Produces Authorization headers for the Garmin token exchange endpoint
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `OAuth1` request signing
//!
//! Garmin's token exchange endpoint requires classic `OAuth1` HMAC-SHA1
//! signatures. Only the signed-request leg is implemented here; the
//! interactive SSO flow that first mints `OAuth1` credentials happens
//! outside this server.

use crate::errors::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use std::collections::BTreeMap;
use url::Url;

/// Everything outside the RFC 3986 unreserved set gets percent-encoded.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signs requests with consumer credentials plus an `OAuth1` user token.
pub struct Oauth1Signer {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl Oauth1Signer {
    /// Create a signer for the given consumer and user token credentials.
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// Query parameters embedded in `url` and the extra form parameters in
    /// `extra_params` are both folded into the signature base string as the
    /// spec requires.
    ///
    /// # Errors
    ///
    /// Returns an internal error when `url` cannot be parsed or the HMAC key
    /// cannot be initialized.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(String, String)],
    ) -> AppResult<String> {
        let timestamp = Utc::now().timestamp().to_string();
        let nonce = generate_nonce();
        self.header_with_timestamp_nonce(method, url, extra_params, &timestamp, &nonce)
    }

    fn header_with_timestamp_nonce(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(String, String)],
        timestamp: &str,
        nonce: &str,
    ) -> AppResult<String> {
        let parsed = Url::parse(url)
            .map_err(|e| AppError::internal(format!("invalid URL for OAuth1 signing: {e}")))?;
        let host = parsed.host_str().unwrap_or_default();
        let base_url = match parsed.port() {
            Some(port) => format!("{}://{host}:{port}{}", parsed.scheme(), parsed.path()),
            None => format!("{}://{host}{}", parsed.scheme(), parsed.path()),
        };

        let mut params: BTreeMap<String, String> = BTreeMap::new();
        params.insert("oauth_consumer_key".to_owned(), self.consumer_key.clone());
        params.insert("oauth_nonce".to_owned(), nonce.to_owned());
        params.insert("oauth_signature_method".to_owned(), "HMAC-SHA1".to_owned());
        params.insert("oauth_timestamp".to_owned(), timestamp.to_owned());
        params.insert("oauth_token".to_owned(), self.token.clone());
        params.insert("oauth_version".to_owned(), "1.0".to_owned());

        let mut all_params = params.clone();
        for (key, value) in parsed.query_pairs() {
            all_params.insert(key.into_owned(), value.into_owned());
        }
        for (key, value) in extra_params {
            all_params.insert(key.clone(), value.clone());
        }

        let signature = self.signature(method, &base_url, &all_params)?;
        params.insert("oauth_signature".to_owned(), signature);

        let header_params: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", percent_encode(value)))
            .collect();

        Ok(format!("OAuth {}", header_params.join(", ")))
    }

    /// HMAC-SHA1 over the RFC 5849 signature base string, base64-encoded.
    fn signature(
        &self,
        method: &str,
        base_url: &str,
        params: &BTreeMap<String, String>,
    ) -> AppResult<String> {
        let param_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(base_url),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.token_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
            .map_err(|_| AppError::internal("HMAC key initialization failed"))?;
        mac.update(base_string.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// Percent-encode a string for `OAuth1` signing.
fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_SET).to_string()
}

/// 16 random bytes as lowercase hex.
fn generate_nonce() -> String {
    let bytes: [u8; 16] = rand::Rng::gen(&mut rand::thread_rng());
    hex::encode(bytes)
}
