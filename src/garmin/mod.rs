// ABOUTME: Garmin Connect client module: session tokens, OAuth1 signing, and API access
// ABOUTME: Resumes garth-compatible sessions and performs authenticated Connect API requests
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Garmin Connect client
//!
//! The pieces the upstream garth library would otherwise own: token models
//! and the base64 session codec, `OAuth1` request signing, the `OAuth2` token
//! exchange, and the HTTP client addressing `connectapi.{domain}`.

/// Authenticated Connect API HTTP client
pub mod client;

/// `OAuth1`-to-`OAuth2` token exchange against the Garmin auth service
pub mod exchange;

/// Typed models for the user profile endpoints
pub mod models;

/// RFC 5849 HMAC-SHA1 request signing
pub mod oauth1;

/// `OAuth1`/`OAuth2` token models and the `GARTH_TOKEN` codec
pub mod tokens;

pub use client::GarminClient;
pub use tokens::{OAuth1Token, OAuth2Token, SessionTokens};
