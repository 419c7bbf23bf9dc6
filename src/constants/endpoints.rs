// ABOUTME: Garmin network constants: domains, base URL builders, and OAuth endpoints
// ABOUTME: Everything needed to address the Connect API and the token exchange service
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Garmin network constants
//!
//! Individual Connect API resource paths live next to the tools that call
//! them; this module only carries the shared infrastructure addresses.

/// Default Garmin domain (mainland China accounts use `garmin.cn`)
pub const DEFAULT_GARMIN_DOMAIN: &str = "garmin.com";

/// User agent the Connect API expects from API clients
pub const API_USER_AGENT: &str = "GCM-iOS-5.7.2.1";

/// User agent for the OAuth exchange, mimicking the mobile app
pub const MOBILE_USER_AGENT: &str = "com.garmin.android.apps.connectmobile";

/// Public location of the OAuth consumer credentials garth-compatible
/// clients sign with
pub const OAUTH_CONSUMER_URL: &str = "https://thegarth.s3.amazonaws.com/oauth_consumer.json";

/// Path of the OAuth1-to-OAuth2 exchange on the Connect API host
pub const OAUTH_EXCHANGE_PATH: &str = "/oauth-service/oauth/exchange/user/2.0";

/// Build the Connect API base URL for a domain
#[must_use]
pub fn connectapi_base(domain: &str) -> String {
    format!("https://connectapi.{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectapi_base() {
        assert_eq!(
            connectapi_base(DEFAULT_GARMIN_DOMAIN),
            "https://connectapi.garmin.com"
        );
        assert_eq!(connectapi_base("garmin.cn"), "https://connectapi.garmin.cn");
    }
}
