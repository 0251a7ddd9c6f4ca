//! OAuth 2 authorization code flow.
//!
//! Sending the user to [`OAuthApp::authorize_url`] and catching the `code`
//! on the redirect is up to the caller. This module only turns that code
//! into an access token and inspects tokens.

use log::debug;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use weibo_api_common::{
    deserialize_null_default, invoke, ApiError, Enveloped, RequestDescriptor, ResponseEnvelope,
    Transport,
};

use crate::util::{deserialize_lenient_i64, deserialize_lenient_string};

static AUTHORIZE_URL: &str = "https://api.weibo.com/oauth2/authorize";

/// A registered Weibo application
#[derive(Deserialize, Clone, Debug)]
pub struct OAuthApp {
    pub app_key: String,
    pub app_secret: String,
    pub redirect_uri: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct AccessToken {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub access_token: String,
    /// Seconds until the token expires
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub expires_in: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub remind_in: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub uid: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct TokenInfo {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub uid: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub appkey: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub scope: String,
    /// Unix timestamp of when the token was issued
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub create_at: i64,
    /// Seconds left before the token expires
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub expire_in: i64,
}

impl Enveloped for AccessToken {
    fn envelope(&self) -> &ResponseEnvelope {
        &self.envelope
    }
}

impl Enveloped for TokenInfo {
    fn envelope(&self) -> &ResponseEnvelope {
        &self.envelope
    }
}

impl OAuthApp {
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Page the user has to visit to grant access
    pub fn authorize_url(&self, state: Option<&str>) -> Result<Url, ApiError> {
        let mut url = Url::parse(AUTHORIZE_URL).map_err(|source| ApiError::Construction {
            operation: "weibo oauth2/authorize",
            source,
        })?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.app_key)
                .append_pair("redirect_uri", &self.redirect_uri)
                .append_pair("response_type", "code");
            if let Some(state) = state {
                query.append_pair("state", state);
            }
        }
        Ok(url)
    }

    /// Exchange the `code` from the authorize redirect for an access token
    pub async fn access_token(
        &self,
        transport: &dyn Transport,
        code: &str,
    ) -> Result<AccessToken, ApiError> {
        debug!("exchanging authorization code for app {}", self.app_key);
        let descriptor = RequestDescriptor::post(
            "weibo oauth2/access_token",
            "https://api.weibo.com/oauth2/access_token",
        )
        .param("client_id", &self.app_key)
        .param("client_secret", &self.app_secret)
        .param("grant_type", "authorization_code")
        .param("code", code)
        .param("redirect_uri", &self.redirect_uri);
        invoke(transport, &descriptor).await
    }
}

/// Look up who a token belongs to and when it expires
pub async fn token_info(transport: &dyn Transport, token: &str) -> Result<TokenInfo, ApiError> {
    let descriptor = RequestDescriptor::post(
        "weibo oauth2/get_token_info",
        "https://api.weibo.com/oauth2/get_token_info",
    )
    .param("access_token", token);
    invoke(transport, &descriptor).await
}
