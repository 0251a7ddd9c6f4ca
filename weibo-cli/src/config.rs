use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use weibo::OAuthApp;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub weibo: Option<WeiboConfig>,
}

/// `[weibo]` section
#[derive(Debug, Default, Deserialize, Clone)]
pub struct WeiboConfig {
    pub access_token: Option<String>,
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    pub redirect_uri: Option<String>,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let conf_contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Unable to read {}", path.as_ref().display()))?;
        Self::parse(&conf_contents)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Token from the command line wins over the one in the config file
    pub fn access_token(&self, from_args: Option<String>) -> Result<String> {
        from_args
            .or_else(|| self.weibo.as_ref().and_then(|w| w.access_token.clone()))
            .ok_or_else(|| {
                anyhow!("Missing access_token, pass --access-token or set it in the [weibo] section of the config file")
            })
    }

    pub fn oauth_app(&self) -> Result<OAuthApp> {
        let conf = self
            .weibo
            .as_ref()
            .ok_or_else(|| anyhow!("Missing weibo section in config file"))?;
        let field = |v: &Option<String>, name: &str| {
            v.clone()
                .ok_or_else(|| anyhow!("Missing {} in weibo section of config file", name))
        };
        Ok(OAuthApp::new(
            field(&conf.app_key, "app_key")?,
            field(&conf.app_secret, "app_secret")?,
            field(&conf.redirect_uri, "redirect_uri")?,
        ))
    }
}
