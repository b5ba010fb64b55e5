/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client configuration.
//!
//! A [`Config`] is built once, from explicit options or from the environment, and validated as
//! it is built. It is never mutated afterwards; `with_*` methods return a new value.

use crate::env::Env;
use crate::idempotency_token::IdempotencyTokenProvider;
use http::Uri;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The region to send requests to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }

    fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Region,
    Endpoint,
}

impl Display for ConfigKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKey::Region => write!(f, "region"),
            ConfigKey::Endpoint => write!(f, "endpoint"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{region}` is not a valid region")]
    InvalidRegion { region: String },
    #[error("`{endpoint}` is not a valid endpoint: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("the {key} option was given more than once")]
    DuplicateOption { key: ConfigKey },
}

const AWS_REGION: &str = "AWS_REGION";
const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

#[derive(Clone, Debug, Default)]
pub struct Config {
    region: Option<Region>,
    endpoint: Option<Uri>,
    idempotency_token_provider: IdempotencyTokenProvider,
}

impl Config {
    /// Builds a config from `(key, value)` options. Each key may be given at most once.
    ///
    /// ```rust
    /// use wire_http::config::{Config, ConfigKey};
    /// let config = Config::from_options(vec![(ConfigKey::Region, "us-west-2")]).unwrap();
    /// assert_eq!(config.region().unwrap().as_ref(), "us-west-2");
    /// ```
    pub fn from_options<I, V>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (ConfigKey, V)>,
        V: Into<String>,
    {
        let mut config = Config::default();
        for (key, value) in options {
            let value = value.into();
            match key {
                ConfigKey::Region if config.region.is_some() => {
                    return Err(ConfigError::DuplicateOption { key })
                }
                ConfigKey::Endpoint if config.endpoint.is_some() => {
                    return Err(ConfigError::DuplicateOption { key })
                }
                ConfigKey::Region => config.region = Some(parse_region(value)?),
                ConfigKey::Endpoint => config.endpoint = Some(parse_endpoint(&value)?),
            }
        }
        Ok(config)
    }

    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`) and `AWS_ENDPOINT_URL`
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        let region = env
            .get(AWS_REGION)
            .or_else(|_| env.get(AWS_DEFAULT_REGION))
            .ok();
        let endpoint = env.get(AWS_ENDPOINT_URL).ok();
        let options = region
            .map(|region| (ConfigKey::Region, region))
            .into_iter()
            .chain(endpoint.map(|endpoint| (ConfigKey::Endpoint, endpoint)));
        Self::from_options(options)
    }

    pub fn with_idempotency_token_provider(self, provider: IdempotencyTokenProvider) -> Self {
        Config {
            idempotency_token_provider: provider,
            ..self
        }
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint(&self) -> Option<&Uri> {
        self.endpoint.as_ref()
    }

    pub fn idempotency_token_provider(&self) -> &IdempotencyTokenProvider {
        &self.idempotency_token_provider
    }
}

fn parse_region(region: String) -> Result<Region, ConfigError> {
    let region = Region::new(region);
    if region.is_valid() {
        Ok(region)
    } else {
        Err(ConfigError::InvalidRegion {
            region: region.to_string(),
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Uri, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason: reason.to_owned(),
    };
    let uri = endpoint
        .parse::<Uri>()
        .map_err(|err| invalid(&err.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => return Err(invalid("scheme must be http or https")),
    }
    if uri.authority().is_none() {
        return Err(invalid("a host is required"));
    }
    if uri.query().is_some() {
        return Err(invalid("endpoints cannot have a query string"));
    }
    Ok(uri)
}

#[cfg(test)]
mod test {
    use crate::config::{Config, ConfigError, ConfigKey, Region};
    use crate::env::Env;
    use crate::idempotency_token::IdempotencyTokenProvider;

    #[test]
    fn options_are_validated() {
        let config = Config::from_options(vec![
            (ConfigKey::Region, "us-east-1"),
            (ConfigKey::Endpoint, "http://localhost:4566"),
        ])
        .unwrap();
        assert_eq!(config.region(), Some(&Region::from_static("us-east-1")));
        assert_eq!(config.endpoint().unwrap().to_string(), "http://localhost:4566/");

        assert_eq!(
            Config::from_options(vec![(ConfigKey::Region, "US East")]).unwrap_err(),
            ConfigError::InvalidRegion {
                region: "US East".to_owned()
            }
        );
        assert!(matches!(
            Config::from_options(vec![(ConfigKey::Region, "")]),
            Err(ConfigError::InvalidRegion { .. })
        ));
        assert_eq!(
            Config::from_options(vec![
                (ConfigKey::Region, "us-east-1"),
                (ConfigKey::Region, "us-west-2")
            ])
            .unwrap_err(),
            ConfigError::DuplicateOption {
                key: ConfigKey::Region
            }
        );
    }

    #[test]
    fn invalid_endpoints() {
        for endpoint in &[
            "localhost:4566",
            "ftp://example.com",
            "/relative",
            "https://example.com/?a=b",
            "not a uri",
        ] {
            assert!(
                matches!(
                    Config::from_options(vec![(ConfigKey::Endpoint, *endpoint)]),
                    Err(ConfigError::InvalidEndpoint { .. })
                ),
                "{} should be rejected",
                endpoint
            );
        }
    }

    #[test]
    fn no_options() {
        let config = Config::from_options(Vec::<(ConfigKey, String)>::new()).unwrap();
        assert_eq!(config.region(), None);
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn from_env() {
        let env = Env::from_slice(&[("AWS_REGION", "eu-west-1"), ("AWS_DEFAULT_REGION", "us-east-2")]);
        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.region().unwrap().as_ref(), "eu-west-1");

        let env = Env::from_slice(&[
            ("AWS_DEFAULT_REGION", "us-east-2"),
            ("AWS_ENDPOINT_URL", "https://proxy.internal:8443"),
        ]);
        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.region().unwrap().as_ref(), "us-east-2");
        assert_eq!(
            config.endpoint().unwrap().authority().unwrap().as_str(),
            "proxy.internal:8443"
        );

        let env = Env::from_slice(&[("AWS_REGION", "Not A Region")]);
        assert!(Config::from_env(&env).is_err());
    }

    #[test]
    fn with_provider_returns_new_config() {
        let config = Config::from_options(vec![(ConfigKey::Region, "us-east-1")])
            .unwrap()
            .with_idempotency_token_provider(IdempotencyTokenProvider::fixed("token"));
        assert_eq!(
            config.idempotency_token_provider().make_idempotency_token(),
            "token"
        );
        assert_eq!(config.region().unwrap().as_ref(), "us-east-1");
    }
}
