//! Network URL constants and environment selection for the Buycoins SDK.

use std::fmt;
use std::str::FromStr;

/// Production GraphQL endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://backend.buycoins.tech/api/graphql";

/// Staging GraphQL endpoint. Also serves the `test` environment.
pub const STAGING_ENDPOINT: &str = "https://bitkoin-dev.herokuapp.com/api/graphql";

/// Deployment environment a client targets.
///
/// Parsing never fails: unrecognized selectors become [`Environment::Unset`],
/// which resolves to no endpoint, so every request fails with
/// `ApiError::NoEndpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Staging,
    Test,
    Production,
    #[default]
    Unset,
}

impl Environment {
    /// The fixed endpoint URL for this environment, if any.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            Environment::Staging | Environment::Test => Some(STAGING_ENDPOINT),
            Environment::Production => Some(PRODUCTION_ENDPOINT),
            Environment::Unset => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Staging => "staging",
            Environment::Test => "test",
            Environment::Production => "production",
            Environment::Unset => "unset",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let env = match s.trim().to_ascii_lowercase().as_str() {
            "staging" => Environment::Staging,
            "test" => Environment::Test,
            "production" => Environment::Production,
            _ => Environment::Unset,
        };
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_selectors() {
        assert_eq!("STAGING".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" production ".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_selectors_are_case_insensitive() {
        for selector in ["staging", "Staging", "STAGING", "sTaGiNg"] {
            assert_eq!(selector.parse::<Environment>().unwrap(), Environment::Staging);
        }
        assert_eq!("TEST".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("Test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_unrecognized_selector_is_unset() {
        assert_eq!("".parse::<Environment>().unwrap(), Environment::Unset);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Unset);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Unset);
    }

    #[test]
    fn test_endpoint_resolution() {
        assert_eq!(Environment::Staging.endpoint(), Some(STAGING_ENDPOINT));
        assert_eq!(Environment::Test.endpoint(), Some(STAGING_ENDPOINT));
        assert_eq!(Environment::Production.endpoint(), Some(PRODUCTION_ENDPOINT));
        assert_eq!(Environment::Unset.endpoint(), None);
        assert_eq!(Environment::default(), Environment::Unset);
    }
}
