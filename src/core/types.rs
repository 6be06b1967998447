use std::{fmt, str::FromStr};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl FromStr for ClientId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token type hints registered by RFC 7009, Section 2.1.
///
/// Revocation requests carry the hint as a plain string, so servers supporting
/// extension token types can still be addressed; this enum only names the
/// registered values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenTypeHint {
    AccessToken,
    RefreshToken,
}

impl TokenTypeHint {
    pub const ACCESS_TOKEN: &'static str = "access_token";
    pub const REFRESH_TOKEN: &'static str = "refresh_token";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessToken => Self::ACCESS_TOKEN,
            Self::RefreshToken => Self::REFRESH_TOKEN,
        }
    }
}

impl fmt::Display for TokenTypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenType(pub String);

impl fmt::Display for UnknownTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token type `{}`", self.0)
    }
}

impl std::error::Error for UnknownTokenType {}

impl FromStr for TokenTypeHint {
    type Err = UnknownTokenType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ACCESS_TOKEN => Ok(Self::AccessToken),
            Self::REFRESH_TOKEN => Ok(Self::RefreshToken),
            other => Err(UnknownTokenType(other.to_string())),
        }
    }
}

impl From<TokenTypeHint> for String {
    fn from(hint: TokenTypeHint) -> Self {
        hint.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_hint_names() {
        assert_eq!(TokenTypeHint::AccessToken.to_string(), "access_token");
        assert_eq!(String::from(TokenTypeHint::RefreshToken), "refresh_token");
    }

    #[test]
    fn token_type_hint_parse() {
        assert_eq!("refresh_token".parse::<TokenTypeHint>(), Ok(TokenTypeHint::RefreshToken));
        assert_eq!(
            "id_token".parse::<TokenTypeHint>(),
            Err(UnknownTokenType("id_token".to_string()))
        );
    }

    #[test]
    fn client_id_is_transparent() {
        let id: ClientId = serde_json::from_str("\"client1\"").unwrap();
        assert_eq!(id, ClientId("client1".to_string()));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"client1\"");
    }
}
