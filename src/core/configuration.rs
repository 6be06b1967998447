use serde_json::{Map, Value};
use url::Url;

use crate::auth::error::{Error, MalformedInput};

const KEY_AUTHORIZATION_ENDPOINT: &str = "authorizationEndpoint";
const KEY_TOKEN_ENDPOINT: &str = "tokenEndpoint";
const KEY_REGISTRATION_ENDPOINT: &str = "registrationEndpoint";
const KEY_END_SESSION_ENDPOINT: &str = "endSessionEndpoint";
const KEY_REVOCATION_ENDPOINT: &str = "revocationEndpoint";

/// Endpoints of an OAuth 2.0 authorization server.
///
/// Requests hold their own copy of the configuration so they can be stored and
/// revived without the provider that originally produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub struct AuthorizationServiceConfiguration {
    pub authorization_endpoint: Url,
    pub token_endpoint: Url,
    pub registration_endpoint: Option<Url>,
    pub end_session_endpoint: Option<Url>,
    pub revocation_endpoint: Option<Url>,
}

impl AuthorizationServiceConfiguration {
    pub fn new(authorization_endpoint: Url, token_endpoint: Url) -> Self {
        Self {
            authorization_endpoint,
            token_endpoint,
            registration_endpoint: None,
            end_session_endpoint: None,
            revocation_endpoint: None,
        }
    }

    pub fn with_registration_endpoint(mut self, endpoint: Url) -> Self {
        self.registration_endpoint = Some(endpoint);
        self
    }

    pub fn with_end_session_endpoint(mut self, endpoint: Url) -> Self {
        self.end_session_endpoint = Some(endpoint);
        self
    }

    pub fn with_revocation_endpoint(mut self, endpoint: Url) -> Self {
        self.revocation_endpoint = Some(endpoint);
        self
    }

    pub fn to_json(&self) -> Value {
        let mut json = Map::new();
        json.insert(
            KEY_AUTHORIZATION_ENDPOINT.to_string(),
            Value::String(self.authorization_endpoint.to_string()),
        );
        json.insert(
            KEY_TOKEN_ENDPOINT.to_string(),
            Value::String(self.token_endpoint.to_string()),
        );
        put_if_some(&mut json, KEY_REGISTRATION_ENDPOINT, &self.registration_endpoint);
        put_if_some(&mut json, KEY_END_SESSION_ENDPOINT, &self.end_session_endpoint);
        put_if_some(&mut json, KEY_REVOCATION_ENDPOINT, &self.revocation_endpoint);
        Value::Object(json)
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    pub fn from_json(json: Value) -> Result<Self, Error> {
        let json = match json {
            Value::Object(map) => map,
            _ => return Err(malformed("configuration must be a json object")),
        };

        Ok(Self {
            authorization_endpoint: required_url(&json, KEY_AUTHORIZATION_ENDPOINT)?,
            token_endpoint: required_url(&json, KEY_TOKEN_ENDPOINT)?,
            registration_endpoint: optional_url(&json, KEY_REGISTRATION_ENDPOINT)?,
            end_session_endpoint: optional_url(&json, KEY_END_SESSION_ENDPOINT)?,
            revocation_endpoint: optional_url(&json, KEY_REVOCATION_ENDPOINT)?,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let json: Value = serde_json::from_str(json)?;
        Self::from_json(json)
    }
}

impl From<AuthorizationServiceConfiguration> for Value {
    fn from(configuration: AuthorizationServiceConfiguration) -> Self {
        configuration.to_json()
    }
}

impl std::convert::TryFrom<Value> for AuthorizationServiceConfiguration {
    type Error = Error;

    fn try_from(json: Value) -> Result<Self, Self::Error> {
        Self::from_json(json)
    }
}

fn put_if_some(json: &mut Map<String, Value>, key: &str, value: &Option<Url>) {
    if let Some(url) = value {
        json.insert(key.to_string(), Value::String(url.to_string()));
    }
}

fn malformed(msg: &str) -> Error {
    use serde::de::Error as _;
    MalformedInput::Json(serde_json::Error::custom(msg)).into()
}

fn required_url(json: &Map<String, Value>, key: &'static str) -> Result<Url, Error> {
    optional_url(json, key)?.ok_or_else(|| malformed(&format!("missing field `{}`", key)))
}

fn optional_url(json: &Map<String, Value>, key: &'static str) -> Result<Option<Url>, Error> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Url::parse(s)
            .map(Some)
            .map_err(|source| MalformedInput::InvalidUrl { field: key, source }.into()),
        Some(_) => Err(malformed(&format!("field `{}` must be a string", key))),
    }
}
