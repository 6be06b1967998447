use serde_json::Value;
use tracing::{event, Level};

use super::request::RevokeTokenRequest;
use crate::auth::error::Error;
use crate::auth::params::check_not_empty;

/// A response to a token revocation request (RFC 7009, Section 2.2).
///
/// The serialized form always embeds the request; it cannot be supplied
/// separately when deserializing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RevokeTokenResponse {
    request: RevokeTokenRequest,
}

impl RevokeTokenResponse {
    pub fn builder(request: RevokeTokenRequest) -> RevokeTokenResponseBuilder {
        RevokeTokenResponseBuilder::new(request)
    }

    pub fn request(&self) -> &RevokeTokenRequest {
        &self.request
    }

    pub fn into_request(self) -> RevokeTokenRequest {
        self.request
    }

    pub fn json_serialize(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn json_serialize_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn json_deserialize(json: Value) -> Result<Self, Error> {
        let response: Self = serde_json::from_value(json)?;
        event!(
            Level::DEBUG,
            client_id = %response.request.client_id(),
            "Deserialized revocation response"
        );
        Ok(response)
    }

    pub fn json_deserialize_str(json: &str) -> Result<Self, Error> {
        let json = check_not_empty(json.to_string(), "json")?;
        let json: Value = serde_json::from_str(&json)?;
        Self::json_deserialize(json)
    }
}

#[derive(Debug, Clone)]
pub struct RevokeTokenResponseBuilder {
    request: RevokeTokenRequest,
}

impl RevokeTokenResponseBuilder {
    pub fn new(request: RevokeTokenRequest) -> Self {
        Self { request }
    }

    pub fn set_request(&mut self, request: RevokeTokenRequest) -> &mut Self {
        self.request = request;
        self
    }

    pub fn build(&self) -> RevokeTokenResponse {
        event!(
            Level::DEBUG,
            client_id = %self.request.client_id(),
            "Built revocation response"
        );
        RevokeTokenResponse {
            request: self.request.clone(),
        }
    }
}
