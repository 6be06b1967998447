use std::convert::TryFrom;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{event, Level};

use crate::auth::error::{Error, InvalidArgument};
use crate::auth::params::{check_additional_params, check_not_empty};
use crate::core::configuration::AuthorizationServiceConfiguration;
use crate::core::types::ClientId;

pub const PARAM_CLIENT_ID: &str = "client_id";
pub const PARAM_TOKEN: &str = "token";
pub const PARAM_TOKEN_TYPE_HINT: &str = "token_type_hint";

const BUILT_IN_PARAMS: &[&str] = &[PARAM_CLIENT_ID, PARAM_TOKEN, PARAM_TOKEN_TYPE_HINT];

/// An OAuth 2.0 token revocation request (RFC 7009, Section 2.1), usable for
/// both access and refresh tokens.
///
/// Instances are produced by [`RevokeTokenRequestBuilder`] or revived from the
/// JSON form written by [`RevokeTokenRequest::json_serialize`]; both paths apply
/// the same validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "StoredRevokeTokenRequest")]
pub struct RevokeTokenRequest {
    configuration: AuthorizationServiceConfiguration,
    client_id: ClientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_type_hint: Option<String>,
    token: String,
    additional_parameters: IndexMap<String, String>,
}

impl RevokeTokenRequest {
    pub fn builder(
        configuration: AuthorizationServiceConfiguration,
        client_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<RevokeTokenRequestBuilder, InvalidArgument> {
        RevokeTokenRequestBuilder::new(configuration, client_id, token)
    }

    pub fn configuration(&self) -> &AuthorizationServiceConfiguration {
        &self.configuration
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn token_type_hint(&self) -> Option<&str> {
        self.token_type_hint.as_deref()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn additional_parameters(&self) -> &IndexMap<String, String> {
        &self.additional_parameters
    }

    /// Form parameters for the revocation endpoint. Client authentication
    /// parameters are not included.
    pub fn request_parameters(&self) -> IndexMap<String, String> {
        let mut params = IndexMap::new();
        params.insert(PARAM_TOKEN.to_string(), self.token.clone());
        if let Some(hint) = &self.token_type_hint {
            params.insert(PARAM_TOKEN_TYPE_HINT.to_string(), hint.clone());
        }
        params.extend(
            self.additional_parameters
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        params
    }

    pub fn json_serialize(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn json_serialize_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn json_deserialize(json: Value) -> Result<Self, Error> {
        let request: Self = serde_json::from_value(json)?;
        event!(Level::DEBUG, client_id = %request.client_id, "Deserialized revocation request");
        Ok(request)
    }

    pub fn json_deserialize_str(json: &str) -> Result<Self, Error> {
        let request: Self = serde_json::from_str(json)?;
        event!(Level::DEBUG, client_id = %request.client_id, "Deserialized revocation request");
        Ok(request)
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRevokeTokenRequest {
    configuration: AuthorizationServiceConfiguration,
    client_id: String,
    token_type_hint: Option<String>,
    token: String,
    #[serde(default)]
    additional_parameters: IndexMap<String, String>,
}

impl TryFrom<StoredRevokeTokenRequest> for RevokeTokenRequest {
    type Error = InvalidArgument;

    fn try_from(stored: StoredRevokeTokenRequest) -> Result<Self, Self::Error> {
        let mut builder =
            RevokeTokenRequestBuilder::new(stored.configuration, stored.client_id, stored.token)?;
        builder.set_additional_parameters(stored.additional_parameters)?;
        if let Some(hint) = stored.token_type_hint {
            builder.set_token_type_hint(hint);
        }
        Ok(builder.snapshot())
    }
}

/// Creates instances of [`RevokeTokenRequest`].
///
/// The builder stays usable after [`build`](Self::build); each call returns an
/// independent snapshot.
#[derive(Debug, Clone)]
pub struct RevokeTokenRequestBuilder {
    configuration: AuthorizationServiceConfiguration,
    client_id: ClientId,
    token_type_hint: Option<String>,
    token: String,
    additional_parameters: IndexMap<String, String>,
}

impl RevokeTokenRequestBuilder {
    pub fn new(
        configuration: AuthorizationServiceConfiguration,
        client_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        Ok(Self {
            configuration,
            client_id: ClientId(check_not_empty(client_id.into(), "clientId")?),
            token_type_hint: None,
            token: check_not_empty(token.into(), "token")?,
            additional_parameters: IndexMap::new(),
        })
    }

    pub fn set_configuration(&mut self, configuration: AuthorizationServiceConfiguration) -> &mut Self {
        self.configuration = configuration;
        self
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) -> Result<&mut Self, InvalidArgument> {
        self.client_id = ClientId(check_not_empty(client_id.into(), "clientId")?);
        Ok(self)
    }

    /// Any value is accepted; see [`TokenTypeHint`](crate::core::types::TokenTypeHint)
    /// for the registered ones.
    pub fn set_token_type_hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.token_type_hint = Some(hint.into());
        self
    }

    pub fn clear_token_type_hint(&mut self) -> &mut Self {
        self.token_type_hint = None;
        self
    }

    pub fn set_token(&mut self, token: impl Into<String>) -> Result<&mut Self, InvalidArgument> {
        self.token = check_not_empty(token.into(), "token")?;
        Ok(self)
    }

    /// Replaces the additional parameters. An empty iterator clears them. On
    /// error the previous parameters are kept.
    pub fn set_additional_parameters<I, K, V>(&mut self, params: I) -> Result<&mut Self, InvalidArgument>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_parameters = check_additional_params(params, BUILT_IN_PARAMS)?;
        Ok(self)
    }

    pub fn build(&self) -> RevokeTokenRequest {
        let request = self.snapshot();
        event!(
            Level::DEBUG,
            client_id = %request.client_id,
            token_type_hint = ?request.token_type_hint,
            additional_parameters = request.additional_parameters.len(),
            "Built revocation request"
        );
        request
    }

    fn snapshot(&self) -> RevokeTokenRequest {
        RevokeTokenRequest {
            configuration: self.configuration.clone(),
            client_id: self.client_id.clone(),
            token_type_hint: self.token_type_hint.clone(),
            token: self.token.clone(),
            additional_parameters: self.additional_parameters.clone(),
        }
    }
}
