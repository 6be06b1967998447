use indexmap::IndexMap;
use tracing::{event, Level};
use url::Url;

use super::client_auth::ClientAuthentication;
use crate::auth::error::{Error, InvalidArgument};
use crate::auth::revocation::RevokeTokenRequest;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const ACCEPT_JSON: &str = "application/json";

/// A revocation request ready to be POSTed by whichever HTTP client the
/// caller uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevocationHttpRequest {
    pub url: Url,
    pub headers: IndexMap<String, String>,
    pub body: String,
}

impl RevocationHttpRequest {
    #[tracing::instrument(
        skip(request, auth),
        fields(client_id = %request.client_id())
    )]
    pub fn prepare(
        request: &RevokeTokenRequest,
        auth: &dyn ClientAuthentication,
    ) -> Result<Self, Error> {
        let url = request
            .configuration()
            .revocation_endpoint
            .clone()
            .ok_or(InvalidArgument::MissingEndpoint("revocationEndpoint"))?;

        let mut headers = IndexMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_FORM.to_string());
        headers.insert("Accept".to_string(), ACCEPT_JSON.to_string());
        headers.extend(auth.request_headers(request.client_id()));

        let mut params = request.request_parameters();
        params.extend(auth.request_parameters(request.client_id()));
        let body = encode_form(&params);

        event!(Level::DEBUG, url = %url, "Prepared revocation request");

        Ok(Self { url, headers, body })
    }
}

pub fn encode_form(params: &IndexMap<String, String>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}
