use std::fmt;

use base64::Engine;
use indexmap::IndexMap;

use crate::auth::revocation::PARAM_CLIENT_ID;
use crate::core::types::ClientId;

pub const PARAM_CLIENT_SECRET: &str = "client_secret";

/// How a client authenticates itself to the revocation endpoint
/// (RFC 6749, Section 2.3).
pub trait ClientAuthentication {
    fn request_headers(&self, client_id: &ClientId) -> IndexMap<String, String>;
    fn request_parameters(&self, client_id: &ClientId) -> IndexMap<String, String>;
}

/// Public clients identify themselves with `client_id` only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClientAuthentication;

impl ClientAuthentication for NoClientAuthentication {
    fn request_headers(&self, _client_id: &ClientId) -> IndexMap<String, String> {
        IndexMap::new()
    }

    fn request_parameters(&self, client_id: &ClientId) -> IndexMap<String, String> {
        let mut params = IndexMap::new();
        params.insert(PARAM_CLIENT_ID.to_string(), client_id.0.clone());
        params
    }
}

/// `client_secret_basic`: credentials in an HTTP Basic `Authorization` header.
#[derive(Clone)]
pub struct ClientSecretBasic {
    secret: String,
}

impl ClientSecretBasic {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for ClientSecretBasic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSecretBasic")
            .field("secret", &"<redacted>")
            .finish()
    }
}

// Both halves are form-encoded before joining (RFC 6749, Section 2.3.1).
fn form_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl ClientAuthentication for ClientSecretBasic {
    fn request_headers(&self, client_id: &ClientId) -> IndexMap<String, String> {
        let credentials = format!(
            "{}:{}",
            form_encode(client_id.as_ref()),
            form_encode(&self.secret)
        );
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);

        let mut headers = IndexMap::new();
        headers.insert("Authorization".to_string(), format!("Basic {}", encoded));
        headers
    }

    fn request_parameters(&self, _client_id: &ClientId) -> IndexMap<String, String> {
        IndexMap::new()
    }
}

/// `client_secret_post`: credentials in the form body.
#[derive(Clone)]
pub struct ClientSecretPost {
    secret: String,
}

impl ClientSecretPost {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for ClientSecretPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSecretPost")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl ClientAuthentication for ClientSecretPost {
    fn request_headers(&self, _client_id: &ClientId) -> IndexMap<String, String> {
        IndexMap::new()
    }

    fn request_parameters(&self, client_id: &ClientId) -> IndexMap<String, String> {
        let mut params = IndexMap::new();
        params.insert(PARAM_CLIENT_ID.to_string(), client_id.0.clone());
        params.insert(PARAM_CLIENT_SECRET.to_string(), self.secret.clone());
        params
    }
}
