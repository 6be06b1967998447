pub mod core;
pub mod auth;
pub mod http;
pub mod util;

pub use crate::auth::error::{Error, InvalidArgument, MalformedInput};
pub use crate::auth::revocation::{
    RevokeTokenRequest, RevokeTokenRequestBuilder, RevokeTokenResponse, RevokeTokenResponseBuilder,
};
pub use crate::core::configuration::AuthorizationServiceConfiguration;
pub use crate::core::types::{ClientId, TokenTypeHint};
