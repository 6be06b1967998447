pub mod request;
pub mod response;

pub use request::{
    RevokeTokenRequest, RevokeTokenRequestBuilder, PARAM_CLIENT_ID, PARAM_TOKEN,
    PARAM_TOKEN_TYPE_HINT,
};
pub use response::{RevokeTokenResponse, RevokeTokenResponseBuilder};
