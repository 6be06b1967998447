pub mod client_auth;
pub mod request;

pub use client_auth::{
    ClientAuthentication, ClientSecretBasic, ClientSecretPost, NoClientAuthentication,
};
pub use request::RevocationHttpRequest;
