use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::auth::error::Error;
use crate::auth::params::check_not_null;
use crate::auth::revocation::{RevokeTokenRequest, RevokeTokenResponse};
use crate::core::configuration::AuthorizationServiceConfiguration;
use crate::http::client_auth::{
    ClientAuthentication, ClientSecretBasic, ClientSecretPost, NoClientAuthentication,
};
use crate::http::request::RevocationHttpRequest;

#[derive(Parser)]
#[clap(
    name = "tomiko-revoke",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS")
)]
pub struct Options {
    #[clap(long, env = "AUTHORIZATION_ENDPOINT")]
    authorization_endpoint: Url,
    #[clap(long, env = "TOKEN_ENDPOINT")]
    token_endpoint: Url,
    #[clap(long, env = "REVOCATION_ENDPOINT")]
    revocation_endpoint: Option<Url>,
    #[clap(long, env = "CLIENT_ID")]
    client_id: Option<String>,
    #[clap(long, env = "CLIENT_SECRET")]
    client_secret: Option<String>,
    /// Send the client secret in the form body instead of a Basic header
    #[clap(long)]
    secret_post: bool,
    #[clap(subcommand)]
    command: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Prepare(TokenArgs),
    Serialize(TokenArgs),
    Inspect(InspectArgs),
}

#[derive(Parser)]
struct TokenArgs {
    #[clap(short, long)]
    token: String,
    /// access_token, refresh_token or any extension token type
    #[clap(long)]
    hint: Option<String>,
    /// Additional request parameter as key=value
    #[clap(short, long = "param", parse(try_from_str = parse_key_value))]
    params: Vec<(String, String)>,
}

#[derive(Parser)]
struct InspectArgs {
    #[clap(short, long)]
    file: PathBuf,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) => Ok((k.to_string(), v.to_string())),
        None => Err(format!("expected key=value, got `{}`", s)),
    }
}

fn get_configuration(opts: &Options) -> AuthorizationServiceConfiguration {
    let config = AuthorizationServiceConfiguration::new(
        opts.authorization_endpoint.clone(),
        opts.token_endpoint.clone(),
    );
    match &opts.revocation_endpoint {
        Some(endpoint) => config.with_revocation_endpoint(endpoint.clone()),
        None => config,
    }
}

fn get_client_auth(opts: &Options) -> Box<dyn ClientAuthentication> {
    match (&opts.client_secret, opts.secret_post) {
        (None, _) => Box::new(NoClientAuthentication),
        (Some(secret), false) => Box::new(ClientSecretBasic::new(secret.clone())),
        (Some(secret), true) => Box::new(ClientSecretPost::new(secret.clone())),
    }
}

fn build_request(args: &TokenArgs, opts: &Options) -> Result<RevokeTokenRequest, Error> {
    let client_id = check_not_null(opts.client_id.clone(), "clientId")?;

    let mut builder =
        RevokeTokenRequest::builder(get_configuration(opts), client_id, args.token.clone())?;
    builder.set_additional_parameters(args.params.iter().cloned())?;
    if let Some(hint) = &args.hint {
        builder.set_token_type_hint(hint.clone());
    }
    Ok(builder.build())
}

fn prepare(args: &TokenArgs, opts: &Options) -> Result<(), Error> {
    let request = build_request(args, opts)?;
    let auth = get_client_auth(opts);
    let prepared = RevocationHttpRequest::prepare(&request, auth.as_ref())?;

    println!("POST {}", prepared.url);
    for (name, value) in &prepared.headers {
        println!("{}: {}", name, value);
    }
    println!();
    println!("{}", prepared.body);
    Ok(())
}

fn serialize(args: &TokenArgs, opts: &Options) -> Result<(), Error> {
    let request = build_request(args, opts)?;
    println!("{}", request.json_serialize_string()?);
    Ok(())
}

fn inspect(c: &InspectArgs) -> Result<(), Error> {
    let contents = std::fs::read_to_string(&c.file)?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;

    let request = if json.get("request").is_some() {
        RevokeTokenResponse::json_deserialize(json)?.into_request()
    } else {
        RevokeTokenRequest::json_deserialize(json)?
    };

    println!("client_id: {}", request.client_id());
    for (name, value) in request.request_parameters() {
        println!("{}={}", name, value);
    }
    Ok(())
}

pub fn run_cli_action(opts: Options) -> Result<(), Error> {
    match &opts.command {
        SubCommand::Prepare(c) => prepare(c, &opts),
        SubCommand::Serialize(c) => serialize(c, &opts),
        SubCommand::Inspect(c) => inspect(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        let mut argv = vec![
            "tomiko-revoke",
            "--authorization-endpoint",
            "https://testidp.example.com/authorize",
            "--token-endpoint",
            "https://testidp.example.com/token",
        ];
        argv.extend_from_slice(args);
        Options::try_parse_from(argv).unwrap()
    }

    #[test]
    fn key_value_params() {
        assert_eq!(
            parse_key_value("a=b=c"),
            Ok(("a".to_string(), "b=c".to_string()))
        );
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn build_request_from_options() {
        let opts = parse(&[
            "--client-id",
            "client1",
            "serialize",
            "--token",
            "idtoken",
            "--hint",
            "access_token",
            "--param",
            "test_key1=test_value1",
        ]);
        let args = match &opts.command {
            SubCommand::Serialize(args) => args,
            _ => panic!("expected serialize"),
        };
        let request = build_request(args, &opts).unwrap();
        assert_eq!(request.client_id().as_ref(), "client1");
        assert_eq!(request.token_type_hint(), Some("access_token"));
        assert_eq!(request.additional_parameters()["test_key1"], "test_value1");
    }

    #[test]
    fn reserved_param_is_rejected() {
        let opts = parse(&[
            "--client-id",
            "client1",
            "prepare",
            "--token",
            "idtoken",
            "--param",
            "token_type_hint=access_token",
        ]);
        let err = run_cli_action(opts).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
