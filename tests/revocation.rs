use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use url::Url;

use tomiko_revoke::http::{ClientSecretPost, RevocationHttpRequest};
use tomiko_revoke::{
    AuthorizationServiceConfiguration, Error, InvalidArgument, RevokeTokenRequest,
    RevokeTokenResponse, TokenTypeHint,
};

fn service_config() -> AuthorizationServiceConfiguration {
    AuthorizationServiceConfiguration::new(
        Url::parse("https://idp.example.com/oauth2/authorize").unwrap(),
        Url::parse("https://idp.example.com/oauth2/token").unwrap(),
    )
    .with_end_session_endpoint(Url::parse("https://idp.example.com/oauth2/logout").unwrap())
    .with_revocation_endpoint(Url::parse("https://idp.example.com/oauth2/revoke").unwrap())
}

#[test]
fn access_token_hint_parameters() {
    let request = RevokeTokenRequest::builder(service_config(), "client1", "idtoken")
        .unwrap()
        .set_token_type_hint(TokenTypeHint::AccessToken)
        .build();

    let mut expected = IndexMap::new();
    expected.insert("token".to_string(), "idtoken".to_string());
    expected.insert("token_type_hint".to_string(), "access_token".to_string());
    assert_eq!(request.request_parameters(), expected);
}

#[test]
fn additional_parameters_sit_beside_token() {
    let mut builder = RevokeTokenRequest::builder(service_config(), "client1", "idtoken").unwrap();
    builder
        .set_additional_parameters(vec![("test_key1", "test_value1"), ("test_key2", "test_value2")])
        .unwrap();
    let params = builder.build().request_parameters();

    assert_eq!(params.len(), 3);
    assert_eq!(params["token"], "idtoken");
    assert_eq!(params["test_key1"], "test_value1");
    assert_eq!(params["test_key2"], "test_value2");
}

#[test]
fn reserved_parameter_is_rejected_among_valid_ones() {
    let mut builder = RevokeTokenRequest::builder(service_config(), "client1", "idtoken").unwrap();
    let err = builder
        .set_additional_parameters(vec![
            ("test_key1", "test_value1"),
            ("token_type_hint", "refresh_token"),
            ("test_key2", "test_value2"),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        InvalidArgument::ReservedParameter("token_type_hint".to_string())
    );
}

#[test]
fn empty_required_values_are_invalid() {
    let client_id = RevokeTokenRequest::builder(service_config(), "", "idtoken").unwrap_err();
    let token = RevokeTokenRequest::builder(service_config(), "client1", "").unwrap_err();
    assert_eq!(client_id, InvalidArgument::Empty("clientId"));
    assert_eq!(token, InvalidArgument::Empty("token"));
}

#[test]
fn request_round_trip_through_storage() {
    let mut builder =
        RevokeTokenRequest::builder(service_config(), "client1", "refresh-123").unwrap();
    builder
        .set_token_type_hint(TokenTypeHint::REFRESH_TOKEN)
        .set_additional_parameters(vec![("resource", "https://api.example.com")])
        .unwrap();
    let request = builder.build();

    let stored = request.json_serialize_string().unwrap();
    let revived = RevokeTokenRequest::json_deserialize_str(&stored).unwrap();

    assert_eq!(revived.configuration(), request.configuration());
    assert_eq!(revived.client_id(), request.client_id());
    assert_eq!(revived.token_type_hint(), request.token_type_hint());
    assert_eq!(revived.token(), request.token());
    assert_eq!(revived.additional_parameters(), request.additional_parameters());
}

#[test]
fn serialized_request_keeps_parameter_order() {
    let mut builder = RevokeTokenRequest::builder(service_config(), "client1", "idtoken").unwrap();
    builder
        .set_additional_parameters(vec![("zeta", "1"), ("alpha", "2"), ("mid", "3")])
        .unwrap();
    let json = builder.build().json_serialize().unwrap();

    let keys: Vec<&str> = json["additionalParameters"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn response_round_trip_through_storage() {
    let request = RevokeTokenRequest::builder(service_config(), "client1", "idtoken")
        .unwrap()
        .build();
    let response = RevokeTokenResponse::builder(request.clone()).build();

    let stored = response.json_serialize_string().unwrap();
    let revived = RevokeTokenResponse::json_deserialize_str(&stored).unwrap();

    assert_eq!(revived.request(), &request);
}

#[test]
fn response_without_request_is_malformed() {
    let err = RevokeTokenResponse::json_deserialize_str(r#"{"status": "ok"}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn prepared_body_for_confidential_client() {
    let request = RevokeTokenRequest::builder(service_config(), "client1", "idtoken")
        .unwrap()
        .set_token_type_hint("refresh_token")
        .build();
    let prepared = RevocationHttpRequest::prepare(&request, &ClientSecretPost::new("s3cret")).unwrap();

    assert_eq!(prepared.url.as_str(), "https://idp.example.com/oauth2/revoke");
    assert_eq!(
        prepared.body,
        "token=idtoken&token_type_hint=refresh_token&client_id=client1&client_secret=s3cret"
    );
}
