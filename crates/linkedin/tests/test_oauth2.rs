use libs::url::Url;
use linkedin::{
    http::HttpError, prelude::*, scopes, AuthCodeLinkedIn, ClientError, Config, Credentials,
    OAuth,
};
use std::collections::HashMap;
use test_util::MockHttpClient;

fn oauth() -> OAuth {
    OAuth {
        state: "fdsafdsfa".to_owned(),
        redirect_uri: "http://localhost:5000/callback".to_owned(),
        scopes: scopes!("r_organization_social"),
    }
}

fn client(http: MockHttpClient) -> AuthCodeLinkedIn<MockHttpClient> {
    AuthCodeLinkedIn::with_http(
        Credentials::new("this-is-my-client-id", "this-is-my-client-secret"),
        oauth(),
        Config::default(),
        http,
    )
}

#[test]
fn test_get_authorize_url() {
    let creds = Credentials::new("this-is-my-client-id", "this-is-my-client-secret");

    let linkedin = AuthCodeLinkedIn::new(creds, oauth());

    let authorize_url = linkedin.get_authorize_url().unwrap();
    let url = Url::parse(&authorize_url).unwrap();
    let hash_query: HashMap<_, _> = url.query_pairs().into_owned().collect();

    assert_eq!(
        &authorize_url[..authorize_url.find('?').unwrap()],
        "https://www.linkedin.com/oauth/v2/authorization"
    );
    assert_eq!(hash_query.get("client_id").unwrap(), "this-is-my-client-id");
    assert_eq!(hash_query.get("response_type").unwrap(), "code");
    assert_eq!(
        hash_query.get("redirect_uri").unwrap(),
        "http://localhost:5000/callback"
    );
    assert_eq!(hash_query.get("scope").unwrap(), "r_organization_social");
    assert_eq!(hash_query.get("state").unwrap(), "fdsafdsfa");
    assert!(!hash_query.contains_key("client_secret"));
}

#[test]
fn test_auth_base_url_override() {
    let linkedin = AuthCodeLinkedIn::with_http(
        Credentials::public("id"),
        oauth(),
        Config {
            auth_base_url: "http://127.0.0.1:8080/oauth/v2/".to_owned(),
        },
        MockHttpClient::default(),
    );

    let authorize_url = linkedin.get_authorize_url().unwrap();
    assert!(authorize_url.starts_with("http://127.0.0.1:8080/oauth/v2/authorization?"));
}

#[tokio::test]
async fn test_request_token_posts_form() {
    let http = MockHttpClient::respond_with(r#"{"access_token":"T","expires_in":60}"#);
    let linkedin = client(http.clone());

    let token = linkedin.request_token("the-code").await.unwrap();
    assert_eq!(token.access_token, "T");

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://www.linkedin.com/oauth/v2/accessToken"
    );
    let form = &requests[0].form;
    assert_eq!(form["grant_type"], "authorization_code");
    assert_eq!(form["code"], "the-code");
    assert_eq!(form["redirect_uri"], "http://localhost:5000/callback");
    assert_eq!(form["client_id"], "this-is-my-client-id");
    assert_eq!(form["client_secret"], "this-is-my-client-secret");
}

#[tokio::test]
async fn test_request_token_without_token_field() {
    let http = MockHttpClient::respond_with(r#"{"error":"invalid_grant"}"#);
    let err = client(http).request_token("stale").await.unwrap_err();

    match err {
        ClientError::TokenResponse { body, .. } => assert!(body.contains("invalid_grant")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_request_token_provider_error_status() {
    let http = MockHttpClient::respond_with_status(
        400,
        r#"{"error":"invalid_request","error_description":"Unable to retrieve access token"}"#,
    );
    let err = client(http).request_token("stale").await.unwrap_err();

    match err {
        ClientError::Http(err) => match *err {
            HttpError::StatusCode { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_request"));
            }
            other => panic!("unexpected http error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_request_token_needs_secret() {
    let http = MockHttpClient::default();
    let linkedin = AuthCodeLinkedIn::with_http(
        Credentials::public("id"),
        oauth(),
        Config::default(),
        http.clone(),
    );

    let err = linkedin.request_token("code").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingCredential(_)));
    assert_eq!(http.request_count(), 0);
}

#[test]
fn test_check_state() {
    let linkedin = client(MockHttpClient::default());
    assert!(linkedin.check_state(Some("fdsafdsfa")));
    assert!(!linkedin.check_state(Some("other")));
    assert!(!linkedin.check_state(None));

    let blank = AuthCodeLinkedIn::with_http(
        Credentials::public("id"),
        OAuth::default(),
        Config::default(),
        MockHttpClient::default(),
    );
    assert!(!blank.check_state(Some("")));
}
