use account::{AccountReply, AccountService, AuthMode, AuthRejectedError, Credentials, TransportError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        email: "a@b.com".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn login_posts_json_to_login_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = crate::service_for(&server)
        .submit(AuthMode::Login, &credentials())
        .await
        .expect("transport ok");

    assert_eq!(reply, AccountReply::Accepted);
}

#[tokio::test]
async fn signup_posts_to_register_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": "200" })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = crate::service_for(&server)
        .submit(AuthMode::SignUp, &credentials())
        .await
        .expect("transport ok");

    assert_eq!(reply, AccountReply::Accepted);
}

#[tokio::test]
async fn non_200_code_is_a_typed_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 401, "message": "wrong password" })),
        )
        .mount(&server)
        .await;

    let reply = crate::service_for(&server)
        .submit(AuthMode::Login, &credentials())
        .await
        .expect("transport ok");

    assert_eq!(
        reply,
        AccountReply::Rejected(AuthRejectedError {
            code: 401,
            reason: Some("wrong password".to_string()),
        })
    );
}

#[tokio::test]
async fn http_error_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = crate::service_for(&server)
        .submit(AuthMode::Login, &credentials())
        .await
        .unwrap_err();

    assert_eq!(err, TransportError::Status(502));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = crate::service_for(&server)
        .submit(AuthMode::Login, &credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let err = crate::unreachable_service()
        .submit(AuthMode::Login, &credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request(_)), "got {err:?}");
}
