use account::{
    AuthError, AuthFormController, AuthMessages, AuthMode, HttpAccountService, Notification,
    NotificationKind,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Seen = Rc<RefCell<Vec<Notification>>>;

fn form_for(server: &MockServer) -> (AuthFormController<HttpAccountService>, Seen) {
    form_with(crate::service_for(server))
}

fn form_with(service: HttpAccountService) -> (AuthFormController<HttpAccountService>, Seen) {
    let seen: Seen = Rc::default();
    let mut controller = AuthFormController::new(service, AuthMessages::default());
    let sink = seen.clone();
    controller.subscribe(move |n| sink.borrow_mut().push(n.clone()));
    controller.set_email("  a@b.com ");
    controller.set_password(" secret ");
    (controller, seen)
}

#[tokio::test]
async fn login_against_service_authenticates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut form, seen) = form_for(&server);
    form.submit().await.expect("login accepted");

    assert!(form.form().authenticated());
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].kind, NotificationKind::Success);
    assert_eq!(seen.borrow()[0].body, "Login succeeded");

    let requests = server.received_requests().await.expect("recording on");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "email": "a@b.com", "password": "secret" }));
}

#[tokio::test]
async fn signup_against_service_authenticates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut form, seen) = form_for(&server);
    assert_eq!(form.toggle_mode(), AuthMode::SignUp);
    form.submit().await.expect("signup accepted");

    assert!(form.form().authenticated());
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].body, "Registration succeeded");
}

#[tokio::test]
async fn rejected_login_surfaces_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/account/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 401 })))
        .mount(&server)
        .await;

    let (mut form, seen) = form_for(&server);
    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, AuthError::Rejected(ref r) if r.code == 401));
    assert!(!form.form().authenticated());
    assert!(!form.form().pending());
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].kind, NotificationKind::Error);
}

#[tokio::test]
async fn network_failure_surfaces_transport_error() {
    let (mut form, seen) = form_with(crate::unreachable_service());

    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
    assert!(!form.form().authenticated());
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0]
        .body
        .starts_with("Could not reach the account service"));
}
