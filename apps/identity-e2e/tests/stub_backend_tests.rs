//! Scenarios against the in-process stub backend.

use identity_e2e::scenarios::{self, identity, profile};
use identity_e2e::{Harness, HarnessConfig, ScenarioError, run_scenarios};
use identity_infra::StubIdentityBackend;
use identity_shared::RefreshTokenRequest;
use identity_shared::routes;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn harness_for(uri: String) -> Harness {
    Harness::connect(HarnessConfig::new(uri)).unwrap()
}

#[tokio::test]
async fn test_full_catalogue_passes_against_stub() {
    let stub = StubIdentityBackend::start().await;
    let harness = harness_for(stub.uri());

    let report = run_scenarios(&harness, &scenarios::catalogue(), None).await;

    let failures: Vec<_> = report
        .failed()
        .map(|o| format!("{}: {}", o.name, o.failure.clone().unwrap_or_default()))
        .collect();
    assert!(failures.is_empty(), "failed scenarios: {:#?}", failures);
    assert_eq!(report.outcomes.len(), scenarios::catalogue().len());
}

#[tokio::test]
async fn test_fixture_registers_a_new_account_each_call() {
    let stub = StubIdentityBackend::start().await;
    let harness = harness_for(stub.uri());
    assert_eq!(stub.account_count(), 1);

    let first = harness.fixture().register_user().await.unwrap();
    let second = harness.fixture().register_user().await.unwrap();

    assert_ne!(first.registered_user.email(), second.registered_user.email());
    assert_ne!(first.access_token, second.access_token);
    assert_eq!(stub.account_count(), 3);
}

#[tokio::test]
async fn test_stub_rejects_mismatched_password_confirmation() {
    let stub = StubIdentityBackend::start().await;
    let body = serde_json::json!({
        "email": "mismatch@example.com",
        "password": "Password123",
        "confirmPassword": "Password124",
        "displayName": "Mismatch",
        "gender": "Female",
        "preferredCategoryKeys": ["books"],
        "countryKey": "UK"
    });

    let reply = reqwest::Client::new()
        .post(format!("{}{}", stub.uri(), routes::REGISTER))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(reply.status().as_u16(), 400);
    assert_eq!(stub.account_count(), 1);
}

#[tokio::test]
async fn test_refresh_token_is_single_use() {
    let stub = StubIdentityBackend::start().await;
    let harness = harness_for(stub.uri());
    let registered = harness.fixture().register_user().await.unwrap();
    let request = RefreshTokenRequest::new(registered.refresh_token);

    let first = harness.api().refresh(&request).await.unwrap();
    let second = harness.api().refresh(&request).await.unwrap();

    assert_eq!(first.status, 200);
    assert_eq!(second.status, 401);
}

#[tokio::test]
async fn test_filter_selects_matching_scenarios() {
    let stub = StubIdentityBackend::start().await;
    let harness = harness_for(stub.uri());

    let report = run_scenarios(&harness, &scenarios::catalogue(), Some("profile")).await;

    assert!(!report.is_empty());
    assert!(report.outcomes.iter().all(|o| o.name.contains("profile")));
    assert!(report.all_passed());
}

#[tokio::test]
async fn test_misbehaving_backend_fails_scenarios_without_aborting_run() {
    // Answers everything with a success status and a body that is no envelope.
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let harness = harness_for(server.uri());

    let report = run_scenarios(&harness, &scenarios::catalogue(), None).await;

    assert_eq!(report.outcomes.len(), scenarios::catalogue().len());
    assert!(!report.all_passed());
}

#[tokio::test]
async fn test_unauthorized_checks_catch_an_open_profile_endpoint() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isSuccess": true,
            "statusCode": 200,
            "data": {
                "username": "anyone@example.com",
                "displayName": "Anyone",
                "gender": "Male",
                "countryKey": "UK"
            }
        })))
        .mount(&server)
        .await;
    let harness = harness_for(server.uri());

    let err = profile::profile_without_token_is_unauthorized(&harness)
        .await
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Assertion(_)));
}

#[tokio::test]
async fn test_stub_rejects_profile_update_with_forged_token() {
    let stub = StubIdentityBackend::start().await;
    let harness = harness_for(stub.uri());

    profile::update_profile_with_invalid_token_is_unauthorized(&harness)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_forged_token_check_catches_an_open_profile_update() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(routes::PROFILE))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isSuccess": true,
            "statusCode": 200,
            "data": {
                "username": "anyone@example.com",
                "displayName": "Updated Gomi Sharp",
                "gender": "Male",
                "countryKey": "UK"
            }
        })))
        .mount(&server)
        .await;
    let harness = harness_for(server.uri());

    let err = profile::update_profile_with_invalid_token_is_unauthorized(&harness)
        .await
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Assertion(_)));
}

#[tokio::test]
async fn test_update_check_requires_success_envelope() {
    // Echoes the new name but reports failure in the envelope.
    let server = MockServer::start().await;
    let profile_body = |is_success: bool| {
        serde_json::json!({
            "isSuccess": is_success,
            "statusCode": 200,
            "data": {
                "username": "anyone@example.com",
                "displayName": "Updated Gomi Sharp",
                "gender": "Male",
                "countryKey": "UK"
            }
        })
    };
    Mock::given(method("POST"))
        .and(path(routes::REGISTER))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isSuccess": true,
            "statusCode": 200,
            "data": { "accessToken": "acc", "refreshToken": "ref", "expiresIn": 3600 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(routes::PROFILE))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body(false)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(routes::PROFILE))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body(true)))
        .mount(&server)
        .await;
    let harness = harness_for(server.uri());

    let err = profile::update_profile_display_name(&harness)
        .await
        .unwrap_err();
    match err {
        ScenarioError::Assertion(message) => assert!(message.contains("update envelope")),
        other => panic!("expected assertion failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_a_harness_error() {
    let harness = harness_for("http://127.0.0.1:9".to_string());

    let err = identity::register_fresh_user(&harness).await.unwrap_err();
    assert!(matches!(err, ScenarioError::Harness(_)));
}
