//! Referral rule, redemption, and credit balance tests against a mocked
//! Branch API.

mod helpers;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// create_referral_rule
// ============================================================================

#[tokio::test]
async fn referral_rule_posts_details_with_full_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/eventresponse"))
        .and(body_json(json!({
            "calculation_type": 0,
            "event": "invite",
            "branch_key": "key_test_k1",
            "branch_secret": "secret_s1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rule_1",
            "event": "invite",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = helpers::key_secret_client(&server);
    let mut details = serde_json::Map::new();
    details.insert("calculation_type".to_string(), 0.into());
    details.insert("event".to_string(), "invite".into());

    let rule = client.create_referral_rule(&details).await.unwrap();
    assert_eq!(rule["id"], "rule_1");
}

// ============================================================================
// redeem
// ============================================================================

#[tokio::test]
async fn redeem_posts_identity_amount_and_bucket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/redeem"))
        .and(body_json(json!({
            "identity": "u1",
            "amount": 5,
            "bucket": "default",
            "branch_key": "key_test_k1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = helpers::key_client(&server);
    let response = client.redeem("u1", 5, "default").await.unwrap();
    assert!(response.as_object().unwrap().is_empty());
}

// ============================================================================
// credits
// ============================================================================

#[tokio::test]
async fn credits_sends_identity_and_identifying_field_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/credits"))
        .and(query_param("identity", "u1"))
        .and(query_param("app_id", "app_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"bucket": "default", "credits": 5},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = helpers::app_id_client(&server);
    let balances = client.credits("u1").await.unwrap();
    assert_eq!(balances[0]["bucket"], "default");
    assert_eq!(balances[0]["credits"], 5);
}

#[tokio::test]
async fn concurrent_credits_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/credits"))
        .and(query_param("identity", "u1"))
        .and(query_param("branch_key", "key_test_k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"bucket": "default", "credits": 5},
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = helpers::key_client(&server);
    let (first, second) = tokio::join!(client.credits("u1"), client.credits("u1"));

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0]["credits"], 5);
}
