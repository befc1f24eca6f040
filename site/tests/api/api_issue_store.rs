use crate::helpers::issue;
use breakdown::adapters::ApiIssueStore;
use breakdown::domain::IssueStore;
use claims::{assert_err, assert_none, assert_ok, assert_some};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store(server: &MockServer) -> ApiIssueStore {
    ApiIssueStore::new(server.uri(), Duration::from_millis(200)).unwrap()
}

async fn serve_list(server: &MockServer, body: Value) {
    Mock::given(path("/issues"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn every_list_envelope_yields_the_same_cards() {
    let records = json!([
        issue("a", "First", "tech", "2025-11-28T08:00:00.000Z"),
        issue("b", "Second", "", "2025-11-27T08:00:00.000Z"),
    ]);

    let mut listings = Vec::new();
    for body in [
        records.clone(),
        json!({ "data": records }),
        json!({ "issues": records }),
        json!({ "data": { "issues": records } }),
    ] {
        let server = MockServer::start().await;
        serve_list(&server, body).await;
        listings.push(assert_ok!(store(&server).list_issues().await));
    }

    for listing in &listings {
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].slug, listings[0][0].slug);
        assert_eq!(listing[1].topic, "NEWS");
        assert_eq!(listing[1].date, listings[0][1].date);
    }
}

#[tokio::test]
async fn unrecognised_lists_are_empty() {
    let server = MockServer::start().await;
    serve_list(&server, json!({ "items": [] })).await;

    let cards = assert_ok!(store(&server).list_issues().await);

    assert!(cards.is_empty());
}

#[tokio::test]
async fn card_shaped_lists_are_passed_through() {
    let server = MockServer::start().await;
    serve_list(
        &server,
        json!([{
            "slug": "a",
            "title": "A",
            "summary": "Already mapped",
            "topic": "tech",
            "date": "2025-01-01T00:00:00.000Z",
            "minutes": 5
        }]),
    )
    .await;

    let cards = assert_ok!(store(&server).list_issues().await);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].summary, "Already mapped");
    assert_eq!(cards[0].topic, "tech");
    assert_eq!(cards[0].date, "2025-01-01T00:00:00.000Z");
    assert_eq!(cards[0].minutes, 5);
}

#[tokio::test]
async fn invalid_list_members_are_skipped_in_api_order() {
    let server = MockServer::start().await;
    serve_list(
        &server,
        json!([
            issue("z", "Z", "tech", "2025-11-01T08:00:00.000Z"),
            { "title": "no slug" },
            issue("a", "A", "tech", "2025-11-02T08:00:00.000Z"),
        ]),
    )
    .await;

    let cards = assert_ok!(store(&server).list_issues().await);

    let slugs: Vec<&str> = cards.iter().map(|card| card.slug.as_str()).collect();
    assert_eq!(slugs, vec!["z", "a"]);
}

#[tokio::test]
async fn a_404_means_the_issue_does_not_exist() {
    let server = MockServer::start().await;
    Mock::given(path("/issues/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    assert_none!(assert_ok!(store(&server).get_issue("gone").await));
}

#[tokio::test]
async fn server_errors_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store(&server);

    assert_err!(store.list_issues().await);
    assert_err!(store.get_issue("any").await);
}

#[tokio::test]
async fn invalid_json_is_reported() {
    let server = MockServer::start().await;
    Mock::given(path("/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert_err!(store(&server).list_issues().await);
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(path("/issues"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    assert_err!(store(&server).list_issues().await);
}

#[tokio::test]
async fn slugs_are_sent_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(path("/issues/a%20b"))
        .and(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "slug": "a b", "title": "Spaced" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let detail = assert_some!(assert_ok!(store(&server).get_issue("a b").await));

    assert_eq!(detail.title, "Spaced");
    assert_eq!(detail.bullets, vec!["New issue is live.", "Read on for the full breakdown."]);
}
