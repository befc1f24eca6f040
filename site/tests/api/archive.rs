use crate::helpers::{issue, spawn_app};
use serde_json::json;

async fn archive_app() -> crate::helpers::TestApp {
    let app = spawn_app().await;
    app.given_issue_list(json!({ "data": [
        issue("school-phones", "Schools ban phones in class", "tech", "2025-11-20T08:00:00.000Z"),
        issue("eu-ai-rules", "EU targets big tech", "tech", "2025-11-28T08:00:00.000Z"),
        issue("inflation-cools", "Inflation is cooling", "money", "2025-11-26T08:00:00.000Z"),
        issue("blaze", "Hong Kong blaze", "world", "2025-11-29T08:00:00.000Z"),
    ]}))
    .await;
    app
}

#[tokio::test]
async fn archive_lists_every_issue_newest_first() {
    // Arrange
    let app = archive_app().await;

    // Act
    let response = app.get("/archive").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Showing <strong>4</strong> of 4"));
    assert!(!html.contains(r#"class="reset""#));

    let positions: Vec<usize> = ["Hong Kong blaze", "EU targets", "Inflation", "Schools ban"]
        .iter()
        .map(|title| html.find(title).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn archive_filters_by_topic_and_text() {
    let app = archive_app().await;

    let html = app.get_html("/archive?q=phones&topic=tech").await;

    assert!(html.contains("Showing <strong>1</strong> of 4"));
    assert!(html.contains("Schools ban phones in class"));
    assert!(!html.contains("EU targets big tech"));
    assert!(html.contains(r#"<option value="tech" selected>tech</option>"#));
    assert!(html.contains(r#"value="phones""#));
    assert!(html.contains(r#"class="reset""#));
}

#[tokio::test]
async fn archive_sorts_oldest_first_on_request() {
    let app = archive_app().await;

    let html = app.get_html("/archive?sort=oldest").await;

    let oldest = html.find("Schools ban").unwrap();
    let newest = html.find("Hong Kong blaze").unwrap();
    assert!(oldest < newest);
    assert!(html.contains(r#"<option value="oldest" selected>Oldest</option>"#));
}

#[tokio::test]
async fn archive_shows_an_empty_state_when_nothing_matches() {
    let app = archive_app().await;

    let html = app.get_html("/archive?q=volcano").await;

    assert!(html.contains("Showing <strong>0</strong> of 4"));
    assert!(html.contains("No matches."));
}

#[tokio::test]
async fn archive_offers_every_topic_once() {
    let app = archive_app().await;

    let html = app.get_html("/archive").await;

    assert_eq!(html.matches(r#"<option value="tech""#).count(), 1);
    assert!(html.contains(r#"<option value="all" selected>All topics</option>"#));
    assert!(html.contains(r#"<option value="money">money</option>"#));
}
