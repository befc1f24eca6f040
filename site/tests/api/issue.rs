use crate::helpers::{issue, spawn_app};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn issue_page_renders_a_wrapped_record() {
    // Arrange
    let app = spawn_app().await;
    let mut record = issue("eu-ai-rules", "EU targets big tech", "tech", "2025-11-28T08:00:00.000Z");
    record["whyItMatters"] = json!("Compliance costs go up.");
    record["readMore"] = json!("https://example.com/eu?x=1&y=2");
    app.given_issue("eu-ai-rules", json!({ "data": record })).await;

    // Act
    let response = app.get("/posts/eu-ai-rules").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("<title>EU targets big tech | Basic Breakdown</title>"));
    assert!(html.contains("TECH · 1 min read"));
    assert!(html.contains("Nov 28, 2025"));
    assert!(html.contains("<li>What EU targets big tech is about</li>"));
    assert!(html.contains("<h2>Why it matters</h2>"));
    assert!(html.contains(r#"href="https://example.com/eu?x=1&amp;y=2""#));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://basicbreakdown.example/posts/eu-ai-rules">"#
    ));
}

#[tokio::test]
async fn issue_page_accepts_a_bare_record() {
    let app = spawn_app().await;
    app.given_issue(
        "blaze",
        issue("blaze", "Hong Kong blaze", "world", "2025-11-29T08:00:00.000Z"),
    )
    .await;

    let response = app.get("/posts/blaze").await;

    assert_eq!(200, response.status().as_u16());
    assert!(response.text().await.unwrap().contains("Hong Kong blaze"));
}

#[tokio::test]
async fn unknown_issues_render_a_404_page() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/issues/missing"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&app.content_server)
        .await;

    // Act
    let response = app.get("/posts/missing").await;

    // Assert
    assert_eq!(404, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("We couldn't find that breakdown."));
}

#[tokio::test]
async fn records_without_a_title_are_treated_as_missing() {
    let app = spawn_app().await;
    app.given_issue("untitled", json!({ "data": { "slug": "untitled" } }))
        .await;

    let response = app.get("/posts/untitled").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn issue_page_returns_a_500_when_the_content_api_fails() {
    let app = spawn_app().await;
    Mock::given(path("/issues/blaze"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.content_server)
        .await;

    let response = app.get("/posts/blaze").await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn read_more_only_links_to_http_urls() {
    // Arrange
    let app = spawn_app().await;
    let mut record = issue("risky", "Risky link", "tech", "2025-11-28T08:00:00.000Z");
    record["readMore"] = json!("javascript:alert(document.cookie)");
    app.given_issue("risky", json!({ "data": record })).await;

    // Act
    let html = app.get_html("/posts/risky").await;

    // Assert
    assert!(!html.contains(r#"href="javascript:"#));
    assert!(html.contains("<p>javascript:alert(document.cookie)</p>"));
}
