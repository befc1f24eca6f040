use crate::helpers::{issue, spawn_app};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn home_features_the_newest_issue() {
    // Arrange
    let app = spawn_app().await;
    app.given_issue_list(json!([
        issue("older", "Older story", "money", "2025-11-20T08:00:00.000Z"),
        issue("newest", "Newest story", "world", "2025-11-29T08:00:00.000Z"),
    ]))
    .await;
    app.given_issue(
        "newest",
        json!({ "data": issue("newest", "Newest story", "world", "2025-11-29T08:00:00.000Z") }),
    )
    .await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<article class="featured">"#));
    assert!(html.contains("World · 1 min read · Nov 29, 2025"));
    assert!(html.contains("<li>What Newest story is about</li>"));

    let featured = html.find("Newest story").unwrap();
    let recent = html.find("Older story").unwrap();
    assert!(featured < recent);
}

#[tokio::test]
async fn home_renders_an_empty_state_without_issues() {
    let app = spawn_app().await;
    app.given_issue_list(json!({ "issues": [] })).await;

    let html = app.get_html("/").await;

    assert!(html.contains("The first breakdown is on its way."));
}

#[tokio::test]
async fn home_returns_a_500_when_the_content_api_fails() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/issues"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.content_server)
        .await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Something went wrong."));
}
