use crate::helpers::spawn_app;

#[tokio::test]
async fn about_page_renders_without_the_content_api() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/about").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("<title>About | Basic Breakdown</title>"));
    assert!(html.contains("What is Basic Breakdown?"));
    assert!(html.contains("Can I unsubscribe anytime?"));
    assert!(app.content_server.received_requests().await.unwrap().is_empty());
}
