use crate::helper::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get("/health").await;

    assert!(
        response.status().is_success(),
        "Health check failed with status: {}",
        response.status()
    );
    assert_eq!(response.text().await.unwrap(), "OK");
}
