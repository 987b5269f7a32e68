//! End-to-end tests over a real socket
//!
//! Serves the router on an ephemeral port and drives it with reqwest.

use std::net::SocketAddr;

use recipe_api::{
    api::create_router,
    models::{Recipe, RecipeList},
    AppState,
};
use reqwest::StatusCode;
use serde_json::json;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::in_memory());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_soup_scenario_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}/recipes");

    let response = client
        .post(format!("{base}/"))
        .json(&json!({"name": "Soup", "author": "a@b.com", "img_url": "http://x/y.jpg"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Recipe = response.json().await.unwrap();
    let id = created.id.clone().unwrap();

    let fetched: Recipe = client
        .get(format!("{base}/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let response = client
        .put(format!("{base}/{id}"))
        .json(&json!({"name": "Stew"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Recipe = response.json().await.unwrap();
    assert_eq!(updated.name, "Stew");
    assert_eq!(updated.author, "a@b.com");
    assert_eq!(updated.img_url, "http://x/y.jpg");

    let list: RecipeList = client
        .get(format!("{base}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.recipes, vec![updated]);

    let response = client
        .delete(format!("{base}/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    let response = client.get(format!("{base}/{id}")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
