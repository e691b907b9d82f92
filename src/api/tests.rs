//! REST client tests against the grocery server, served on a local port.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use axum::{http::StatusCode, routing::get, Router};
use grocery_server::repository::{init_db, ItemRepository};

use super::{ApiError, ItemsApi, RestItemsApi};
use crate::models::Item;
use crate::store::{ListState, LoadStatus};
use crate::sync::ListSync;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_grocery_server() -> String {
    let conn = init_db(Path::new(":memory:")).expect("Failed to init test DB");
    serve(grocery_server::create_router(ItemRepository::new(conn))).await
}

#[tokio::test]
async fn test_crud_round_trip() {
    let api = RestItemsApi::new(spawn_grocery_server().await);

    assert!(api.list_items().await.unwrap().is_empty());

    api.create_item(&Item::new("1", "Milk")).await.unwrap();
    api.create_item(&Item::new("2", "Eggs")).await.unwrap();
    api.set_checked("2", true).await.unwrap();

    let items = api.list_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Item::new("1", "Milk"));
    assert!(items[1].checked);

    api.delete_item("1").await.unwrap();
    let items = api.list_items().await.unwrap();
    assert_eq!(items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
}

#[tokio::test]
async fn test_ids_are_path_encoded() {
    let api = RestItemsApi::new(spawn_grocery_server().await);

    api.create_item(&Item::new("a b/c", "Odd id")).await.unwrap();
    api.set_checked("a b/c", true).await.unwrap();

    let items = api.list_items().await.unwrap();
    assert_eq!(items[0].id, "a b/c");
    assert!(items[0].checked);

    api.delete_item("a b/c").await.unwrap();
    assert!(api.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base = spawn_grocery_server().await;
    let api = RestItemsApi::new(format!("{}/", base));

    assert_eq!(api.base_url(), base);
    assert!(api.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_2xx_carries_body() {
    let api = RestItemsApi::new(spawn_grocery_server().await);

    let err = api.delete_item("missing").await.unwrap_err();

    match err {
        ApiError::Status { status, detail } => {
            assert_eq!(status, 404);
            assert!(detail.contains("missing"), "unexpected detail: {}", detail);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let app = Router::new().route("/items", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let api = RestItemsApi::new(serve(app).await);

    let err = api.list_items().await.unwrap_err();

    assert_eq!(err.to_string(), "Response was not ok: HTTP 500");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = RestItemsApi::new(format!("http://{}", addr));

    assert!(matches!(api.list_items().await, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn test_synchronizer_against_server() {
    let api = RestItemsApi::new(spawn_grocery_server().await);
    let state = Rc::new(RefCell::new(ListState::new()));
    let sync = ListSync::new(api.clone(), state.clone());

    sync.load().await.unwrap();
    assert_eq!(state.borrow().status, LoadStatus::Ready);

    let eggs = sync.add("Eggs").await.unwrap();
    assert!(sync.toggle(&eggs.id).await.unwrap());

    let remote = api.list_items().await.unwrap();
    assert_eq!(remote, vec![Item { id: eggs.id.clone(), label: "Eggs".into(), checked: true }]);
    assert_eq!(state.borrow().items, remote);

    sync.remove(&eggs.id).await.unwrap();
    assert!(state.borrow().items.is_empty());
    assert!(api.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_failure_against_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = Rc::new(RefCell::new(ListState::new()));
    let sync = ListSync::new(RestItemsApi::new(format!("http://{}", addr)), state.clone());

    assert!(sync.load().await.is_err());
    assert_eq!(state.borrow().status, LoadStatus::Failed);
    assert!(state.borrow().error.as_deref().unwrap().starts_with("Network error"));
}
