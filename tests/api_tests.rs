use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use rinventory::db::{self, DbPool};
use rinventory::models::{AssetColumn, AssetFields, NoteInput};
use rinventory::web::{AppState, router};
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    _dir: TempDir,
    db_path: PathBuf,
    app: Router,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("inventory.sqlite");
        let pool = DbPool::new(&db_path).expect("open db");
        db::init_db(&pool.conn).expect("init db");
        let app = router(AppState::new(db_path.clone()).expect("state"));
        Self {
            _dir: dir,
            db_path,
            app,
        }
    }

    fn pool(&self) -> DbPool {
        DbPool::new(&self.db_path).expect("open db")
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn html(&self, uri: &str) -> (StatusCode, String) {
        let (status, bytes) = self.send(Method::GET, uri, None).await;
        (status, String::from_utf8(bytes).unwrap())
    }
}

fn seed_asset(app: &TestApp, name: &str, rank: &str) -> i64 {
    let fields = AssetFields::new()
        .with(AssetColumn::NetName, name)
        .with(AssetColumn::Rank, rank);
    db::create_asset(&app.pool().conn, &fields).unwrap()
}

#[tokio::test]
async fn cell_update_changes_one_cell() {
    let app = TestApp::new();
    let id = seed_asset(&app, "srv1", "1");

    let (status, body) = app
        .json(
            Method::POST,
            "/api/cell",
            Some(json!({"id": id, "column": "net_name", "value": "srv1-new"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let asset = db::get_asset(&app.pool().conn, id).unwrap().unwrap();
    assert_eq!(asset.net_name(), "srv1-new");
    assert_eq!(asset.rank(), "1");
}

#[tokio::test]
async fn cell_update_with_unknown_column_is_rejected() {
    let app = TestApp::new();
    let id = seed_asset(&app, "srv1", "1");

    let (status, body) = app
        .json(
            Method::POST,
            "/api/cell",
            Some(json!({"id": id, "column": "DROP TABLE assets", "value": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("DROP TABLE assets"));

    let pool = app.pool();
    assert_eq!(db::count_assets(&pool.conn).unwrap(), 1);
    assert_eq!(db::get_asset(&pool.conn, id).unwrap().unwrap().net_name(), "srv1");
}

#[tokio::test]
async fn malformed_cell_body_gets_json_error() {
    let app = TestApp::new();
    let id = seed_asset(&app, "srv1", "1");

    let (status, body) = app
        .json(
            Method::POST,
            "/api/cell",
            Some(json!({"id": id.to_string(), "column": "status", "value": "up"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().starts_with("Bad request"));

    let asset = db::get_asset(&app.pool().conn, id).unwrap().unwrap();
    assert_eq!(asset.fields.get(AssetColumn::Status), "");
}

#[tokio::test]
async fn non_json_note_body_gets_json_error() {
    let app = TestApp::new();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/note")
        .header("content-type", "text/plain")
        .body(Body::from("date=2024-01-01"))
        .unwrap();
    let resp = app.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(db::count_notes(&app.pool().conn).unwrap(), 0);
}

#[tokio::test]
async fn cell_update_accepts_numeric_json_values() {
    let app = TestApp::new();
    let id = seed_asset(&app, "srv1", "1");

    let (status, _) = app
        .json(
            Method::POST,
            "/api/cell",
            Some(json!({"id": id, "column": "rank", "value": 5})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, asset) = app.json(Method::GET, &format!("/api/asset/{id}"), None).await;
    assert_eq!(asset["rank"], json!("5"));
}

#[tokio::test]
async fn create_then_read_asset_round_trips() {
    let app = TestApp::new();

    let (status, body) = app
        .json(
            Method::POST,
            "/api/asset",
            Some(json!({"net_name": "laptop7", "rank": "2", "vendor": "Apple", "h_px1": 2880})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let id = body["id"].as_i64().unwrap();

    let (status, asset) = app.json(Method::GET, &format!("/api/asset/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(asset["id"], json!(id));
    assert_eq!(asset["net_name"], json!("laptop7"));
    assert_eq!(asset["rank"], json!("2"));
    assert_eq!(asset["vendor"], json!("Apple"));
    assert_eq!(asset["h_px1"], json!("2880"));
    assert_eq!(asset["cpu"], json!(""));
}

#[tokio::test]
async fn empty_create_yields_blank_asset() {
    let app = TestApp::new();

    let (status, body) = app.json(Method::POST, "/api/asset", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let asset = db::get_asset(&app.pool().conn, id).unwrap().unwrap();
    assert!(asset.fields.iter().all(|(_, v)| v.is_empty()));
}

#[tokio::test]
async fn full_update_and_delete_asset() {
    let app = TestApp::new();
    let id = seed_asset(&app, "old", "1");

    let (status, body) = app
        .json(
            Method::PUT,
            &format!("/api/asset/{id}"),
            Some(json!({"id": id, "net_name": "new", "rank": "3", "os": "Debian"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let asset = db::get_asset(&app.pool().conn, id).unwrap().unwrap();
    assert_eq!(asset.net_name(), "new");
    assert_eq!(asset.fields.get(AssetColumn::Os), "Debian");

    let (status, _) = app.json(Method::DELETE, &format!("/api/asset/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(db::count_assets(&app.pool().conn).unwrap(), 0);

    // second delete of the same id is still a success
    let (status, body) = app.json(Method::DELETE, &format!("/api/asset/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn missing_asset_is_404() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::GET, "/api/asset/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn asset_listing_follows_rank() {
    let app = TestApp::new();
    seed_asset(&app, "b", "2");
    seed_asset(&app, "a", "1");

    let (status, body) = app.json(Method::GET, "/api/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["net_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[tokio::test]
async fn note_lifecycle() {
    let app = TestApp::new();

    let (status, body) = app
        .json(
            Method::POST,
            "/api/note",
            Some(json!({"date": "2024-03-01", "net_name": "srv1", "note": "replaced PSU"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let (status, _) = app
        .json(
            Method::PUT,
            &format!("/api/note/{id}"),
            Some(json!({"date": "2024-03-02", "note": "replaced PSU and fan"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, note) = app.json(Method::GET, &format!("/api/note/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["date"], json!("2024-03-02"));
    assert_eq!(note["net_name"], json!(""));
    assert_eq!(note["note"], json!("replaced PSU and fan"));

    let (status, _) = app.json(Method::DELETE, &format!("/api/note/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.json(Method::GET, &format!("/api/note/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notes_listing_is_newest_first() {
    let app = TestApp::new();
    {
        let pool = app.pool();
        db::create_note(&pool.conn, &NoteInput::new("2024-01-01", "", "older")).unwrap();
        db::create_note(&pool.conn, &NoteInput::new("2024-02-01", "", "newer")).unwrap();
    }

    let (_, body) = app.json(Method::GET, "/api/notes", None).await;
    let texts: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["note"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["newer", "older"]);
}

#[tokio::test]
async fn root_redirects_to_table() {
    let app = TestApp::new();
    let (status, _) = app.send(Method::GET, "/", None).await;
    assert!(status.is_redirection());
}

#[tokio::test]
async fn table_view_renders_assets_in_rank_order() {
    let app = TestApp::new();
    seed_asset(&app, "zeta-box", "2");
    seed_asset(&app, "alpha-box", "1");

    let (status, html) = app.html("/table").await;
    assert_eq!(status, StatusCode::OK);
    let alpha = html.find("alpha-box").expect("alpha rendered");
    let zeta = html.find("zeta-box").expect("zeta rendered");
    assert!(alpha < zeta);
    assert!(html.contains("Net Name"));
}

#[tokio::test]
async fn form_view_shows_first_asset_by_default() {
    let app = TestApp::new();
    seed_asset(&app, "second-box", "2");
    let first = seed_asset(&app, "first-box", "1");

    let (status, html) = app.html("/form").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!("data-id=\"{first}\"")));
    assert!(html.contains("value=\"first-box\""));
}

#[tokio::test]
async fn form_view_for_missing_id_still_renders() {
    let app = TestApp::new();
    let (status, html) = app.html("/form/77").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Asset #77 does not exist."));
}

#[tokio::test]
async fn notes_view_lists_notes() {
    let app = TestApp::new();
    db::create_note(&app.pool().conn, &NoteInput::new("2024-03-01", "srv1", "replaced PSU")).unwrap();

    let (status, html) = app.html("/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("replaced PSU"));
    assert!(html.contains("2024-03-01"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
