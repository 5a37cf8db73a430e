use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{TestApp, legacy_db};

fn soto(user_id: i32) -> Value {
    json!({
        "title": "Soto ayam",
        "description": "Soto ayam kuning khas Jawa",
        "ingredients": "ayam,kunyit,serai,daun jeruk",
        "steps": "1. Rebus ayam\n2. Tumis bumbu\n3. Campur",
        "imagePath": null,
        "userId": user_id,
    })
}

async fn register(app: &TestApp, username: &str, password: &str) -> i32 {
    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Registrasi berhasil");
    body["userId"].as_i64().unwrap() as i32
}

async fn recipes_of(app: &TestApp, user_id: i32) -> Vec<Value> {
    let response = app
        .server
        .get("/api/recipes")
        .add_query_param("userId", user_id)
        .await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

// ── Accounts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_then_duplicate_then_login() {
    let app = TestApp::spawn().await;

    let id = register(&app, "chef1", "pw").await;
    assert!(id > 0);

    let duplicate = app
        .server
        .post("/api/register")
        .json(&json!({ "username": "chef1", "password": "pw" }))
        .await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.json::<Value>()["message"], "Username sudah ada");

    let login = app
        .server
        .post("/api/login")
        .json(&json!({ "username": "chef1", "password": "pw" }))
        .await;
    login.assert_status_ok();
    let body: Value = login.json();
    assert_eq!(body["message"], "Login berhasil");
    assert_eq!(body["userId"], id);

    let wrong = app
        .server
        .post("/api/login")
        .json(&json!({ "username": "chef1", "password": "nope" }))
        .await;
    wrong.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong.json::<Value>()["message"],
        "Username atau password salah"
    );
}

#[tokio::test]
async fn seeded_admin_can_log_in() {
    let app = TestApp::spawn().await;
    let login = app
        .server
        .post("/api/login")
        .json(&json!({ "username": "admin", "password": "admin" }))
        .await;
    login.assert_status_ok();
    assert_eq!(login.json::<Value>()["userId"], app.admin_id);
}

#[tokio::test]
async fn register_without_password_is_rejected() {
    let app = TestApp::spawn().await;
    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "username": "chef2" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_FIELD");

    let login = app
        .server
        .post("/api/login")
        .json(&json!({ "username": "chef2", "password": "" }))
        .await;
    login.assert_status(StatusCode::UNAUTHORIZED);
}

// ── Recipes ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_owns_the_eight_seeded_recipes() {
    let app = TestApp::spawn().await;
    let recipes = recipes_of(&app, app.admin_id).await;
    assert_eq!(recipes.len(), 8);
    assert_eq!(recipes[0]["title"], "Mie goreng jawa");
    assert_eq!(recipes[7]["title"], "Cilok bumbu kacang");
    for recipe in &recipes {
        assert_eq!(recipe["userId"], app.admin_id);
        assert!(recipe["origin"].is_null());
        assert!(recipe["imagePath"].is_null());
    }
}

#[tokio::test]
async fn created_recipe_is_listed_only_for_its_owner() {
    let app = TestApp::spawn().await;
    let chef = register(&app, "chef1", "pw").await;

    let created = app.server.post("/api/recipes").json(&soto(chef)).await;
    created.assert_status_ok();
    let body: Value = created.json();
    assert_eq!(body["message"], "Resep berhasil ditambahkan");
    let recipe_id = body["id"].as_i64().unwrap();

    let mine = recipes_of(&app, chef).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["id"], recipe_id);
    assert_eq!(mine[0]["title"], "Soto ayam");

    let admins = recipes_of(&app, app.admin_id).await;
    assert!(admins.iter().all(|r| r["id"] != recipe_id));
    assert!(recipes_of(&app, chef + 100).await.is_empty());
}

#[tokio::test]
async fn both_global_listings_include_seeded_and_created_rows() {
    let app = TestApp::spawn().await;
    let chef = register(&app, "chef1", "pw").await;
    app.server
        .post("/api/recipes")
        .json(&soto(chef))
        .await
        .assert_status_ok();

    for path in ["/api/all-recipes", "/recipes"] {
        let response = app.server.get(path).await;
        response.assert_status_ok();
        let all = response.json::<Vec<Value>>();
        assert_eq!(all.len(), 9, "{path}");
        assert!(all.iter().any(|r| r["title"] == "Soto ayam"), "{path}");
        assert!(all.iter().any(|r| r["title"] == "Tempe bacem"), "{path}");
    }
}

#[tokio::test]
async fn update_overwrites_fields_but_not_id_or_owner() {
    let app = TestApp::spawn().await;
    let chef = register(&app, "chef1", "pw").await;
    let created: Value = app.server.post("/api/recipes").json(&soto(chef)).await.json();
    let recipe_id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/recipes/{recipe_id}"))
        .json(&json!({
            "title": "Soto betawi",
            "description": "Soto santan",
            "ingredients": "daging,santan,kentang",
            "steps": "1. Rebus daging\n2. Masukkan santan",
            "imagePath": "/storage/soto.jpg",
            "userId": app.admin_id,
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Resep berhasil diperbarui"
    );

    let mine = recipes_of(&app, chef).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["id"], recipe_id);
    assert_eq!(mine[0]["userId"], chef);
    assert_eq!(mine[0]["title"], "Soto betawi");
    assert_eq!(mine[0]["ingredients"], "daging,santan,kentang");
    assert_eq!(mine[0]["imagePath"], "/storage/soto.jpg");
}

#[tokio::test]
async fn delete_removes_recipe_and_ignores_unknown_ids() {
    let app = TestApp::spawn().await;
    let chef = register(&app, "chef1", "pw").await;
    let created: Value = app.server.post("/api/recipes").json(&soto(chef)).await.json();
    let recipe_id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .delete(&format!("/api/recipes/{recipe_id}"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Resep berhasil dihapus");
    assert!(recipes_of(&app, chef).await.is_empty());

    let again = app
        .server
        .delete(&format!("/api/recipes/{recipe_id}"))
        .await;
    again.assert_status_ok();
}

#[tokio::test]
async fn create_without_title_is_rejected_and_stores_nothing() {
    let app = TestApp::spawn().await;
    let chef = register(&app, "chef1", "pw").await;
    let mut body = soto(chef);
    body.as_object_mut().unwrap().remove("title");

    let response = app.server.post("/api/recipes").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "title wajib diisi");
    assert!(recipes_of(&app, chef).await.is_empty());
}

#[tokio::test]
async fn listing_without_user_id_is_rejected() {
    let app = TestApp::spawn().await;
    let response = app.server.get("/api/recipes").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "MISSING_FIELD");
}

#[tokio::test]
async fn user_id_sent_as_string_is_accepted() {
    let app = TestApp::spawn().await;
    let chef = register(&app, "chef1", "pw").await;
    let mut body = soto(chef);
    body["userId"] = json!(chef.to_string());

    let created = app.server.post("/api/recipes").json(&body).await;
    created.assert_status_ok();
    assert_eq!(recipes_of(&app, chef).await.len(), 1);
}

#[tokio::test]
async fn recipes_can_be_created_on_a_legacy_database_file() {
    let app = TestApp::serve(legacy_db().await).await;
    let login = app
        .server
        .post("/api/login")
        .json(&json!({ "username": "chef1", "password": "pw" }))
        .await;
    login.assert_status_ok();
    let chef = login.json::<Value>()["userId"].as_i64().unwrap() as i32;

    let created = app.server.post("/api/recipes").json(&soto(chef)).await;
    created.assert_status_ok();

    let mine = recipes_of(&app, chef).await;
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0]["origin"], "Jawa Timur");
    assert!(mine[1]["origin"].is_null());
}

// ── Malformed requests ───────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_body_gets_error_json() {
    let app = TestApp::spawn().await;
    let response = app
        .server
        .post("/api/register")
        .content_type("application/json")
        .bytes("{\"username\": ".into())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_REQUEST");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_numeric_ids_get_error_json() {
    let app = TestApp::spawn().await;

    let mut body = soto(app.admin_id);
    body["userId"] = json!("chef");
    let create = app.server.post("/api/recipes").json(&body).await;
    create.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(create.json::<Value>()["kind"], "INVALID_REQUEST");

    let list = app
        .server
        .get("/api/recipes")
        .add_query_param("userId", "chef")
        .await;
    list.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(list.json::<Value>()["kind"], "INVALID_REQUEST");

    let delete = app.server.delete("/api/recipes/abc").await;
    delete.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(delete.json::<Value>()["kind"], "INVALID_REQUEST");
}

// ── Ambient ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_endpoints_respond() {
    let app = TestApp::spawn().await;
    app.server.get("/healthz").await.assert_status_ok();
    app.server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;
    let response = app.server.get("/api/all-recipes").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn store_failure_uses_endpoint_message_and_legacy_shape() {
    use sea_orm::{ConnectionTrait, Statement};

    let app = TestApp::spawn().await;
    app.db
        .execute(Statement::from_string(
            app.db.get_database_backend(),
            "DROP TABLE recipes",
        ))
        .await
        .unwrap();

    let modern = app.server.get("/api/all-recipes").await;
    modern.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = modern.json();
    assert_eq!(body["message"], "Gagal mengambil semua resep");
    assert!(body.get("error").is_none());

    let legacy = app.server.get("/recipes").await;
    legacy.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = legacy.json();
    assert!(
        body["error"].as_str().unwrap().contains("no such table"),
        "{body}"
    );
    assert!(body.get("message").is_none());
}
