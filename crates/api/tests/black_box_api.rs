//! Black-box tests: real server on an ephemeral port, in-memory product service.

mod common;

use reqwest::StatusCode;
use serde_json::json;

use common::{admin_token, clerk_token, JWT_SECRET};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let config = ecom_product_api::config::ApiConfig::for_secret(JWT_SECRET);
        let app = ecom_product_api::app::build_app(
            &config,
            ecom_product_api::app::AppServices::in_memory(),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn anonymous_callers_can_browse_empty_catalog() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/product", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));

    let res = client
        .get(format!("{}/product/does-not-exist", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_lifecycle_add_get_update_list() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = admin_token();

    // Add
    let res = client
        .post(format!("{}/product", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": "client-id", "name": "Desk Lamp", "category": "Lighting", "price": 2499, "quantity": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()["location"].to_str().unwrap().to_string();
    let id: String = res.json().await.unwrap();
    assert_ne!(id, "client-id");
    assert_eq!(location, format!("/product/{id}"));

    // Get (anonymous) via Location
    let res = client
        .get(format!("{}{}", srv.base_url, location))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["id"], id.as_str());
    assert_eq!(product["name"], "Desk Lamp");
    assert_eq!(product["price"], 2499);
    assert_eq!(product["quantity"], 2);

    // Update quantity
    let res = client
        .post(format!("{}/product/product/{}/updatequantity/7", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let quantity: i32 = res.json().await.unwrap();
    assert_eq!(quantity, 7);

    // List reflects the update
    let res = client
        .get(format!("{}/product", srv.base_url))
        .send()
        .await
        .unwrap();
    let items: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 7);
}

#[tokio::test]
async fn service_faults_surface_as_bad_request_messages() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = admin_token();

    let res = client
        .post(format!("{}/product", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "product name is required");

    let res = client
        .post(format!("{}/product/product/missing/updatequantity/1", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "product 'missing' not found");
}

#[tokio::test]
async fn generate_description_for_admins_only() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/product/product/generateproductdescription", srv.base_url);
    let input = json!({ "name": "Mug", "quantity": 3 });

    let res = client.post(&url).json(&input).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(&url)
        .bearer_auth(clerk_token())
        .json(&input)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .post(&url)
        .bearer_auth(admin_token())
        .json(&input)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        product["description"],
        "Mug is a dependable everyday product. 3 in stock and ready to ship."
    );

    // Generation does not create a product.
    let items: Vec<serde_json::Value> = client
        .get(format!("{}/product", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(items.is_empty());
}
