//! REST surface of the catalog/order service.
//!
//! Covers the public read/checkout endpoints, admin CRUD with the updated
//! document echoed back, and bearer-token gating.

use reqwest::StatusCode;
use serde_json::{Value, json};

use copperleaf_integration_tests::spawn_api;

const ADMIN_TOKEN: &str = "kP2mX9rT4wQ8nL6vB3cJ";

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn checkout_body() -> Value {
    json!({
        "customerInfo": {
            "name": "Ada",
            "email": "ada@example.com",
            "address": "1 Analytical Way"
        },
        "cartItems": [{
            "id": 2,
            "title": "Organic Coffee Beans",
            "price": "24.99",
            "image": "",
            "quantity": 2
        }],
        "total": "49.98"
    })
}

#[tokio::test]
async fn test_seeded_catalog_reads() {
    let api = spawn_api(None).await;
    let client = client();

    let products: Vec<Value> = client
        .get(format!("{api}/api/products"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("products json");
    assert_eq!(products.len(), 8);
    assert_eq!(products[0]["price"], "299.99");

    let resp = client
        .get(format!("{api}/api/products/4"))
        .send()
        .await
        .expect("get product");
    assert_eq!(resp.status(), StatusCode::OK);
    let product: Value = resp.json().await.expect("product json");
    assert_eq!(product["title"], "Vintage Leather Wallet");

    let resp = client
        .get(format!("{api}/api/products/42"))
        .send()
        .await
        .expect("get missing product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = resp.json().await.expect("error json");
    assert_eq!(error["message"], "Product not found");
}

#[tokio::test]
async fn test_product_crud_lifecycle() {
    let api = spawn_api(None).await;
    let client = client();

    // Create: server assigns the next id after the seed.
    let resp = client
        .post(format!("{api}/api/products"))
        .json(&json!({
            "title": "Walnut Serving Board",
            "description": "Hand-finished walnut board for serving and prep.",
            "price": "54.99",
            "image": "https://example.com/board.jpg",
            "category": "Home & Garden",
            "rating": "4.7",
            "inStock": true
        }))
        .send()
        .await
        .expect("create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("created json");
    assert_eq!(created["id"], 9);

    // Update: the response is the whole updated document, not an ack.
    let resp = client
        .put(format!("{api}/api/products/9"))
        .json(&json!({ "price": "49.99", "inStock": false }))
        .send()
        .await
        .expect("update product");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("updated json");
    assert_eq!(updated["price"], "49.99");
    assert_eq!(updated["inStock"], false);
    assert_eq!(updated["title"], "Walnut Serving Board");

    // Delete, then the document is gone.
    let resp = client
        .delete(format!("{api}/api/products/9"))
        .send()
        .await
        .expect("delete product");
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = resp.json().await.expect("delete ack");
    assert_eq!(ack["success"], true);

    let resp = client
        .get(format!("{api}/api/products/9"))
        .send()
        .await
        .expect("get deleted product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_crud_lifecycle() {
    let api = spawn_api(None).await;
    let client = client();

    let resp = client
        .post(format!("{api}/api/categories"))
        .json(&json!({ "name": "Outdoors" }))
        .send()
        .await
        .expect("create category");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("created json");
    assert_eq!(created["id"], 5);

    let resp = client
        .put(format!("{api}/api/categories/5"))
        .json(&json!({ "name": "Outdoor Living" }))
        .send()
        .await
        .expect("update category");
    let updated: Value = resp.json().await.expect("updated json");
    assert_eq!(updated["name"], "Outdoor Living");

    let resp = client
        .delete(format!("{api}/api/categories/5"))
        .send()
        .await
        .expect("delete category");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_checkout_records_an_order() {
    let api = spawn_api(None).await;
    let client = client();

    let resp = client
        .post(format!("{api}/api/checkout"))
        .json(&checkout_body())
        .send()
        .await
        .expect("checkout");
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: Value = resp.json().await.expect("confirmation json");
    assert_eq!(confirmation["success"], true);
    assert_eq!(confirmation["message"], "Order placed successfully!");
    let order_id = confirmation["orderId"].as_str().expect("order id").to_string();

    // The order is queryable and starts out processing.
    let order: Value = client
        .get(format!("{api}/api/orders/{order_id}"))
        .send()
        .await
        .expect("get order")
        .json()
        .await
        .expect("order json");
    assert_eq!(order["status"], "processing");
    assert_eq!(order["total"], "49.98");
    assert_eq!(order["customerInfo"]["name"], "Ada");

    // Status patch echoes the updated order.
    let updated: Value = client
        .put(format!("{api}/api/orders/{order_id}"))
        .json(&json!({ "status": "shipped" }))
        .send()
        .await
        .expect("update order")
        .json()
        .await
        .expect("updated order json");
    assert_eq!(updated["status"], "shipped");
}

#[tokio::test]
async fn test_checkout_rejects_incomplete_submissions() {
    let api = spawn_api(None).await;
    let client = client();

    let mut body = checkout_body();
    body["customerInfo"]["email"] = json!("   ");
    let resp = client
        .post(format!("{api}/api/checkout"))
        .json(&body)
        .send()
        .await
        .expect("checkout with blank email");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut body = checkout_body();
    body["cartItems"] = json!([]);
    let resp = client
        .post(format!("{api}/api/checkout"))
        .json(&body)
        .send()
        .await
        .expect("checkout with empty cart");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_token_gates_mutations_but_not_reads() {
    let api = spawn_api(Some(ADMIN_TOKEN)).await;
    let client = client();

    // Reads and checkout stay public.
    let resp = client
        .get(format!("{api}/api/products"))
        .send()
        .await
        .expect("public read");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{api}/api/checkout"))
        .json(&checkout_body())
        .send()
        .await
        .expect("public checkout");
    assert_eq!(resp.status(), StatusCode::OK);

    // Mutations without the token are rejected.
    let resp = client
        .delete(format!("{api}/api/products/1"))
        .send()
        .await
        .expect("unauthenticated delete");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .delete(format!("{api}/api/products/1"))
        .bearer_auth("wrong-token-wrong-token")
        .send()
        .await
        .expect("wrong-token delete");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // With the token they go through.
    let resp = client
        .delete(format!("{api}/api/products/1"))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("authenticated delete");
    assert_eq!(resp.status(), StatusCode::OK);

    // Orders are admin-only reads.
    let resp = client
        .get(format!("{api}/api/orders"))
        .send()
        .await
        .expect("unauthenticated orders list");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
