//! End-to-end test: a real server on a local port, driven over HTTP.
//!
//! Walks the customer flow (catalog, quote, place order) and then the back
//! office picking the order up and marking it ready.
//!
//!   cargo test --test e2e_test

use std::time::Duration;

use actix_web::web;
use boba_shop::{build_server, AppState, Settings};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const APP_HOST: &str = "127.0.0.1";
const APP_PORT: u16 = 18080;

/// Wait until `url` answers at all, retrying every `interval` for up to
/// `timeout` total. Panics if the server never comes up.
async fn wait_for_http(label: &str, url: &str, timeout: Duration, interval: Duration) {
    let client = Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if tokio::time::Instant::now() > deadline {
            panic!("{} did not become ready within {:?}", label, timeout);
        }
        // Any HTTP response (even 4xx) means the server is up.
        if client.get(url).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

#[actix_web::test]
async fn customer_order_reaches_the_back_office() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut settings = Settings::instant();
    settings.submit_delay = Duration::from_millis(20);
    let state = web::Data::new(AppState::new(&settings));

    let server = build_server(state, APP_HOST, APP_PORT).expect("bind test server");
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let base = format!("http://{APP_HOST}:{APP_PORT}");
    wait_for_http(
        "boba_shop",
        &format!("{base}/catalog"),
        Duration::from_secs(10),
        Duration::from_millis(100),
    )
    .await;

    let http = Client::new();

    // ── Customer ─────────────────────────────────────────────────────────────

    let new_form: Value = http
        .get(format!("{base}/orders/new?item=9"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let pickup = new_form["pickup_slots"][0].as_str().unwrap().to_string();
    assert_eq!(new_form["form"]["drink_id"], 9);

    let mut form = new_form["form"].clone();
    form["customer_name"] = json!("Kabir Rao");
    form["phone"] = json!("9876543299");
    form["pickup_time"] = json!(pickup.clone());
    form["topping_ids"] = json!([5]);
    form["quantity"] = json!(2);

    let quote: Value = http
        .post(format!("{base}/orders/quote"))
        .json(&form)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(quote["total"], 400);

    let resp = http
        .post(format!("{base}/orders"))
        .json(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let placed: Value = resp.json().await.unwrap();
    let order_id = placed["order_id"].as_u64().unwrap();
    assert_eq!(placed["confirmation"]["total"], 400);
    assert_eq!(
        placed["confirmation"]["message"],
        format!("Thank you, Kabir Rao! Your order will be ready for pickup at {pickup}.")
    );

    // ── Back office ──────────────────────────────────────────────────────────

    let login: Value = http
        .post(format!("{base}/admin/login"))
        .json(&json!({ "username": "admin", "password": "password" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let token = login["token"].as_str().unwrap().to_string();

    let orders: Value = http
        .get(format!("{base}/admin/orders?q=kabir"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders[0]["id"].as_u64(), Some(order_id));
    assert_eq!(orders[0]["items"], "Brown Sugar Boba Milk, Pudding x2");
    assert_eq!(orders[0]["status"], "Pending");

    let updated: Value = http
        .patch(format!("{base}/admin/orders/{order_id}/status"))
        .bearer_auth(&token)
        .json(&json!({ "status": "Ready" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["status"], "Ready");

    let resp = http
        .post(format!("{base}/admin/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    handle.stop(true).await;
}
