// Contract tests for the installment planning endpoints

use actix_web::{test, App};
use quoteflow::modules;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_derive_plan_endpoint() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/installment-plans")
        .set_json(json!({
            "total": "100.00",
            "count": 3,
            "jobTitle": "Kitchen remodel",
            "startDate": "2024-01-31"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sourceTotal"], "100.00");
    assert_eq!(body["installments"].as_array().unwrap().len(), 3);
    assert_eq!(body["installments"][0]["amount"], "33.33");
    assert_eq!(body["installments"][1]["dueDate"], "2024-02-29");
    assert_eq!(
        body["installments"][2]["description"],
        "Installment 3 for Kitchen remodel"
    );
}

#[actix_web::test]
async fn test_derive_plan_rejects_zero_count() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/installment-plans")
        .set_json(json!({ "total": 100, "count": 0, "jobTitle": "Fence" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

/// Huge counts are rejected up front instead of allocating the plan
#[actix_web::test]
async fn test_derive_plan_rejects_count_above_maximum() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/installment-plans")
        .set_json(json!({ "total": 100, "count": 2305843009213693951u64, "jobTitle": "Fence" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("cannot exceed"));
}

/// Unparseable and mistyped bodies answer with the validation error envelope
#[actix_web::test]
async fn test_malformed_body_is_validation_error() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let truncated = test::TestRequest::post()
        .uri("/api/installment-plans")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"total": "100.00", "count": "#)
        .to_request();
    let mistyped = test::TestRequest::post()
        .uri("/api/installment-plans/validate")
        .set_json(json!({ "sourceTotal": "100.00", "installments": "none" }))
        .to_request();

    for req in [truncated, mistyped] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation error: Invalid JSON body"));
    }
}

#[actix_web::test]
async fn test_resize_and_validate_flow() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/installment-plans")
        .set_json(json!({
            "total": "100.00",
            "count": 4,
            "jobTitle": "Deck",
            "startDate": "2024-03-01"
        }))
        .to_request();
    let plan: Value = test::call_and_read_body_json(&app, req).await;

    // Shrink to 2: both rows recomputed to 50.00
    let req = test::TestRequest::post()
        .uri("/api/installment-plans/resize")
        .set_json(json!({ "plan": plan, "count": 2 }))
        .to_request();
    let shrunk: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(shrunk["installments"][0]["amount"], "50.00");
    assert_eq!(shrunk["installments"][1]["amount"], "50.00");

    let req = test::TestRequest::post()
        .uri("/api/installment-plans/validate")
        .set_json(&shrunk)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "reconciled": true, "expected": "100.00", "actual": "100.00" }));

    // Grow back to 4: old rows keep 50.00, the plan no longer reconciles
    let req = test::TestRequest::post()
        .uri("/api/installment-plans/resize")
        .set_json(json!({ "plan": shrunk, "count": 4 }))
        .to_request();
    let grown: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(grown["installments"][0]["amount"], "50.00");
    assert_eq!(grown["installments"][3]["amount"], "25.00");

    let req = test::TestRequest::post()
        .uri("/api/installment-plans/validate")
        .set_json(&grown)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["expected"], "100.00");
    assert_eq!(body["error"]["actual"], "150.00");
    assert_eq!(body["error"]["difference"], "-50.00");
}

#[actix_web::test]
async fn test_edit_endpoint() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/installment-plans")
        .set_json(json!({
            "total": "100.00",
            "count": 3,
            "jobTitle": "Fence",
            "startDate": "2024-05-01"
        }))
        .to_request();
    let plan: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/installment-plans/edit")
        .set_json(json!({ "plan": plan, "index": 2, "amount": "33.34", "dueDate": "2024-08-15" }))
        .to_request();
    let edited: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(edited["installments"][2]["amount"], "33.34");
    assert_eq!(edited["installments"][2]["dueDate"], "2024-08-15");

    let req = test::TestRequest::post()
        .uri("/api/installment-plans/edit")
        .set_json(json!({ "plan": edited, "index": 0, "amount": "-5" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
