use actix_web::{
    App,
    http::StatusCode,
    test, web,
};
use serde_json::{Value, json};

use client_registry::domain::client::Client;
use client_registry::dto::error::ErrorResponse;
use client_registry::repository::InMemoryRepository;
use client_registry::routes::configure;

const ID: &str = "8001015009087";
const OTHER_ID: &str = "8001015009080";

fn client_json(first_name: &str, id_number: &str, mobile_number: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "B",
        "idNumber": id_number,
        "mobileNumber": mobile_number,
    })
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(App::new().app_data($store.clone()).configure(configure)).await
    };
}

#[actix_web::test]
async fn end_to_end_scenario() {
    let store = web::Data::new(InMemoryRepository::new());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(client_json("A", ID, "0000000001"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Client = test::read_body_json(resp).await;
    assert_eq!(created.first_name, "A");
    assert_eq!(created.physical_address, None);

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Client = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::put()
        .uri(&format!("/clients/{ID}"))
        .set_json(client_json("A", "7878", "0000000001"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.status, 400);
    assert_eq!(error.error, "Bad Request");
    assert_eq!(error.message, "Invalid South African ID Number");

    let req = test::TestRequest::get()
        .uri("/clients/search?mobileNumber=0000000001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Client = test::read_body_json(resp).await;
    assert_eq!(found, created);
}

#[actix_web::test]
async fn create_maps_duplicates_to_conflict() {
    let store = web::Data::new(InMemoryRepository::new());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(client_json("A", ID, "1"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(client_json("B", ID, "2"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.message, "Duplicate ID Number");
    assert_eq!(error.error, "Conflict");

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(client_json("B", OTHER_ID, "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.message, "Duplicate Mobile Number");

    assert_eq!(store.snapshot().len(), 1);
}

#[actix_web::test]
async fn create_rejects_blank_required_fields() {
    let store = web::Data::new(InMemoryRepository::new());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(json!({ "firstName": " ", "lastName": "B", "idNumber": ID }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert!(error.message.contains("must not be blank"));

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(json!({ "firstName": "A", "lastName": "B" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(store.snapshot().is_empty());
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let store = web::Data::new(InMemoryRepository::new());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.status, 400);
}

#[actix_web::test]
async fn unknown_client_is_not_found() {
    let store = web::Data::new(InMemoryRepository::new());
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.message, "Client not found");
    assert_eq!(error.error, "Not Found");

    // Lookup failure wins over the invalid replacement.
    let req = test::TestRequest::put()
        .uri(&format!("/clients/{ID}"))
        .set_json(client_json("A", "7878", "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_moves_client_to_new_id_number() {
    let store = web::Data::new(InMemoryRepository::with_clients(vec![Client::new(
        "A",
        "B",
        Some("1".to_string()),
        ID,
        None,
    )]));
    let app = app!(store);

    let replacement = json!({
        "firstName": "Vishal",
        "lastName": "Nagdev",
        "mobileNumber": "9284121650",
        "idNumber": OTHER_ID,
        "physicalAddress": "South Africa",
    });
    let req = test::TestRequest::put()
        .uri(&format!("/clients/{ID}"))
        .set_json(&replacement)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated, replacement);

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{OTHER_ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{ID}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn search_requires_a_criterion() {
    let store = web::Data::new(InMemoryRepository::new());
    let app = app!(store);

    let req = test::TestRequest::get().uri("/clients/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.message, "No search criteria provided");
}

#[actix_web::test]
async fn search_honours_first_name_priority() {
    let store = web::Data::new(InMemoryRepository::with_clients(vec![
        Client::new("Other", "B", Some("2".to_string()), OTHER_ID, None),
        Client::new("Vishal", "B", Some("1".to_string()), ID, None),
    ]));
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/clients/search?firstName=Vishal&idNumber={OTHER_ID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Client = test::read_body_json(resp).await;
    assert_eq!(found.id_number, ID);

    let req = test::TestRequest::get()
        .uri("/clients/search?firstName=Nobody&mobileNumber=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
