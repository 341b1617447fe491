mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_manager_registers_condominium() {
    let app = TestApp::new().await;
    let manager = app.manager("sindico@example.com").await;

    let (status, condo) = app.request("POST", "/api/v1/condominiums", Some(&manager.id), Some(json!({
        "name": "Residencial Aurora",
        "address": "Rua das Flores, 100",
        "timezone": "America/Sao_Paulo"
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(condo["timezone"], "America/Sao_Paulo");

    let (status, _) = app.request("POST", "/api/v1/condominiums", Some(&manager.id), Some(json!({
        "name": "Edificio Solar", "address": "Av. Central, 5", "timezone": "Mars/Olympus"
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Falls back to the configured default zone.
    let (_, defaulted) = app.request("POST", "/api/v1/condominiums", Some(&manager.id), Some(json!({
        "name": "Edificio Solar", "address": "Av. Central, 5"
    }))).await;
    assert_eq!(defaulted["timezone"], "UTC");

    let (status, listed) = app.request("GET", "/api/v1/condominiums", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let uri = format!("/api/v1/condominiums/{}", condo["id"].as_str().unwrap());
    let (status, fetched) = app.request("GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Residencial Aurora");
}

#[tokio::test]
async fn test_residents_cannot_register_condominiums() {
    let app = TestApp::new().await;
    let condo = app.condominium("Residencial Aurora").await;
    let resident = app.resident(&condo.id, "morador@example.com").await;

    let (status, _) = app.request("POST", "/api/v1/condominiums", Some(&resident.id), Some(json!({
        "name": "Outro", "address": "Rua 2"
    }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_registration_approval_flow() {
    let app = TestApp::new().await;
    let condo = app.condominium("Residencial Aurora").await;
    let manager = app.manager("sindico@example.com").await;

    let (status, pending) = app.request("POST", "/api/v1/residents", None, Some(json!({
        "condominium_id": condo.id,
        "full_name": "Joana Silva",
        "email": "Joana@Example.com",
        "apartment": "304"
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending["status"], "pending");
    assert_eq!(pending["role"], "resident");
    assert_eq!(pending["email"], "joana@example.com");
    let resident_id = pending["id"].as_str().unwrap().to_string();

    // Pending residents cannot act yet.
    let (status, _) = app.request("GET", "/api/v1/spots", Some(&resident_id), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.request("POST", "/api/v1/residents", None, Some(json!({
        "condominium_id": condo.id, "full_name": "Joana Again", "email": "joana@example.com"
    }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, queue) = app.request("GET", "/api/v1/residents/pending", Some(&manager.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue.as_array().unwrap().len(), 1);

    let approve_uri = format!("/api/v1/residents/{}/approve", resident_id);
    let (status, approved) = app.request("POST", &approve_uri, Some(&manager.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    let (status, _) = app.request("POST", &approve_uri, Some(&manager.id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.request("GET", "/api/v1/spots", Some(&resident_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, queue) = app.request("GET", "/api/v1/residents/pending", Some(&manager.id), None).await;
    assert!(queue.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejection_and_unknown_condominium() {
    let app = TestApp::new().await;
    let condo = app.condominium("Residencial Aurora").await;
    let manager = app.manager("sindico@example.com").await;
    let resident = app.resident(&condo.id, "morador@example.com").await;

    let (status, _) = app.request("POST", "/api/v1/residents", None, Some(json!({
        "condominium_id": "missing", "full_name": "Ninguem", "email": "n@example.com"
    }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, pending) = app.request("POST", "/api/v1/residents", None, Some(json!({
        "condominium_id": condo.id, "full_name": "Carlos", "email": "carlos@example.com"
    }))).await;
    let reject_uri = format!("/api/v1/residents/{}/reject", pending["id"].as_str().unwrap());

    let (status, _) = app.request("POST", &reject_uri, Some(&resident.id), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, rejected) = app.request("POST", &reject_uri, Some(&manager.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "rejected");

    let (status, _) = app.request("GET", "/api/v1/spots", Some(rejected["id"].as_str().unwrap()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.request("POST", "/api/v1/residents/missing/approve", Some(&manager.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
