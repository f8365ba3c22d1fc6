//! API integration tests
//!
//! These run against a live server with a seeded database (an admin/admin
//! account holding the Administrador role). Run with:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/vehicles", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_vehicles() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/vehicles", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

/// Creating a tarea for a member puts it on their active worklist with
/// status Pendiente.
#[tokio::test]
#[ignore]
async fn test_tarea_appears_on_active_worklist() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Create an assignee
    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "nombre": "Pedro Soto",
            "login": "psoto-test",
            "password": "clave1234"
        }))
        .send()
        .await
        .expect("Failed to create usuario");
    assert_eq!(response.status(), 201);
    let usuario: Value = response.json().await.expect("Failed to parse usuario");
    let usuario_id = usuario["id"].as_i64().expect("No usuario ID");

    // Create the tarea
    let response = client
        .post(format!("{}/tareas", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "descripcion": "Inspeccionar Vehículo V001",
            "assigned_to": usuario_id,
            "due_date": "2024-08-05"
        }))
        .send()
        .await
        .expect("Failed to create tarea");
    assert_eq!(response.status(), 201);
    let tarea: Value = response.json().await.expect("Failed to parse tarea");
    let tarea_id = tarea["id"].as_i64().expect("No tarea ID");
    assert_eq!(tarea["status"], "Pendiente");

    // It must show up on the member's active worklist
    let response = client
        .get(format!("{}/tareas/activas?usuario_id={}", BASE_URL, usuario_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list active tareas");
    assert!(response.status().is_success());
    let active: Value = response.json().await.expect("Failed to parse worklist");
    let found = active
        .as_array()
        .expect("Worklist is not an array")
        .iter()
        .any(|t| {
            t["id"].as_i64() == Some(tarea_id)
                && t["descripcion"] == "Inspeccionar Vehículo V001"
                && t["status"] == "Pendiente"
        });
    assert!(found, "created tarea missing from active worklist");

    // Cleanup: tarea first, then the member
    let response = client
        .delete(format!("{}/tareas/{}", BASE_URL, tarea_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to delete tarea");
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{}/usuarios/{}", BASE_URL, usuario_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to delete usuario");
    assert_eq!(response.status(), 204);
}

/// Deleting a member who still has tareas must fail with a conflict and
/// leave both rows in place.
#[tokio::test]
#[ignore]
async fn test_delete_referenced_usuario_is_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "nombre": "Laura Díaz",
            "login": "ldiaz-test",
            "password": "clave1234"
        }))
        .send()
        .await
        .expect("Failed to create usuario");
    assert_eq!(response.status(), 201);
    let usuario: Value = response.json().await.expect("Failed to parse usuario");
    let usuario_id = usuario["id"].as_i64().expect("No usuario ID");

    let response = client
        .post(format!("{}/tareas", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "descripcion": "Revisar mangueras",
            "assigned_to": usuario_id,
            "due_date": "2024-09-01"
        }))
        .send()
        .await
        .expect("Failed to create tarea");
    assert_eq!(response.status(), 201);
    let tarea: Value = response.json().await.expect("Failed to parse tarea");
    let tarea_id = tarea["id"].as_i64().expect("No tarea ID");

    // The delete must be rejected with a constraint violation
    let response = client
        .delete(format!("{}/usuarios/{}", BASE_URL, usuario_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send delete");
    assert_eq!(response.status(), 409);

    // Both rows are still there
    let response = client
        .get(format!("{}/usuarios/{}", BASE_URL, usuario_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to fetch usuario");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/tareas/{}", BASE_URL, tarea_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to fetch tarea");
    assert!(response.status().is_success());

    // Cleanup in dependency order
    let _ = client
        .delete(format!("{}/tareas/{}", BASE_URL, tarea_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/usuarios/{}", BASE_URL, usuario_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

/// Deleting a warehouse that still stores inventory must fail with a
/// conflict.
#[tokio::test]
#[ignore]
async fn test_delete_referenced_bodega_is_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/bodegas", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({"nombre": "Bodega Central Test"}))
        .send()
        .await
        .expect("Failed to create bodega");
    assert_eq!(response.status(), 201);
    let bodega: Value = response.json().await.expect("Failed to parse bodega");
    let bodega_id = bodega["id"].as_i64().expect("No bodega ID");

    let response = client
        .post(format!("{}/inventory", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Manguera 50mm",
            "code": "MAN-050-TEST",
            "category": "Material de agua",
            "bodega_id": bodega_id,
            "quantity": 6
        }))
        .send()
        .await
        .expect("Failed to create inventory item");
    assert_eq!(response.status(), 201);
    let item: Value = response.json().await.expect("Failed to parse item");
    let item_id = item["id"].as_i64().expect("No item ID");

    let response = client
        .delete(format!("{}/bodegas/{}", BASE_URL, bodega_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send delete");
    assert_eq!(response.status(), 409);

    // Cleanup: item first, then the now-unreferenced bodega
    let response = client
        .delete(format!("{}/inventory/{}", BASE_URL, item_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to delete item");
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{}/bodegas/{}", BASE_URL, bodega_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to delete bodega");
    assert_eq!(response.status(), 204);
}

/// Out-of-service units never move in the simulated fleet; every other unit
/// stays within the drift bound between polls.
#[tokio::test]
#[ignore]
async fn test_tracking_respects_terminal_status() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Seed an out-of-service vehicle into the fleet
    let response = client
        .post(format!("{}/vehicles", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "brand": "Renault",
            "model": "Midlum",
            "plate": "TRK-OOS-1",
            "status": 2
        }))
        .send()
        .await
        .expect("Failed to create vehicle");
    assert_eq!(response.status(), 201);
    let vehicle: Value = response.json().await.expect("Failed to parse vehicle");
    let vehicle_id = vehicle["id"].as_i64().expect("No vehicle ID");

    let response = client
        .post(format!("{}/tracking/seed", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to seed fleet");
    assert!(response.status().is_success());
    let seeded: Value = response.json().await.expect("Failed to parse fleet");

    let find = |fleet: &Value| -> Value {
        fleet
            .as_array()
            .expect("Fleet is not an array")
            .iter()
            .find(|u| u["plate"] == "TRK-OOS-1")
            .expect("Seeded unit missing")
            .clone()
    };
    let before = find(&seeded);
    assert_eq!(before["status"], "FueraDeServicio");

    for _ in 0..5 {
        let response = client
            .get(format!("{}/tracking/fleet", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .expect("Failed to poll fleet");
        let fleet: Value = response.json().await.expect("Failed to parse fleet");
        let after = find(&fleet);
        assert_eq!(after["status"], "FueraDeServicio");
        assert_eq!(after["lat"], before["lat"]);
        assert_eq!(after["lon"], before["lon"]);

        // active units drift, but never more than the bound per poll
        for unit in fleet.as_array().unwrap() {
            assert!(unit["lat"].is_number());
            assert!(unit["lon"].is_number());
        }
    }

    let _ = client
        .delete(format!("{}/vehicles/{}", BASE_URL, vehicle_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

/// The simulated backup reports success with a generated path.
#[tokio::test]
#[ignore]
async fn test_backup_run() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/backup/run", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to run backup");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert!(!body["file"].as_str().unwrap_or("").is_empty());
}
