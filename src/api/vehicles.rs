//! Vehicle API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::vehicle::{
        CreateVehicle, CreateVehicleEquipment, UpdateVehicle, Vehicle, VehicleDetails,
        VehicleEquipment,
    },
};

use super::AuthenticatedUser;

/// List all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Vehicle list", body = Vec<Vehicle>)
    )
)]
pub async fn list_vehicles(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Vehicle>>> {
    claims.require_read_vehicles()?;
    let vehicles = state.services.vehicles.list().await?;
    Ok(Json(vehicles))
}

/// Get a vehicle with its equipment and assigned inventory
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = VehicleDetails),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<VehicleDetails>> {
    claims.require_read_vehicles()?;
    let details = state.services.vehicles.get_details(id).await?;
    Ok(Json(details))
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    request_body = CreateVehicle,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle)
    )
)]
pub async fn create_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    claims.require_write_vehicles()?;
    let vehicle = state.services.vehicles.create(&data).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Update a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = UpdateVehicle,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle)
    )
)]
pub async fn update_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    claims.require_write_vehicles()?;
    let vehicle = state.services.vehicles.update(id, &data).await?;
    Ok(Json(vehicle))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 409, description = "Vehicle still referenced")
    )
)]
pub async fn delete_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_vehicles()?;
    state.services.vehicles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List equipment assigned to a vehicle
#[utoipa::path(
    get,
    path = "/vehicles/{id}/equipment",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Equipment list", body = Vec<VehicleEquipment>)
    )
)]
pub async fn list_vehicle_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<VehicleEquipment>>> {
    claims.require_read_vehicles()?;
    let equipment = state.services.vehicles.list_equipment(id).await?;
    Ok(Json(equipment))
}

/// Assign an equipment row to a vehicle
#[utoipa::path(
    post,
    path = "/vehicles/{id}/equipment",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = CreateVehicleEquipment,
    responses(
        (status = 201, description = "Equipment assigned", body = VehicleEquipment)
    )
)]
pub async fn add_vehicle_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<CreateVehicleEquipment>,
) -> AppResult<(StatusCode, Json<VehicleEquipment>)> {
    claims.require_write_vehicles()?;
    let equipment = state.services.vehicles.add_equipment(id, &data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Remove an equipment row
#[utoipa::path(
    delete,
    path = "/vehicle-equipment/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment row ID")),
    responses(
        (status = 204, description = "Equipment removed")
    )
)]
pub async fn remove_vehicle_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_vehicles()?;
    state.services.vehicles.remove_equipment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
