//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, backup, bodegas, checklists, health, inventory, maintenance, roles, tareas, tracking,
    usuarios, vehicles,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brigada API",
        version = "0.3.0",
        description = "Volunteer Fire Brigade Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Brigada Dev Team", email = "dev@brigada-voluntaria.cl")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        vehicles::list_vehicle_equipment,
        vehicles::add_vehicle_equipment,
        vehicles::remove_vehicle_equipment,
        // Inventory
        inventory::list_inventory,
        inventory::get_inventory_item,
        inventory::create_inventory_item,
        inventory::update_inventory_item,
        inventory::delete_inventory_item,
        // Maintenance
        maintenance::list_maintenance,
        maintenance::get_maintenance_task,
        maintenance::create_maintenance_task,
        maintenance::update_maintenance_task,
        maintenance::delete_maintenance_task,
        // Tareas
        tareas::list_tareas,
        tareas::list_active_tareas,
        tareas::get_tarea,
        tareas::create_tarea,
        tareas::update_tarea,
        tareas::delete_tarea,
        // Usuarios
        usuarios::list_usuarios,
        usuarios::get_usuario,
        usuarios::create_usuario,
        usuarios::update_usuario,
        usuarios::delete_usuario,
        // Bodegas
        bodegas::list_bodegas,
        bodegas::get_bodega,
        bodegas::create_bodega,
        bodegas::update_bodega,
        bodegas::delete_bodega,
        // Roles
        roles::list_roles,
        roles::get_role,
        roles::create_role,
        roles::update_role,
        roles::delete_role,
        // Checklists
        checklists::list_templates,
        checklists::get_template,
        checklists::create_template,
        checklists::delete_template,
        checklists::list_completions,
        checklists::get_completion,
        checklists::record_completion,
        // Tracking
        tracking::poll_fleet,
        tracking::seed_fleet,
        // Backup
        backup::run_backup,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::MeResponse,
            // Vehicles
            crate::models::vehicle::Vehicle,
            crate::models::vehicle::VehicleDetails,
            crate::models::vehicle::VehicleEquipment,
            crate::models::vehicle::CreateVehicle,
            crate::models::vehicle::UpdateVehicle,
            crate::models::vehicle::CreateVehicleEquipment,
            // Inventory
            crate::models::inventory::InventoryItem,
            crate::models::inventory::CreateInventoryItem,
            crate::models::inventory::UpdateInventoryItem,
            // Maintenance
            crate::models::maintenance::MaintenanceTask,
            crate::models::maintenance::CreateMaintenanceTask,
            crate::models::maintenance::UpdateMaintenanceTask,
            // Tareas
            crate::models::tarea::Tarea,
            crate::models::tarea::CreateTarea,
            crate::models::tarea::UpdateTarea,
            crate::models::enums::TareaStatus,
            // Usuarios
            crate::models::usuario::Usuario,
            crate::models::usuario::CreateUsuario,
            crate::models::usuario::UpdateUsuario,
            // Bodegas
            crate::models::bodega::Bodega,
            crate::models::bodega::CreateBodega,
            crate::models::bodega::UpdateBodega,
            // Roles
            crate::models::role::Role,
            crate::models::role::CreateRole,
            crate::models::role::UpdateRole,
            // Checklists
            crate::models::checklist::ChecklistTemplate,
            crate::models::checklist::ChecklistCompletion,
            crate::models::checklist::ChecklistItemState,
            crate::models::checklist::CreateChecklistTemplate,
            crate::models::checklist::CreateChecklistCompletion,
            // Tracking
            crate::models::tracking::UnitSnapshot,
            crate::models::tracking::TrackingStatus,
            // Backup
            crate::models::backup::BackupReport,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "vehicles", description = "Fleet vehicle management"),
        (name = "inventory", description = "Inventory management"),
        (name = "maintenance", description = "Equipment maintenance scheduling"),
        (name = "tareas", description = "Member task management"),
        (name = "usuarios", description = "Brigade member management"),
        (name = "bodegas", description = "Warehouse management"),
        (name = "roles", description = "Role and rights management"),
        (name = "checklists", description = "Revision checklists"),
        (name = "tracking", description = "Simulated fleet tracking"),
        (name = "backup", description = "Simulated backup job")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
