//! Vehicles service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::vehicle::{
        CreateVehicle, CreateVehicleEquipment, UpdateVehicle, Vehicle, VehicleDetails,
        VehicleEquipment,
    },
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct VehiclesService {
    repository: Repository,
    gate: DeletionGate,
}

impl VehiclesService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.vehicles.list().await
    }

    /// Vehicle with its equipment and assigned inventory
    pub async fn get_details(&self, id: i32) -> AppResult<VehicleDetails> {
        let vehicle = self.repository.vehicles.get_by_id(id).await?;
        let equipment = self.repository.vehicles.list_equipment(id).await?;
        let inventory = self.repository.vehicles.list_assigned_inventory(id).await?;
        Ok(VehicleDetails {
            vehicle,
            equipment,
            inventory,
        })
    }

    pub async fn create(&self, data: &CreateVehicle) -> AppResult<Vehicle> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.vehicles.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateVehicle) -> AppResult<Vehicle> {
        self.repository.vehicles.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("vehicle", id)?;
        self.repository.vehicles.delete(id).await
    }

    pub async fn list_equipment(&self, vehicle_id: i32) -> AppResult<Vec<VehicleEquipment>> {
        self.repository.vehicles.get_by_id(vehicle_id).await?;
        self.repository.vehicles.list_equipment(vehicle_id).await
    }

    pub async fn add_equipment(
        &self,
        vehicle_id: i32,
        data: &CreateVehicleEquipment,
    ) -> AppResult<VehicleEquipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        // make sure the vehicle exists so the insert error is not the only signal
        self.repository.vehicles.get_by_id(vehicle_id).await?;
        self.repository.vehicles.add_equipment(vehicle_id, data).await
    }

    pub async fn remove_equipment(&self, equipment_id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("vehicle_equipment", equipment_id)?;
        self.repository.vehicles.remove_equipment(equipment_id).await
    }
}
