//! Simulated fleet tracking
//!
//! Demo telemetry for the dashboard map: an in-memory fleet whose positions
//! and statuses drift a little on every poll. State lives for the process
//! lifetime only and is wiped on restart; this is explicitly not a durable
//! store nor a real ingestion path.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::enums::VehicleStatus,
    models::tracking::{TrackingStatus, UnitSnapshot},
    models::vehicle::Vehicle,
};

/// Statuses a live unit can re-roll into. Terminal states are never entered
/// through the simulation, only through seeding.
const ACTIVE_STATUSES: [TrackingStatus; 4] = [
    TrackingStatus::Disponible,
    TrackingStatus::EnRuta,
    TrackingStatus::EnEmergencia,
    TrackingStatus::Regresando,
];

const INCIDENT_LABELS: [&str; 6] = [
    "Incendio estructural",
    "Incendio forestal",
    "Rescate vehicular",
    "Emergencia médica",
    "Fuga de gas",
    "Apoyo a otra compañía",
];

/// Maximum per-axis coordinate drift per refresh, in degrees
const MAX_DELTA: f64 = 0.001;

// Fire station used as the anchor for seeded units
const BASE_LAT: f64 = -33.4489;
const BASE_LON: f64 = -70.6693;

#[derive(Clone)]
pub struct TrackingService {
    fleet: Arc<RwLock<Vec<UnitSnapshot>>>,
}

impl TrackingService {
    pub fn new() -> Self {
        Self {
            fleet: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the tracked fleet with units derived from vehicle records.
    /// Falls back to a small demo fleet when no vehicles are available.
    pub fn seed_from_vehicles(&self, vehicles: &[Vehicle]) -> AppResult<()> {
        let now = Utc::now();
        let units: Vec<UnitSnapshot> = if vehicles.is_empty() {
            Self::demo_fleet()
        } else {
            vehicles
                .iter()
                .enumerate()
                .map(|(i, v)| UnitSnapshot {
                    vehicle_id: v.id,
                    plate: v.plate.clone(),
                    // spread units around the station so they don't stack
                    lat: BASE_LAT + (i as f64) * 0.002,
                    lon: BASE_LON - (i as f64) * 0.002,
                    status: match VehicleStatus::from(v.status) {
                        VehicleStatus::Operational => TrackingStatus::Disponible,
                        VehicleStatus::InMaintenance => TrackingStatus::EnMantenimiento,
                        VehicleStatus::OutOfService => TrackingStatus::FueraDeServicio,
                    },
                    incident: None,
                    updated_at: now,
                })
                .collect()
        };

        let mut fleet = self
            .fleet
            .write()
            .map_err(|_| AppError::Internal("Tracking state poisoned".to_string()))?;
        *fleet = units;
        Ok(())
    }

    /// Advance the simulation one tick and return a full snapshot copy.
    ///
    /// Units in a terminal status are left untouched: they keep their exact
    /// coordinates, status and incident. Every other unit re-rolls its
    /// status, drifts up to [`MAX_DELTA`] degrees per axis and, on entering
    /// EnEmergencia without an incident, gets a random incident label.
    pub fn refresh(&self) -> AppResult<Vec<UnitSnapshot>> {
        let mut fleet = self
            .fleet
            .write()
            .map_err(|_| AppError::Internal("Tracking state poisoned".to_string()))?;

        let mut rng = rand::thread_rng();
        let now = Utc::now();

        for unit in fleet.iter_mut() {
            if unit.status.is_terminal() {
                continue;
            }

            unit.status = ACTIVE_STATUSES[rng.gen_range(0..ACTIVE_STATUSES.len())];
            unit.lat += rng.gen_range(-MAX_DELTA..=MAX_DELTA);
            unit.lon += rng.gen_range(-MAX_DELTA..=MAX_DELTA);

            if unit.status == TrackingStatus::EnEmergencia && unit.incident.is_none() {
                unit.incident =
                    Some(INCIDENT_LABELS[rng.gen_range(0..INCIDENT_LABELS.len())].to_string());
            }

            unit.updated_at = now;
        }

        Ok(fleet.clone())
    }

    /// Current state without advancing the simulation
    pub fn snapshot(&self) -> AppResult<Vec<UnitSnapshot>> {
        let fleet = self
            .fleet
            .read()
            .map_err(|_| AppError::Internal("Tracking state poisoned".to_string()))?;
        Ok(fleet.clone())
    }

    fn demo_fleet() -> Vec<UnitSnapshot> {
        let now = Utc::now();
        let plates = ["B-1", "RX-2", "M-3", "H-4"];
        plates
            .iter()
            .enumerate()
            .map(|(i, plate)| UnitSnapshot {
                vehicle_id: -(i as i32) - 1,
                plate: (*plate).to_string(),
                lat: BASE_LAT + (i as f64) * 0.002,
                lon: BASE_LON - (i as f64) * 0.002,
                status: TrackingStatus::Disponible,
                incident: None,
                updated_at: now,
            })
            .collect()
    }
}

impl Default for TrackingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: i32, status: TrackingStatus) -> UnitSnapshot {
        UnitSnapshot {
            vehicle_id: id,
            plate: format!("B-{}", id),
            lat: BASE_LAT,
            lon: BASE_LON,
            status,
            incident: None,
            updated_at: Utc::now(),
        }
    }

    fn service_with(units: Vec<UnitSnapshot>) -> TrackingService {
        let service = TrackingService::new();
        *service.fleet.write().unwrap() = units;
        service
    }

    #[test]
    fn terminal_units_never_move() {
        let service = service_with(vec![
            unit(1, TrackingStatus::FueraDeServicio),
            unit(2, TrackingStatus::EnMantenimiento),
        ]);

        for _ in 0..20 {
            let snapshot = service.refresh().unwrap();
            for u in &snapshot {
                assert!(u.status.is_terminal());
                assert_eq!(u.lat, BASE_LAT);
                assert_eq!(u.lon, BASE_LON);
                assert!(u.incident.is_none());
            }
        }
    }

    #[test]
    fn active_units_drift_within_bounds() {
        let service = service_with(vec![unit(1, TrackingStatus::Disponible)]);

        let mut prev_lat = BASE_LAT;
        let mut prev_lon = BASE_LON;
        for _ in 0..50 {
            let snapshot = service.refresh().unwrap();
            let u = &snapshot[0];
            assert!((u.lat - prev_lat).abs() <= MAX_DELTA + f64::EPSILON);
            assert!((u.lon - prev_lon).abs() <= MAX_DELTA + f64::EPSILON);
            assert!(ACTIVE_STATUSES.contains(&u.status));
            prev_lat = u.lat;
            prev_lon = u.lon;
        }
    }

    #[test]
    fn incident_is_assigned_once_and_kept() {
        let service = service_with(vec![unit(1, TrackingStatus::Disponible)]);

        let mut assigned: Option<String> = None;
        // status re-rolls uniformly, EnEmergencia shows up quickly
        for _ in 0..200 {
            let snapshot = service.refresh().unwrap();
            let u = &snapshot[0];
            match (&assigned, &u.incident) {
                (None, Some(label)) => {
                    assert!(INCIDENT_LABELS.contains(&label.as_str()));
                    assigned = Some(label.clone());
                }
                (Some(expected), Some(label)) => assert_eq!(expected, label),
                (Some(_), None) => panic!("incident label was dropped"),
                (None, None) => {}
            }
        }
        assert!(assigned.is_some(), "unit never entered EnEmergencia in 200 ticks");
    }

    #[test]
    fn seeding_maps_vehicle_statuses() {
        let service = TrackingService::new();
        service.seed_from_vehicles(&[]).unwrap();
        // empty input falls back to the demo fleet
        assert!(!service.snapshot().unwrap().is_empty());
    }

    #[test]
    fn refresh_returns_full_copy() {
        let service = service_with(vec![
            unit(1, TrackingStatus::Disponible),
            unit(2, TrackingStatus::FueraDeServicio),
        ]);
        let mut snapshot = service.refresh().unwrap();
        assert_eq!(snapshot.len(), 2);
        // mutating the copy must not leak into the shared state
        snapshot[1].lat = 0.0;
        assert_eq!(service.snapshot().unwrap()[1].lat, BASE_LAT);
    }
}
