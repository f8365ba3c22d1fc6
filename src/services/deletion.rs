//! Per-resource delete gating
//!
//! Delete confirmations can arrive twice from an impatient double-click.
//! At most one delete per (entity, id) may be in flight: a confirm that
//! arrives while one is already running is rejected instead of issuing a
//! second statement against the store.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct DeletionGate {
    in_flight: Arc<Mutex<HashSet<(&'static str, i32)>>>,
}

impl DeletionGate {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Claim the delete slot for one resource. The returned ticket releases
    /// the slot when dropped, on success and on failure alike.
    pub fn begin(&self, entity: &'static str, id: i32) -> AppResult<DeletionTicket> {
        let mut in_flight = self
            .in_flight
            .lock()
            .map_err(|_| AppError::Internal("Deletion gate poisoned".to_string()))?;

        if !in_flight.insert((entity, id)) {
            return Err(AppError::ConstraintViolation(format!(
                "Delete of {} {} already in progress",
                entity, id
            )));
        }

        Ok(DeletionTicket {
            gate: self.clone(),
            key: (entity, id),
        })
    }
}

impl Default for DeletionGate {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DeletionTicket {
    gate: DeletionGate,
    key: (&'static str, i32),
}

impl Drop for DeletionTicket {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.gate.in_flight.lock() {
            in_flight.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn second_confirm_is_rejected_while_busy() {
        let gate = DeletionGate::new();
        let ticket = gate.begin("vehicle", 1).unwrap();
        assert!(gate.begin("vehicle", 1).is_err());
        // other resources are unaffected
        assert!(gate.begin("vehicle", 2).is_ok());
        assert!(gate.begin("bodega", 1).is_ok());
        drop(ticket);
        assert!(gate.begin("vehicle", 1).is_ok());
    }

    #[test]
    fn ticket_releases_on_failure_path_too() {
        let gate = DeletionGate::new();
        let attempted = AtomicU32::new(0);

        let try_delete = || -> AppResult<()> {
            let _ticket = gate.begin("tarea", 9)?;
            attempted.fetch_add(1, Ordering::SeqCst);
            Err(AppError::ConstraintViolation("still referenced".to_string()))
        };

        assert!(try_delete().is_err());
        // the failed attempt released the slot, a retry issues a new delete
        assert!(try_delete().is_err());
        assert_eq!(attempted.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn double_confirm_issues_exactly_one_delete() {
        let gate = DeletionGate::new();
        let issued = AtomicU32::new(0);

        let confirm = |gate: &DeletionGate| -> AppResult<DeletionTicket> {
            let ticket = gate.begin("usuario", 3)?;
            issued.fetch_add(1, Ordering::SeqCst);
            Ok(ticket)
        };

        let first = confirm(&gate);
        let second = confirm(&gate);
        assert!(first.is_ok());
        assert!(second.is_err());
        assert_eq!(issued.load(Ordering::SeqCst), 1);
    }
}
