// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

use crate::operation::Operation;
use ft_core::{Refuel, RefuelId, Vehicle, VehicleId};
use std::collections::BTreeMap;

/// Materialized state built from WAL operations
#[derive(Debug, Default, Clone)]
pub struct MaterializedState {
    pub vehicle: Option<Vehicle>,
    /// Keyed by id; ids grow with every insert, so iteration order is
    /// insertion order
    pub refuels: BTreeMap<RefuelId, Refuel>,
    last_vehicle_id: u64,
    last_refuel_id: u64,
}

impl MaterializedState {
    /// Key for a vehicle saved without one; `None` once every key is taken
    pub fn next_vehicle_id(&self) -> Option<VehicleId> {
        self.last_vehicle_id.checked_add(1).map(VehicleId)
    }

    /// Key for the next refuel insert; `None` once every key is taken
    pub fn next_refuel_id(&self) -> Option<RefuelId> {
        self.last_refuel_id.checked_add(1).map(RefuelId)
    }

    /// All refuels, newest date first.
    ///
    /// The sort is stable over insertion order, so refuels sharing a date
    /// come back in the order they were added.
    pub fn refuels_by_date(&self) -> Vec<Refuel> {
        let mut refuels: Vec<Refuel> = self.refuels.values().cloned().collect();
        refuels.sort_by(|a, b| b.date.cmp(&a.date));
        refuels
    }

    /// Number of live records (vehicle plus refuels)
    pub fn record_count(&self) -> usize {
        self.refuels.len() + usize::from(self.vehicle.is_some())
    }

    /// Shortest operation list that rebuilds this state, key counters included
    pub fn to_operations(&self) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(self.record_count() + 1);
        ops.push(Operation::Counters {
            last_vehicle_id: self.last_vehicle_id,
            last_refuel_id: self.last_refuel_id,
        });

        if let Some(vehicle) = &self.vehicle {
            if let Some(id) = vehicle.id {
                ops.push(Operation::VehicleSave {
                    id,
                    model: vehicle.model.clone(),
                    capacity: vehicle.capacity,
                });
            }
        }

        for (id, refuel) in &self.refuels {
            ops.push(Operation::RefuelAdd {
                id: *id,
                date: refuel.date,
                liters: refuel.liters,
                price: refuel.price,
                odometer: refuel.odometer,
            });
        }

        ops
    }

    /// Apply an operation to update the state
    pub fn apply(&mut self, op: &Operation) {
        match op {
            // A save always leaves exactly one vehicle, whatever key it carries
            Operation::VehicleSave {
                id,
                model,
                capacity,
            } => {
                self.vehicle = Some(Vehicle {
                    id: Some(*id),
                    model: model.clone(),
                    capacity: *capacity,
                });
                self.last_vehicle_id = self.last_vehicle_id.max(id.0);
            }

            Operation::RefuelAdd {
                id,
                date,
                liters,
                price,
                odometer,
            } => {
                self.refuels.insert(
                    *id,
                    Refuel {
                        id: Some(*id),
                        date: *date,
                        liters: *liters,
                        price: *price,
                        odometer: *odometer,
                    },
                );
                self.last_refuel_id = self.last_refuel_id.max(id.0);
            }

            Operation::RefuelDelete { id } => {
                self.refuels.remove(id);
            }

            // Key counters survive a clear so ids are never reused
            Operation::ClearAll => {
                self.vehicle = None;
                self.refuels.clear();
            }

            Operation::Counters {
                last_vehicle_id,
                last_refuel_id,
            } => {
                self.last_vehicle_id = self.last_vehicle_id.max(*last_vehicle_id);
                self.last_refuel_id = self.last_refuel_id.max(*last_refuel_id);
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
