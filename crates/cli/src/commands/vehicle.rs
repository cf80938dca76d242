// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vehicle commands

use super::Context;
use crate::error::FtError;
use crate::output::{self, OutputFormat};
use clap::Subcommand;
use ft_core::Vehicle;
use serde::Serialize;
use std::fmt;

#[derive(Subcommand)]
pub enum VehicleCommand {
    /// Set up the vehicle, replacing any existing profile
    Set {
        /// Model name, e.g. "Renault Clio"
        #[arg(long)]
        model: String,
        /// Tank capacity in liters
        #[arg(long)]
        capacity: f64,
    },
    /// Show the vehicle profile
    Show,
}

#[derive(Serialize)]
pub(crate) struct VehicleView {
    #[serde(flatten)]
    pub vehicle: Vehicle,
}

impl fmt::Display for VehicleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vehicle.model)?;
        writeln!(f, "  Tank: {} L", self.vehicle.capacity)
    }
}

pub async fn handle(command: VehicleCommand, ctx: &Context) -> anyhow::Result<()> {
    match command {
        VehicleCommand::Set { model, capacity } => set_vehicle(ctx, model, capacity).await,
        VehicleCommand::Show => show_vehicle(ctx).await,
    }
}

async fn set_vehicle(ctx: &Context, model: String, capacity: f64) -> anyhow::Result<()> {
    let mut vehicle = Vehicle::new(model, capacity).map_err(FtError::invalid_input)?;

    // Keep the existing key so the profile is updated in place
    let existing = ctx.store.get_vehicle().await.map_err(FtError::from_store)?;
    if let Some(id) = existing.and_then(|v| v.id) {
        vehicle = vehicle.with_id(id);
    }

    let id = ctx
        .store
        .save_vehicle(vehicle.clone())
        .await
        .map_err(FtError::from_store)?;
    let saved = vehicle.with_id(id);

    output::print_done(
        &format!("Vehicle saved: {} ({} L)", saved.model, saved.capacity),
        &saved,
        ctx.format,
    );
    Ok(())
}

async fn show_vehicle(ctx: &Context) -> anyhow::Result<()> {
    let vehicle = ctx.store.get_vehicle().await.map_err(FtError::from_store)?;

    match (vehicle, ctx.format) {
        (Some(vehicle), format) => output::print(&VehicleView { vehicle }, format),
        (None, OutputFormat::Json) => println!("null"),
        (None, OutputFormat::Text) => {
            println!("No vehicle configured");
            println!("Set one up with: ft vehicle set --model <MODEL> --capacity <LITERS>");
        }
    }
    Ok(())
}
