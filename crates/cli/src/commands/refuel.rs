// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Refuel commands

use super::Context;
use crate::error::FtError;
use crate::output::{self, format_date, Units};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use ft_core::{parse_date, Clock, Refuel, RefuelId, SystemClock, ValidationError};
use serde::Serialize;
use std::fmt;

#[derive(Subcommand)]
pub enum RefuelCommand {
    /// Record a refuel
    Add {
        /// Liters put in the tank
        #[arg(long, allow_negative_numbers = true)]
        liters: f64,
        /// Total amount paid
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        /// Odometer reading at the pump
        #[arg(long)]
        odometer: u64,
        /// Date of the refuel (YYYY-MM-DD or RFC 3339), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List refuels, newest first
    List,
    /// Delete a refuel by id
    Delete {
        /// Refuel id as shown by `ft refuel list`
        id: u64,
    },
}

/// Refuel history as a table
#[derive(Serialize)]
#[serde(transparent)]
pub(crate) struct HistoryView {
    pub refuels: Vec<Refuel>,
    #[serde(skip)]
    pub units: Units,
}

impl fmt::Display for HistoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.refuels.is_empty() {
            writeln!(f, "No refuels recorded yet")?;
            return writeln!(
                f,
                "Add your first one with: ft refuel add --liters <L> --price <P> --odometer <N>"
            );
        }

        let currency = &self.units.currency;
        writeln!(
            f,
            "{:<6} {:<10} {:>8} {:>10} {:>10} {:>10}",
            "ID",
            "DATE",
            "LITERS",
            format!("{}/L", currency),
            self.units.distance.to_uppercase(),
            "PRICE"
        )?;
        for refuel in &self.refuels {
            let id = refuel.id.map(|id| id.to_string()).unwrap_or_default();
            writeln!(
                f,
                "{:<6} {:<10} {:>8.2} {:>10.2} {:>10} {:>10}",
                id,
                format_date(&refuel.date),
                refuel.liters,
                refuel.price_per_liter(),
                refuel.odometer,
                format!("{:.2}{}", refuel.price, currency)
            )?;
        }
        Ok(())
    }
}

pub async fn handle(command: RefuelCommand, ctx: &Context) -> anyhow::Result<()> {
    match command {
        RefuelCommand::Add {
            liters,
            price,
            odometer,
            date,
        } => add_refuel(ctx, liters, price, odometer, date.as_deref()).await,
        RefuelCommand::List => list_refuels(ctx).await,
        RefuelCommand::Delete { id } => delete_refuel(ctx, RefuelId(id)).await,
    }
}

/// The given date, or today when none was supplied
fn resolve_date(input: Option<&str>, clock: &impl Clock) -> Result<DateTime<Utc>, ValidationError> {
    match input {
        Some(date) => parse_date(date),
        None => Ok(clock.today()),
    }
}

async fn add_refuel(
    ctx: &Context,
    liters: f64,
    price: f64,
    odometer: u64,
    date: Option<&str>,
) -> anyhow::Result<()> {
    ctx.require_vehicle().await?;

    let date = resolve_date(date, &SystemClock).map_err(FtError::invalid_input)?;
    let refuel = Refuel::new(date, liters, price, odometer).map_err(FtError::invalid_input)?;

    let id = ctx
        .store
        .add_refuel(refuel)
        .await
        .map_err(FtError::from_store)?;

    output::print_done(
        &format!("Refuel {} recorded", id),
        &serde_json::json!({ "id": id }),
        ctx.format,
    );
    Ok(())
}

async fn list_refuels(ctx: &Context) -> anyhow::Result<()> {
    let refuels = ctx
        .store
        .get_all_refuels()
        .await
        .map_err(FtError::from_store)?;

    output::print(
        &HistoryView {
            refuels,
            units: ctx.units.clone(),
        },
        ctx.format,
    );
    Ok(())
}

async fn delete_refuel(ctx: &Context, id: RefuelId) -> anyhow::Result<()> {
    ctx.store
        .delete_refuel(id)
        .await
        .map_err(FtError::from_store)?;

    output::print_done(
        &format!("Refuel {} deleted", id),
        &serde_json::json!({ "id": id }),
        ctx.format,
    );
    Ok(())
}
