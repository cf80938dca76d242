// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard: vehicle, statistics and history in one view

use super::refuel::HistoryView;
use super::stats::StatsView;
use super::vehicle::VehicleView;
use super::Context;
use crate::error::FtError;
use crate::output;
use ft_core::Statistics;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct DashboardView {
    vehicle: VehicleView,
    statistics: StatsView,
    refuels: HistoryView,
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vehicle)?;
        writeln!(f)?;

        // Figures over an empty log are all zero and say nothing
        if !self.refuels.refuels.is_empty() {
            write!(f, "{}", self.statistics)?;
            writeln!(f)?;
        }

        writeln!(f, "History")?;
        write!(f, "{}", self.refuels)
    }
}

pub async fn handle(ctx: &Context) -> anyhow::Result<()> {
    let vehicle = ctx.require_vehicle().await?;
    let refuels = ctx
        .store
        .get_all_refuels()
        .await
        .map_err(FtError::from_store)?;

    let view = DashboardView {
        vehicle: VehicleView { vehicle },
        statistics: StatsView {
            stats: Statistics::from_refuels(&refuels),
            units: ctx.units.clone(),
        },
        refuels: HistoryView {
            refuels,
            units: ctx.units.clone(),
        },
    };
    output::print(&view, ctx.format);
    Ok(())
}
