// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statistics command

use super::Context;
use crate::error::FtError;
use crate::output::{self, Units};
use ft_core::Statistics;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(transparent)]
pub(crate) struct StatsView {
    pub stats: Statistics,
    #[serde(skip)]
    pub units: Units,
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Units { currency, distance } = &self.units;
        let s = &self.stats;
        writeln!(
            f,
            "Consumption:    {:.2} L/100{}",
            s.average_consumption, distance
        )?;
        writeln!(
            f,
            "Average price:  {:.2} {}/L",
            s.average_price_per_liter, currency
        )?;
        writeln!(f, "Total liters:   {:.1} L", s.total_liters)?;
        writeln!(f, "Total cost:     {:.2} {}", s.total_cost, currency)?;
        writeln!(f, "Distance:       {} {}", s.total_distance, distance)
    }
}

pub async fn handle(ctx: &Context) -> anyhow::Result<()> {
    let refuels = ctx
        .store
        .get_all_refuels()
        .await
        .map_err(FtError::from_store)?;

    output::print(
        &StatsView {
            stats: Statistics::from_refuels(&refuels),
            units: ctx.units.clone(),
        },
        ctx.format,
    );
    Ok(())
}
