// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data maintenance: reset and log compaction

use super::Context;
use crate::error::FtError;
use crate::output;

/// Remove the vehicle and every refuel
pub async fn reset(ctx: &Context, confirmed: bool) -> anyhow::Result<()> {
    if !confirmed {
        return Err(FtError::confirmation_required("clear all data").into());
    }

    ctx.store
        .clear_all_data()
        .await
        .map_err(FtError::from_store)?;

    output::print_done(
        "All data cleared",
        &serde_json::json!({ "cleared": true }),
        ctx.format,
    );
    Ok(())
}

/// Rewrite the log down to the live records
pub async fn compact(ctx: &Context) -> anyhow::Result<()> {
    let result = ctx.store.compact().await.map_err(FtError::from_store)?;

    output::print_done(
        &format!(
            "Compacted log: {} -> {} entries",
            result.entries_before, result.entries_after
        ),
        &serde_json::json!({
            "entries_before": result.entries_before,
            "entries_after": result.entries_after,
        }),
        ctx.format,
    );
    Ok(())
}
