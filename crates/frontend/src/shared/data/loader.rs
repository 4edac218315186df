//! Demo stand-in for the external spreadsheet loader.
//!
//! Streams the mock workbook into the shared context month by month so the
//! progress widget has real snapshots to display. The real loader lives
//! outside this codebase; only the [`ImportProgress`] shape it publishes is
//! a contract.

use super::context::SalesDataContext;
use super::mock;
use contracts::dashboard::MONTH_LABELS;
use contracts::import::{ImportProgress, RawSalesRow};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay per simulated month, in milliseconds.
const MONTH_TICK_MS: u32 = 350;

/// Start a simulated spreadsheet load. No-op while a load is running.
///
/// Cancellation is cooperative: the flag raised by
/// [`SalesDataContext::request_cancel`] is checked between ticks.
pub fn start_demo_import(ctx: SalesDataContext) {
    if ctx.progress.get_untracked().active {
        return;
    }

    ctx.raw_rows.set(Vec::new());
    ctx.progress
        .set(ImportProgress::start(MONTH_LABELS.len() as u32));

    spawn_local(async move {
        let records = mock::planilha_records();
        let chunk_size = records.len().div_ceil(MONTH_LABELS.len());

        for (i, label) in MONTH_LABELS.iter().enumerate() {
            if ctx.progress.get_untracked().cancelled {
                log::warn!("spreadsheet import cancelled after {} months", i);
                ctx.progress.update(|p| {
                    p.active = false;
                    p.current_month = None;
                });
                return;
            }

            ctx.progress
                .update(|p| p.current_month = Some(label.to_string()));
            TimeoutFuture::new(MONTH_TICK_MS).await;

            let start = (i * chunk_size).min(records.len());
            let end = ((i + 1) * chunk_size).min(records.len());
            let mut rows = Vec::new();
            let mut row_errors = Vec::new();
            for record in &records[start..end] {
                match RawSalesRow::from_record(record) {
                    Ok(row) => rows.push(row),
                    Err(e) => row_errors.push(e.to_string()),
                }
            }

            let loaded = rows.len() as u32;
            ctx.raw_rows.update(|all| all.extend(rows));
            ctx.progress.update(|p| {
                for message in row_errors {
                    p.add_error(message, Some(label.to_string()));
                }
                p.completed_months += 1;
                p.records_loaded += loaded;
            });
        }

        ctx.progress.update(|p| {
            p.active = false;
            p.current_month = None;
        });
    });
}
