use contracts::import::{ImportProgress, RawSalesRow};
use leptos::prelude::*;

/// Shared sales-data context, provided once at the app root.
///
/// `raw_rows` is the current content of the externally-loaded spreadsheet;
/// `progress` is the loader's progress snapshot. The dashboard only reads
/// both; the loader collaborator is the single writer.
#[derive(Clone, Copy)]
pub struct SalesDataContext {
    pub raw_rows: RwSignal<Vec<RawSalesRow>>,
    pub progress: RwSignal<ImportProgress>,
}

impl SalesDataContext {
    pub fn new() -> Self {
        Self {
            raw_rows: RwSignal::new(Vec::new()),
            progress: RwSignal::new(ImportProgress::idle()),
        }
    }

    /// Ask the running loader to stop. Cooperative: the flag is honored
    /// between loader ticks, the loader itself decides when to wind down.
    pub fn request_cancel(&self) {
        self.progress.update(|p| {
            if p.active {
                p.cancelled = true;
            }
        });
    }
}

impl Default for SalesDataContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_sales_data() -> SalesDataContext {
    use_context::<SalesDataContext>().expect("SalesDataContext not found")
}
