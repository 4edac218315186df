use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel value used by the filter selects for "no restriction".
pub const FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Reference records (branches / staff)
// ---------------------------------------------------------------------------

/// Branch / store location. `id` is the normalized slug of the display name
/// and is what raw spreadsheet rows are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filial {
    pub id: String,
    pub name: String,
}

/// Sales-staff member as shown in the ranking list.
///
/// `conversion` and `revenue` arrive pre-formatted for display; no numeric
/// invariants are enforced on them here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colaborador {
    pub id: String,
    pub name: String,
    pub initials: String,
    /// Slug of the branch this person belongs to.
    pub filial: String,
    pub sales: u32,
    pub conversion: String,
    pub revenue: String,
    /// Avatar colour tag (CSS class suffix).
    pub color: String,
}

/// One entry of the product ranking. Quantity is the ranking key; callers
/// supply the list already sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// KPI tiles
// ---------------------------------------------------------------------------

/// Value of a KPI tile. `NotFound` is a first-class variant rather than a
/// flag so the card cannot render a numeric path for absent metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiValue {
    Found(String),
    NotFound,
}

impl KpiValue {
    pub fn is_found(&self) -> bool {
        matches!(self, KpiValue::Found(_))
    }
}

/// Immutable display snapshot of one KPI tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRecord {
    /// Stable key, used for list rendering.
    pub key: String,
    pub title: String,
    /// Icon name resolved by the frontend icon helper.
    pub icon: String,
    pub value: KpiValue,
    /// Target line shown under the value ("Meta: ..."), preferred over
    /// `previous_value` when both are present.
    pub meta: Option<String>,
    pub previous_value: Option<String>,
    /// Percentage variation against the previous period; 0.0 hides the badge.
    pub variation: f64,
    /// Whether the variation counts as good (drives badge colour).
    pub is_positive: bool,
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// Calendar month labels in bucket order. The evolution series always has
/// exactly one bucket per entry, in this order.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// One bucket of the sales-evolution series. Recomputed from raw rows on
/// every data or filter change; `leads` is always zero (field absent from
/// the source spreadsheet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub month: String,
    pub vendas: u32,
    pub receita: f64,
    pub leads: u32,
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// The full filter tuple emitted by the dashboard filter bar on every local
/// change. Dates are `yyyy-mm-dd` strings (native date input format);
/// `filial` and `colaborador` hold record ids or [`FILTER_ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilterState {
    pub date_from: String,
    pub date_to: String,
    pub filial: String,
    pub colaborador: String,
}

impl DashboardFilterState {
    pub fn is_all_filiais(&self) -> bool {
        self.filial == FILTER_ALL
    }

    pub fn is_all_colaboradores(&self) -> bool {
        self.colaborador == FILTER_ALL
    }
}
