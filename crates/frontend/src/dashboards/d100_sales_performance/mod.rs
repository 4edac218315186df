pub mod chart_data;
pub mod filter_state;
pub mod ui;
