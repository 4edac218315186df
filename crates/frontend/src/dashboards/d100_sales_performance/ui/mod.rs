pub mod dashboard;
pub mod filters;
pub mod kpi_card;
pub mod loading_progress;
pub mod product_ranking_card;
pub mod ranking_card;
pub mod sales_evolution;
