pub mod chart_view;
pub mod fields;
pub mod kpi_card;
pub mod summary_panel;
pub mod toast;
