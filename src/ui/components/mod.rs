pub mod clipboard;
pub mod cost_lines;
pub mod field;
pub mod kpi_card;
pub mod toast;
