pub mod commands;
pub mod csv_input;
pub mod report;
pub mod utils;
