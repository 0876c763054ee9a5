pub mod bot;
pub mod config;
pub mod database;
pub mod utils;
