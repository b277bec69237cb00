pub mod calculator;
pub mod cleanup;
pub mod config;
pub mod generate;
