pub mod cleanup;
pub mod config;
pub mod generate;
pub mod init;
