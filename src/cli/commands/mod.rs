//! CLI command modules

pub mod init;
pub mod new;
