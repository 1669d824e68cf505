//! Configuration management for pints-scaffold

pub mod config;
pub mod defaults;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::Config;
pub use defaults::ScaffoldDefaults;
