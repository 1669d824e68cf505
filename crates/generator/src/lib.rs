//! Plugin skeleton generation for PINTS SQL plugins
//!
//! Turns a plugin name and a list of staging columns into the six files of a
//! plugin folder: manifest, schema, materialize and export SQL, README and a
//! smoke test.

pub mod clauses;
pub mod config;
pub mod conventions;
pub mod docs;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod request;
pub mod result;
pub mod sql;
pub mod validation;

pub use conventions::DerivedConventions;
pub use error::{Result, ScaffoldError};
pub use generator::{PluginGenerator, RenderedFile, RenderedPlugin};
pub use manifest::Manifest;
pub use request::{PluginRequest, PluginRequestBuilder, StagingColumn};
pub use result::{GeneratedFile, GenerationResult};
