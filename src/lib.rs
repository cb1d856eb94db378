//! Data-access layer for a sequencing-run metadata registry.
//!
//! Records instruments, sequencing runs, projects, sequenced libraries and
//! fastq output files, and exposes create/read/delete operations over a
//! Diesel-managed SQLite schema. Each operation takes a live connection and
//! plain input structs; referenced parent entities are resolved by their
//! external identifiers before anything is written. "Not found" is signaled
//! by `Ok(None)` or an empty result, never by an error.

pub mod config;
pub mod db;
pub mod error;
pub mod fastq;
pub mod instrument;
pub mod library;
pub mod models;
pub mod project;
pub mod schema;
pub mod sequencing_run;

pub use config::Config;
pub use error::{RegistryError, Result};
