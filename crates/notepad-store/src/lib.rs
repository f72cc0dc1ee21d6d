//! notepad-store: Document store adapter for the notepad service
//!
//! This crate provides:
//! - The `NoteStore` trait: insert, find-all, delete-by-title
//! - A PostgreSQL implementation keeping each note as a JSONB document
//! - An in-memory implementation for tests and local runs
//!
//! # Usage
//!
//! ```rust,ignore
//! use notepad_store::{NoteStore, PgNoteStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = PgNoteStore::connect(config).await?;
//!
//! store.insert(&note).await?;
//! let notes = store.find_all().await?;
//! store.delete_one("Groceries").await?;
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryNoteStore;
pub use postgres::PgNoteStore;
pub use store::{NoteStore, StoreConfig};

// Re-export notepad-core for downstream crates
pub use notepad_core;
