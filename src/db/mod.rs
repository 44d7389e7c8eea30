//! Database module: the persistence gateway for students.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: CRUD primitives over the `Students` table

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Student, StudentPayload};
pub use sqlite::StudentsStorage;
