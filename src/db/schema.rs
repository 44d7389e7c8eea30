//! SQL DDL for initializing the student storage.

/// SQLite schema with:
/// - `Id` INTEGER PRIMARY KEY AUTOINCREMENT, assigned on insert
/// - `Name` TEXT NOT NULL, no uniqueness constraint
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Students (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL
);
"#;
