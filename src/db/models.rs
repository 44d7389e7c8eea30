use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Student {
    #[sqlx(rename = "Id")]
    pub id: i64,
    #[sqlx(rename = "Name")]
    pub name: String,
}

/// Inbound body for create and update. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentPayload {
    pub name: String,
}

impl Student {
    /// Copy of this record carrying a new name; `id` is kept.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }
}
