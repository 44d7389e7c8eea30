use crate::db::models::{Student, StudentPayload};
use crate::db::schema::SQLITE_INIT;
use crate::error::StudentsError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// CRUD access to the `Students` table. Every mutation commits on its own.
#[derive(Clone)]
pub struct StudentsStorage {
    pool: SqlitePool,
}

impl StudentsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the SQLite file if missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StudentsError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), StudentsError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All students, in whatever order the store yields them.
    pub async fn list(&self) -> Result<Vec<Student>, StudentsError> {
        let students: Vec<Student> = sqlx::query_as("SELECT Id, Name FROM Students")
            .fetch_all(&self.pool)
            .await?;
        debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Insert a new student. Returns the persisted row with its assigned id.
    pub async fn create(&self, candidate: StudentPayload) -> Result<Student, StudentsError> {
        let id = sqlx::query("INSERT INTO Students (Name) VALUES (?)")
            .bind(&candidate.name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        info!(id, "created student");
        Ok(Student {
            id,
            name: candidate.name,
        })
    }

    pub async fn find(&self, id: i64) -> Result<Option<Student>, StudentsError> {
        let student = sqlx::query_as("SELECT Id, Name FROM Students WHERE Id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    /// Load, rename, write back. Only the `Name` column is written.
    pub async fn update(&self, id: i64, name: String) -> Result<Student, StudentsError> {
        let current = self.find(id).await?.ok_or(StudentsError::NotFound { id })?;
        let updated = current.renamed(name);

        sqlx::query("UPDATE Students SET Name = ? WHERE Id = ?")
            .bind(&updated.name)
            .bind(updated.id)
            .execute(&self.pool)
            .await?;
        info!(id, "updated student");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), StudentsError> {
        let current = self.find(id).await?.ok_or(StudentsError::NotFound { id })?;

        sqlx::query("DELETE FROM Students WHERE Id = ?")
            .bind(current.id)
            .execute(&self.pool)
            .await?;
        info!(id, "deleted student");
        Ok(())
    }
}
