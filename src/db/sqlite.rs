use crate::db::models::DbUser;
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Owns all reads and writes of `users` rows. Nothing else in the process
/// touches the table.
#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and run the
    /// bundled DDL.
    pub async fn connect(database_url: &str) -> Result<Self, ApiError> {
        let connect_opts =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new user. A uniqueness violation on `email` surfaces as
    /// `ApiError::DuplicateEmail`; the statement's implicit transaction has
    /// already been rolled back by then. Returns the new row id.
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, ApiError> {
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"INSERT INTO users (name, email, password_hash, created_at)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(ApiError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<DbUser>, ApiError> {
        let row = sqlx::query(
            r#"SELECT id, name, email, password_hash, created_at
               FROM users WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    fn row_to_model(row: SqliteRow) -> Result<DbUser, ApiError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;
        let password_hash: String = row.try_get("password_hash")?;
        let created_at_str: String = row.try_get("created_at")?;

        let created_at: DateTime<Utc> = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(DbUser {
            id,
            name,
            email,
            password_hash,
            created_at,
        })
    }
}
