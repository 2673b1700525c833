use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub async fn create_users_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            full_name TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(email: &str, full_name: &str, is_admin: bool) -> User {
        User {
            id: 0,
            email: email.to_string(),
            full_name: full_name.to_string(),
            is_admin,
        }
    }

    pub async fn add_to_db(&mut self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO users (email, full_name, is_admin) VALUES (?, ?, ?)")
                .bind(&self.email)
                .bind(&self.full_name)
                .bind(self.is_admin)
                .execute(pool)
                .await?;

        self.id = result.last_insert_rowid();

        Ok(())
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, email, full_name, is_admin FROM users ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(rec.0)
    }
}
