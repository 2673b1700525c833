use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub async fn create_products_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            brand TEXT NOT NULL,
            category TEXT NOT NULL,
            price_cents INTEGER NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl Product {
    pub fn new(name: &str, brand: &str, category: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: 0,
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price_cents,
            stock,
        }
    }

    pub async fn add_to_db(&mut self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO products (name, brand, category, price_cents, stock) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&self.name)
        .bind(&self.brand)
        .bind(&self.category)
        .bind(self.price_cents)
        .bind(self.stock)
        .execute(pool)
        .await?;

        self.id = result.last_insert_rowid();

        Ok(())
    }

    /// Lists products by name, optionally restricted to one category
    /// (case-insensitive).
    pub async fn list(
        pool: &SqlitePool,
        category: Option<&str>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, brand, category, price_cents, stock FROM products \
                     WHERE lower(category) = lower(?) ORDER BY name",
                )
                .bind(category)
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, brand, category, price_cents, stock FROM products ORDER BY name",
                )
                .fetch_all(pool)
                .await
            }
        }
    }

    pub async fn categories(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT category FROM products ORDER BY category")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(c,)| c).collect())
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(rec.0)
    }
}
