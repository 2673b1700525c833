use crate::datasource::db::Database;
use crate::models::product_dao::Product;
use crate::models::user_dao::User;
use sqlx::SqlitePool;
use tracing::info;

const DEMO_PRODUCTS: [(&str, &str, &str, i64, i64); 6] = [
    ("Chelsea Boot", "Jubair", "Boots", 8999, 12),
    ("Desert Boot", "Jubair", "Boots", 7499, 8),
    ("Classic Oxford", "Jubair", "Formal", 9499, 5),
    ("Penny Loafer", "Jubair", "Casual", 5999, 10),
    ("Court Sneaker", "Stride", "Sneakers", 4999, 20),
    ("Junior Sandal", "Stride", "Kids", 2499, 0),
];

/// Loads a demo catalog and an admin account into an empty database.
/// Returns the number of products inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    pool.init_db().await?;

    if Product::count(pool).await? > 0 {
        info!("catalog already populated - skipping demo data");
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, brand, category, price_cents, stock) in DEMO_PRODUCTS {
        Product::new(name, brand, category, price_cents, stock)
            .add_to_db(pool)
            .await?;
        inserted += 1;
    }

    if User::count(pool).await? == 0 {
        User::new("admin@jubairboothouse.com", "Store Admin", true)
            .add_to_db(pool)
            .await?;
    }

    info!("inserted {} demo products", inserted);
    Ok(inserted)
}
