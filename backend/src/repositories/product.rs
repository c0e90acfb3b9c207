//! Product repository for database operations
//!
//! Every mutating operation runs in its own transaction: committed on
//! success, rolled back when the transaction guard is dropped on error.
//! Name uniqueness is enforced by the database constraint, never by a
//! check-then-insert in application code.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Product record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub amount: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Business fields for insert and full-replacement update
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub amount: i32,
}

/// Product repository for database operations
pub struct ProductRepository;

impl ProductRepository {
    /// Find a product by exact name
    ///
    /// `None` is an expected outcome, not a database error.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, category, price, amount, created_at, updated_at
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Insert a new product with server-generated id and timestamps
    pub async fn insert(
        pool: &PgPool,
        changes: &ProductChanges,
    ) -> Result<ProductRecord, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            INSERT INTO products (name, category, price, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, category, price, amount, created_at, updated_at
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.category)
        .bind(changes.price)
        .bind(changes.amount)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// Replace all business fields of the product with the given name
    ///
    /// Returns `None` when no row matches. The modification timestamp is
    /// bumped in the same statement, so the replacement is atomic.
    pub async fn update(
        pool: &PgPool,
        name: &str,
        changes: &ProductChanges,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            UPDATE products
            SET name = $2, category = $3, price = $4, amount = $5, updated_at = NOW()
            WHERE name = $1
            RETURNING id, name, category, price, amount, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(&changes.name)
        .bind(&changes.category)
        .bind(changes.price)
        .bind(changes.amount)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// Delete the product with the given name
    ///
    /// Returns the pre-deletion snapshot, or `None` when no row matches.
    pub async fn delete(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            DELETE FROM products
            WHERE name = $1
            RETURNING id, name, category, price, amount, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// List all products, unordered and unpaginated
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, category, price, amount, created_at, updated_at
            FROM products
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
