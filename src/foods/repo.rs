use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{SchemaError, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Food {
    pub id: i64,
    pub name: Option<String>,
    pub lifespan: i32,
    pub quantity: i32,
}

/// A food as the client supplies it; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: Option<String>,
    pub lifespan: i32,
    pub quantity: i32,
}

/// Brings the `foods` table up to the current shape. Idempotent, safe to run
/// on every startup; failure aborts startup.
pub async fn ensure_schema(db: &PgPool) -> Result<(), SchemaError> {
    sqlx::migrate!("./migrations").run(db).await?;
    Ok(())
}

/// Persistence gateway for foods. Handlers only see this trait, so tests can
/// swap in [`MemoryFoodStore`] without a database.
#[async_trait]
pub trait FoodStore: Send + Sync {
    /// Inserts a new record and returns it with its assigned id. Atomic:
    /// either the row exists with an id afterward or not at all.
    async fn create(&self, food: NewFood) -> Result<Food, StoreError>;

    /// Exactly one record or [`StoreError::NotFound`].
    async fn find_by_id(&self, id: i64) -> Result<Food, StoreError>;

    /// Every stored record in store-defined order. Empty vec when there are
    /// none, never an error.
    async fn find_all(&self) -> Result<Vec<Food>, StoreError>;
}

pub struct PgFoodStore {
    db: PgPool,
}

impl PgFoodStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodStore for PgFoodStore {
    async fn create(&self, food: NewFood) -> Result<Food, StoreError> {
        let row = sqlx::query_as::<_, Food>(
            r#"
            INSERT INTO foods (name, lifespan, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, lifespan, quantity
            "#,
        )
        .bind(food.name)
        .bind(food.lifespan)
        .bind(food.quantity)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Food, StoreError> {
        let row = sqlx::query_as::<_, Food>(
            r#"
            SELECT id, name, lifespan, quantity
            FROM foods
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        row.ok_or(StoreError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Food>, StoreError> {
        let rows = sqlx::query_as::<_, Food>(
            r#"
            SELECT id, name, lifespan, quantity
            FROM foods
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}

/// In-process store with the same id-assignment contract as the database.
#[derive(Default)]
pub struct MemoryFoodStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    next_id: i64,
    rows: Vec<Food>,
}

#[async_trait]
impl FoodStore for MemoryFoodStore {
    async fn create(&self, food: NewFood) -> Result<Food, StoreError> {
        let mut inner = self.inner.lock().expect("food store mutex poisoned");
        inner.next_id += 1;
        let row = Food {
            id: inner.next_id,
            name: food.name,
            lifespan: food.lifespan,
            quantity: food.quantity,
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Food, StoreError> {
        let inner = self.inner.lock().expect("food store mutex poisoned");
        inner
            .rows
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Food>, StoreError> {
        let inner = self.inner.lock().expect("food store mutex poisoned");
        Ok(inner.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> NewFood {
        NewFood {
            name: Some("Apple".into()),
            lifespan: 10,
            quantity: 5,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_positive_ids() {
        let store = MemoryFoodStore::default();
        let first = store.create(apple()).await.unwrap();
        let second = store.create(apple()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn find_by_id_returns_the_stored_record() {
        let store = MemoryFoodStore::default();
        let created = store.create(apple()).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_by_id_unknown_is_not_found() {
        let store = MemoryFoodStore::default();
        let err = store.find_by_id(999_999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn find_all_empty_store_is_ok() {
        let store = MemoryFoodStore::default();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
