use std::sync::Arc;

use sqlx::PgPool;

use crate::foods::repo::{FoodStore, MemoryFoodStore, PgFoodStore};

#[derive(Clone)]
pub struct AppState {
    pub foods: Arc<dyn FoodStore>,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            foods: Arc::new(PgFoodStore::new(db)),
        }
    }

    /// State backed by an in-process store, no database required.
    pub fn in_memory() -> Self {
        Self {
            foods: Arc::new(MemoryFoodStore::default()),
        }
    }
}
