use thiserror::Error;

/// Failures surfaced by a [`FoodStore`](crate::foods::repo::FoodStore).
///
/// `NotFound` is the only variant handlers branch on; everything else is an
/// opaque store failure whose text ends up in the response body.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no food with that id")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Migration failure at startup. Fatal, never handled per-request.
#[derive(Debug, Error)]
#[error("schema migration failed: {0}")]
pub struct SchemaError(#[from] sqlx::migrate::MigrateError);
