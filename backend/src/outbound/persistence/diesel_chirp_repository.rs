//! PostgreSQL-backed `ChirpRepository` implementation using Diesel ORM.
//!
//! Listing is ordered by `created_at` then `id` so repeated reads of an
//! unchanged table return the same sequence.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ChirpPersistenceError, ChirpRepository};
use crate::domain::{Chirp, ChirpId, NewChirp};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ChirpRow, NewChirpRow};
use super::pool::{DbPool, PoolError};
use super::schema::chirps;

/// Diesel-backed implementation of the [`ChirpRepository`] port.
#[derive(Clone)]
pub struct DieselChirpRepository {
    pool: DbPool,
}

impl DieselChirpRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ChirpPersistenceError {
    map_basic_pool_error(error, ChirpPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ChirpPersistenceError {
    map_basic_diesel_error(
        error,
        ChirpPersistenceError::query,
        ChirpPersistenceError::connection,
    )
}

#[async_trait]
impl ChirpRepository for DieselChirpRepository {
    async fn create(&self, chirp: &NewChirp) -> Result<Chirp, ChirpPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ChirpRow = diesel::insert_into(chirps::table)
            .values(NewChirpRow::from(chirp))
            .returning(ChirpRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Chirp>, ChirpPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ChirpRow> = chirps::table
            .order((chirps::created_at.asc(), chirps::id.asc()))
            .select(ChirpRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Chirp::from).collect())
    }

    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ChirpRow> = chirps::table
            .filter(chirps::id.eq(id.as_uuid()))
            .select(ChirpRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Chirp::from))
    }
}
