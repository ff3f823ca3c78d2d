//! Repository for the `photographers` table.

use sqlx::{FromRow, PgPool};

use microgram_core::error::CoreError;
use microgram_core::validation::validate_email;

use crate::error::RepoError;
use crate::models::photographer::Photographer;

/// Columns read back when fetching a photographer by username.
#[derive(Debug, FromRow)]
struct ContactRow {
    email: String,
    phone: String,
    gender: Option<String>,
}

/// Provides CRUD operations for photographers.
pub struct PhotographerRepo;

impl PhotographerRepo {
    /// Insert a new photographer.
    ///
    /// Only `username`, `email`, `phone`, and `gender` are persisted. The
    /// email address is validated before any statement executes.
    pub async fn create(pool: &PgPool, p: &Photographer) -> Result<(), RepoError> {
        validate_email(&p.email)?;

        sqlx::query(
            "INSERT INTO photographers (username, email, phone, gender)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&p.username)
        .bind(&p.email)
        .bind(&p.phone)
        .bind(&p.gender)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Fetch the contact fields for `username`, returning a record populated
    /// with `username`, `email`, `phone`, and `gender`.
    pub async fn fetch(pool: &PgPool, username: &str) -> Result<Photographer, RepoError> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT email, phone, gender FROM photographers WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        let Some(row) = row else {
            return Err(CoreError::NotFound {
                entity: "photographer",
                key: username.to_string(),
            }
            .into());
        };

        Ok(Photographer {
            username: username.to_string(),
            email: row.email,
            phone: row.phone,
            gender: row.gender.unwrap_or_default(),
            ..Photographer::default()
        })
    }

    /// Update `email`, `phone`, and `gender` for the row matching
    /// `p.username`. Zero rows affected is still success.
    pub async fn update(pool: &PgPool, p: &Photographer) -> Result<(), RepoError> {
        validate_email(&p.email)?;

        sqlx::query(
            "UPDATE photographers
             SET email = $2, phone = $3, gender = $4, updated_at = now()
             WHERE username = $1",
        )
        .bind(&p.username)
        .bind(&p.email)
        .bind(&p.phone)
        .bind(&p.gender)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove the row matching `username`.
    ///
    /// Deleting an absent row is not an error.
    pub async fn delete(pool: &PgPool, username: &str) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM photographers WHERE username = $1")
            .bind(username)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(username, "Delete matched no rows");
        }

        Ok(())
    }

    /// Paginated listing by offset/count. Never wired up.
    pub async fn list(
        _pool: &PgPool,
        _offset: i64,
        _count: i64,
    ) -> Result<Vec<Photographer>, RepoError> {
        Err(CoreError::NotImplemented("listing photographers").into())
    }
}
