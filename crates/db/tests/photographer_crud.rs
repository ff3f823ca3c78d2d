//! Integration tests for the photographer repository.
//!
//! Exercises the repository layer against a real database: create/fetch
//! roundtrip, typed not-found and validation failures, unique constraint
//! violations, idempotent delete, and the unimplemented listing.

use assert_matches::assert_matches;
use sqlx::PgPool;

use microgram_core::error::CoreError;
use microgram_db::error::RepoError;
use microgram_db::models::photographer::Photographer;
use microgram_db::repositories::PhotographerRepo;

fn jojorancu() -> Photographer {
    Photographer {
        username: "jojorancu".to_string(),
        email: "jojorancu@gmail.com".to_string(),
        phone: "0812345678".to_string(),
        gender: "m".to_string(),
        ..Photographer::default()
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_fetch_roundtrip(pool: PgPool) {
    PhotographerRepo::create(&pool, &jojorancu()).await.unwrap();

    let fetched = PhotographerRepo::fetch(&pool, "jojorancu").await.unwrap();
    assert_eq!(fetched.username, "jojorancu");
    assert_eq!(fetched.email, "jojorancu@gmail.com");
    assert_eq!(fetched.phone, "0812345678");
    assert_eq!(fetched.gender, "m");
    // Fields no operation persists stay empty.
    assert_eq!(fetched.firstname, "");
    assert_eq!(fetched.address, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fetch_missing_row_is_not_found(pool: PgPool) {
    let err = PhotographerRepo::fetch(&pool, "nobody").await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_malformed_email_before_insert(pool: PgPool) {
    let mut p = jojorancu();
    p.email = "not-an-email".to_string();

    let err = PhotographerRepo::create(&pool, &p).await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::Validation(_)));

    // Nothing was written.
    let err = PhotographerRepo::fetch(&pool, "jojorancu").await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_duplicate_email_is_database_error(pool: PgPool) {
    PhotographerRepo::create(&pool, &jojorancu()).await.unwrap();

    let mut dup = jojorancu();
    dup.username = "other".to_string();
    dup.phone = "0899999999".to_string();

    let err = PhotographerRepo::create(&pool, &dup).await.unwrap_err();
    assert_matches!(err, RepoError::Database(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_contact_fields_only(pool: PgPool) {
    PhotographerRepo::create(&pool, &jojorancu()).await.unwrap();

    let mut p = jojorancu();
    p.email = "moved@example.com".to_string();
    p.phone = "0800000001".to_string();
    p.gender = "f".to_string();
    PhotographerRepo::update(&pool, &p).await.unwrap();

    let fetched = PhotographerRepo::fetch(&pool, "jojorancu").await.unwrap();
    assert_eq!(fetched.email, "moved@example.com");
    assert_eq!(fetched.phone, "0800000001");
    assert_eq!(fetched.gender, "f");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_row_is_success(pool: PgPool) {
    let p = jojorancu();
    PhotographerRepo::update(&pool, &p).await.unwrap();

    // Still no row.
    let err = PhotographerRepo::fetch(&pool, "jojorancu").await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_malformed_email(pool: PgPool) {
    PhotographerRepo::create(&pool, &jojorancu()).await.unwrap();

    let mut p = jojorancu();
    p.email = "broken".to_string();

    let err = PhotographerRepo::update(&pool, &p).await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::Validation(_)));

    let fetched = PhotographerRepo::fetch(&pool, "jojorancu").await.unwrap();
    assert_eq!(fetched.email, "jojorancu@gmail.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_idempotent(pool: PgPool) {
    PhotographerRepo::create(&pool, &jojorancu()).await.unwrap();

    PhotographerRepo::delete(&pool, "jojorancu").await.unwrap();
    let err = PhotographerRepo::fetch(&pool, "jojorancu").await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { .. }));

    // Deleting again succeeds the same way.
    PhotographerRepo::delete(&pool, "jojorancu").await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_not_implemented(pool: PgPool) {
    let err = PhotographerRepo::list(&pool, 0, 10).await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotImplemented(_)));

    // Pagination parameters make no difference.
    let err = PhotographerRepo::list(&pool, 5, 2).await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotImplemented(_)));
}
