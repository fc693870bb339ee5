//! PostgreSQL repository tests.
//!
//! Need a running server: `DATABASE_URL=postgres://... cargo test -- --ignored`.

use shorturl::domain::entities::NewUrlRecord;
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::utils::code_generator::generate_code;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(original_url: &str, short_url: &str) -> NewUrlRecord {
    NewUrlRecord {
        original_url: original_url.to_string(),
        short_url: short_url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .insert(new_record("https://example.com", "abc12345"))
        .await
        .unwrap();
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.short_url, "abc12345");

    let by_code = repo.find_by_short_url("abc12345").await.unwrap().unwrap();
    assert_eq!(by_code.id, record.id);

    let by_url = repo
        .find_by_original_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.id, record.id);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_short_url("notfound").await.unwrap().is_none());
    assert!(
        repo.find_by_original_url("https://nowhere.example")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_same_original_url_returns_existing(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let first = repo
        .insert(new_record("https://example.com", "first111"))
        .await
        .unwrap();
    let second = repo
        .insert(new_record("https://example.com", "second22"))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.short_url, "first111");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_short_url_conflicts(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(new_record("https://one.example", "samecode"))
        .await
        .unwrap();
    let result = repo
        .insert(new_record("https://two.example", "samecode"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_inserts_yield_one_record(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.insert(new_record("https://race.example", &format!("race{i:04}")))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }
    ids.dedup();

    assert_eq!(ids.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_long_original_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    // Random segments keep the value incompressible past the btree row limit.
    let mut long_url = String::from("https://www.example.com/");
    while long_url.len() < 4096 {
        long_url.push_str(&generate_code().unwrap());
    }

    let record = repo
        .insert(new_record(&long_url, "longurl1"))
        .await
        .unwrap();
    assert_eq!(record.original_url, long_url);

    let again = repo
        .insert(new_record(&long_url, "longurl2"))
        .await
        .unwrap();
    assert_eq!(again.id, record.id);
    assert_eq!(again.short_url, "longurl1");

    let found = repo.find_by_original_url(&long_url).await.unwrap().unwrap();
    assert_eq!(found.id, record.id);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
