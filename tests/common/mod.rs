#![allow(dead_code)]

use shortpath::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_url(pool: &PgPool, short_path: &str, original_url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_path) VALUES ($1, $2) RETURNING id",
    )
    .bind(original_url)
    .bind(short_path)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_url_with_age(
    pool: &PgPool,
    short_path: &str,
    original_url: &str,
    minutes_ago: i32,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_path, created_at)
         VALUES ($1, $2, now() - make_interval(mins => $3))
         RETURNING id",
    )
    .bind(original_url)
    .bind(short_path)
    .bind(minutes_ago)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_expired_url(pool: &PgPool, short_path: &str, original_url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_path, expires_at)
         VALUES ($1, $2, now() - interval '1 hour')
         RETURNING id",
    )
    .bind(original_url)
    .bind(short_path)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_access_log(pool: &PgPool, url_id: i64, ip: &str) {
    sqlx::query("INSERT INTO access_logs (url_id, ip_address) VALUES ($1, $2)")
        .bind(url_id)
        .bind(ip)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_access_log_with_age(pool: &PgPool, url_id: i64, ip: &str, days_ago: i32) {
    sqlx::query(
        "INSERT INTO access_logs (url_id, ip_address, accessed_at)
         VALUES ($1, $2, now() - make_interval(days => $3))",
    )
    .bind(url_id)
    .bind(ip)
    .bind(days_ago)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_access_logs(pool: &PgPool, url_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM access_logs WHERE url_id = $1")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
