//! End-to-end tests for health-monitor
//!
//! These tests probe real storage backends.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - TEST_DATABASE_URL: Postgres with `markets`, `bets` and `users` tables
//! - TEST_REDIS_URL: writable Redis instance

pub mod storage;
