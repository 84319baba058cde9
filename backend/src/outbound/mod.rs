//! Outbound adapters implementing the board game repository port.
//!
//! - **persistence**: PostgreSQL via Diesel and a bb8 pool.
//! - **memory**: in-process store for database-less runs and tests.
//! - **logging**: decorator adding structured logs around any adapter.

pub mod logging;
pub mod memory;
pub mod persistence;
