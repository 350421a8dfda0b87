//! `moneybook` - a local personal-finance ledger
//!
//! This crate provides the persistent core of a personal-finance app:
//! an income/expense transaction ledger, a money-box (savings) ledger,
//! on-demand aggregates (total income, total expense, balance), and
//! key-value user settings (currency, theme), all on a single local
//! SQLite database behind an async query façade.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links
)]
#![warn(missing_docs, clippy::all, clippy::unwrap_used, clippy::panic)]
#![allow(clippy::module_name_repetitions)]

/// Compiled-in category and currency catalogs
pub mod catalog;
/// Application configuration (database path)
pub mod config;
/// SQLite persistence layer - ledgers, settings, schema
pub mod db;
/// Unified error types and result handling
pub mod errors;
/// Record types shared between the db layer and callers
pub mod models;
/// The async query façade screens talk to
pub mod store;
