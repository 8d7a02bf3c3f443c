// src/legacy/mod.rs
//! One-time migration of rows written before title encryption existed
//!
//! Reads tolerate legacy plaintext (no delimiter), but nothing ever rewrites
//! it. Running the migration closes that gap so every title is at rest as an
//! envelope.

mod migrate;
