//! Shared utilities for the EventCraft backend.
//!
//! This crate provides functionality used across the other crates:
//! - Password hashing with Argon2id
//! - JWT generation and validation
//! - Random token generation (one-time codes, share tokens)

pub mod jwt;
pub mod password;
pub mod tokens;
