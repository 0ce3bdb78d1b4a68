//! HTTP route handlers.

pub mod auth;
pub mod event_types;
pub mod health;
pub mod invitations;
pub mod public;
pub mod templates;
