//! Domain layer for the EventCraft backend.
//!
//! This crate contains:
//! - Domain models (User, Template, Invitation, Rsvp)
//! - The event-data payload schema, one variant per event type
//! - Pure business logic: template matching, presentation-view
//!   resolution, RSVP aggregation

pub mod models;
pub mod services;
