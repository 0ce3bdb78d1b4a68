//! Domain models for EventCraft.

pub mod event_data;
pub mod event_type;
pub mod invitation;
pub mod rsvp;
pub mod template;
pub mod user;

pub use event_data::{CommonFields, EventData, EventDetails};
pub use event_type::{EventType, EventTypeDef, UnknownEventType, GENERAL_VARIANT};
pub use invitation::{Composition, Invitation};
pub use rsvp::{InvalidRsvpResponse, Rsvp, RsvpResponse, RsvpStats};
pub use template::Template;
pub use user::{LoginRequest, RefreshRequest, RegisterRequest, User, VerifyCodeRequest};
