//! Entity definitions (database row mappings).

pub mod composition;
pub mod event_type;
pub mod invitation;
pub mod one_time_code;
pub mod rsvp;
pub mod template;
pub mod user;

pub use composition::CompositionEntity;
pub use event_type::EventTypeEntity;
pub use invitation::InvitationEntity;
pub use one_time_code::OneTimeCodeEntity;
pub use rsvp::RsvpEntity;
pub use template::TemplateEntity;
pub use user::UserEntity;
