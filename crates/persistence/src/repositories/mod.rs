//! Repository implementations.

pub mod composition;
pub mod event_type;
pub mod invitation;
pub mod one_time_code;
pub mod rsvp;
pub mod template;
pub mod user;

pub use composition::CompositionRepository;
pub use event_type::EventTypeRepository;
pub use invitation::{InvitationRepository, NewInvitation};
pub use one_time_code::OneTimeCodeRepository;
pub use rsvp::{NewRsvp, RsvpRepository};
pub use template::TemplateRepository;
pub use user::UserRepository;
