//! Application services.

pub mod auth;
pub mod blob;
pub mod notifier;

pub use auth::{AuthError, AuthService, LoginOutcome, TokenPair};
pub use blob::{BlobError, BlobStore, LocalBlobStore};
pub use notifier::{CodeNotifier, NotifyError};
