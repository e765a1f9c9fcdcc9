//! # Authentication
//!
//! The session/auth controller's pure parts: the state machine, the dialog
//! form and the session value. Side effects (network calls, persistence)
//! live in [`crate::app::handlers::auth`].

pub mod form;
pub mod session;
pub mod state;

pub use form::{AuthForm, PreparedRequest};
pub use session::Session;
pub use state::{AuthEvent, AuthState, EntryMode, FormMode, InvalidTransition, PendingRequest};
