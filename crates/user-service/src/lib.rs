//! User operations for the tasks application
//!
//! `UserService` adapts three application intents onto its collaborators:
//! listing users and logging in go through a `Transport`, OAuth sign-in goes
//! through a `Navigator`. The service keeps no state between calls and never
//! inspects or rewrites transport outcomes.

pub mod service;

pub use service::{LOGIN_METHOD, LOGIN_PATH, USERS_PATH, UserService};
pub use tasks_auth::{Navigator, OAuthSettings};
pub use transport::{Continuations, Payload, Transport, TransportError};
