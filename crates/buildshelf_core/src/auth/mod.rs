//! Session and role contracts consumed by catalog services.
//!
//! # Responsibility
//! - Declare the queries the core asks of the external login/session
//!   collaborator.
//! - Gate mutating use-cases behind role checks.
//!
//! # Invariants
//! - The core never stores credentials or session state; it only consumes
//!   "current user" and "has role" answers.

pub mod role;
pub mod session;
