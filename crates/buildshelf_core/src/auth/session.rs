//! Session query contract and role gate.
//!
//! # Responsibility
//! - Define the trait implemented by the external login/session
//!   collaborator.
//! - Provide the single gate helper mutating services call.

use crate::auth::role::Role;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Queries the core consumes from the external session collaborator.
pub trait SessionProvider {
    /// Returns the authenticated user name, if any.
    fn current_user(&self) -> Option<String>;
    /// Returns whether the current user holds the given role.
    fn has_role(&self, role: Role) -> bool;
}

/// Authorization failure for gated use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    NotAuthenticated,
    MissingRole(Role),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "no authenticated user in session"),
            Self::MissingRole(role) => {
                write!(f, "current user lacks required role: {}", role.as_str())
            }
        }
    }
}

impl Error for AuthError {}

/// Requires an authenticated user holding `role`; returns the user name.
pub fn require_role(session: &dyn SessionProvider, role: Role) -> Result<String, AuthError> {
    let user = session.current_user().ok_or(AuthError::NotAuthenticated)?;
    if !session.has_role(role) {
        return Err(AuthError::MissingRole(role));
    }
    Ok(user)
}
