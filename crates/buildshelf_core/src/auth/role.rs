//! Role declarations for catalog authorization gates.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Role granted to a session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Stable string id used by the external session collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Editor => ROLE_EDITOR,
            Self::Viewer => ROLE_VIEWER,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Admin => "Full catalog administration including user-facing settings.",
            Self::Editor => "Create builds and catalog entries via bulk or single operations.",
            Self::Viewer => "Read-only catalog browsing and filtering.",
        }
    }
}

/// Session string value for the admin role.
pub const ROLE_ADMIN: &str = "admin";
/// Session string value for the editor role.
pub const ROLE_EDITOR: &str = "editor";
/// Session string value for the viewer role.
pub const ROLE_VIEWER: &str = "viewer";

const SUPPORTED_ROLE_STRINGS: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR, ROLE_VIEWER];

/// Returns supported role declaration strings.
pub fn supported_role_strings() -> &'static [&'static str] {
    SUPPORTED_ROLE_STRINGS
}

/// Parses one role from its session string value.
pub fn parse_role(value: &str) -> Result<Role, RoleParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RoleParseError::EmptyRole);
    }

    match normalized {
        ROLE_ADMIN => Ok(Role::Admin),
        ROLE_EDITOR => Ok(Role::Editor),
        ROLE_VIEWER => Ok(Role::Viewer),
        other => Err(RoleParseError::UnsupportedRole(other.to_string())),
    }
}

/// Role parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    EmptyRole,
    UnsupportedRole(String),
}

impl Display for RoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRole => write!(f, "role value must not be empty"),
            Self::UnsupportedRole(value) => write!(f, "role is unsupported: {value}"),
        }
    }
}

impl Error for RoleParseError {}

#[cfg(test)]
mod tests {
    use super::{parse_role, supported_role_strings, Role, RoleParseError};

    #[test]
    fn parses_all_supported_roles() {
        assert_eq!(parse_role("admin").expect("admin parse"), Role::Admin);
        assert_eq!(parse_role("editor").expect("editor parse"), Role::Editor);
        assert_eq!(parse_role("viewer").expect("viewer parse"), Role::Viewer);
    }

    #[test]
    fn rejects_empty_role() {
        let err = parse_role("   ").expect_err("empty role must fail");
        assert_eq!(err, RoleParseError::EmptyRole);
    }

    #[test]
    fn rejects_unsupported_and_non_lowercase_roles() {
        let err = parse_role("builder").expect_err("unsupported role must fail");
        assert_eq!(err, RoleParseError::UnsupportedRole("builder".to_string()));

        let err = parse_role("Editor").expect_err("capitalized role must fail");
        assert_eq!(err, RoleParseError::UnsupportedRole("Editor".to_string()));
    }

    #[test]
    fn returns_supported_role_strings() {
        let values = supported_role_strings();
        assert!(values.contains(&"admin"));
        assert!(values.contains(&"editor"));
        assert!(values.contains(&"viewer"));
    }
}
