//! Per-operation visibility policy.

use thiserror::Error;

use crate::{PrincipalId, Role};

/// A verified caller, derived from token claims by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self { principal_id, roles }
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Who may invoke an operation.
///
/// The baseline ([`Visibility::default`]) is `Authenticated`; operations open
/// to anonymous callers must opt into `Public` explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Anyone, with or without an identity.
    Public,

    /// Any caller holding a valid identity.
    #[default]
    Authenticated,

    /// An authenticated caller holding the given role.
    Role(Role),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden: missing role '{0}'")]
    Forbidden(Role),
}

/// Decide whether `principal` (if any) may invoke an operation with the given
/// visibility.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(visibility: &Visibility, principal: Option<&Principal>) -> Result<(), AuthzError> {
    match (visibility, principal) {
        (Visibility::Public, _) => Ok(()),
        (_, None) => Err(AuthzError::Unauthenticated),
        (Visibility::Authenticated, Some(_)) => Ok(()),
        (Visibility::Role(role), Some(p)) if p.has_role(role) => Ok(()),
        (Visibility::Role(role), Some(_)) => Err(AuthzError::Forbidden(role.clone())),
    }
}
