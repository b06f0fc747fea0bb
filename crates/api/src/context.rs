use ecom_auth::{JwtClaims, Principal, PrincipalId, Role};

/// Principal context for a request (authenticated identity + roles).
///
/// Present in request extensions only when the caller sent a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self { principal_id, roles }
    }

    pub fn from_claims(claims: JwtClaims) -> Self {
        Self::new(claims.sub, claims.roles)
    }

    pub fn to_principal(&self) -> Principal {
        Principal::new(self.principal_id.clone(), self.roles.clone())
    }
}
