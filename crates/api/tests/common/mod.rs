#![allow(dead_code)]

use chrono::{Duration as ChronoDuration, Utc};
use ecom_auth::{JwtClaims, PrincipalId, Role};
use jsonwebtoken::{Algorithm, EncodingKey, Header};

pub const JWT_SECRET: &str = "test-secret";

pub fn mint_jwt(jwt_secret: &str, roles: Vec<Role>) -> String {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: PrincipalId::new("user-under-test"),
        roles,
        iss: None,
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

pub fn admin_token() -> String {
    mint_jwt(JWT_SECRET, vec![Role::ADMIN])
}

pub fn clerk_token() -> String {
    mint_jwt(JWT_SECRET, vec![Role::new("Clerk")])
}
