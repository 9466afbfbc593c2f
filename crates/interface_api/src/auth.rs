//! Authentication and authorization
//!
//! Bearer tokens are HS256 JWTs. The `roles` claim lists the permissions
//! granted to the caller; the `admin` role grants all of them.

use axum::http::Method;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::ApiError;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User's roles
    pub roles: Vec<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing permission: {0}")]
    MissingPermission(String),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidToken | AuthError::TokenExpired => ApiError::Unauthorized,
            AuthError::MissingPermission(permission) => ApiError::Forbidden(permission),
        }
    }
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `user_id` - User identifier
/// * `roles` - User's roles
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    user_id: &str,
    roles: Vec<String>,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let validity = i64::try_from(expiration_secs).unwrap_or(i64::MAX);
    let exp = now + Duration::seconds(validity);

    let claims = Claims {
        sub: user_id.to_string(),
        roles,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Checks if user has required role
pub fn has_role(claims: &Claims, required_role: &str) -> bool {
    claims
        .roles
        .iter()
        .any(|r| r == required_role || r == permissions::ADMIN)
}

/// Fails with `MissingPermission` unless the caller holds `permission`
pub fn authorize(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    if has_role(claims, permission) {
        return Ok(());
    }
    warn!(user = %claims.sub, permission, "Permission denied");
    Err(AuthError::MissingPermission(permission.to_string()))
}

/// Permission required by an API route
///
/// `path` is matched with or without the `/api/v1` prefix. Routes outside
/// the policy return `None` and are left to the router.
pub fn route_permission(method: &Method, path: &str) -> Option<&'static str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let segments = match segments.as_slice() {
        ["api", "v1", rest @ ..] => rest,
        all => all,
    };

    use permissions::*;
    match (segments, method.as_str()) {
        (["customers"], "GET") => Some(CUSTOMERS_VIEW),
        (["customers"], "POST") => Some(CUSTOMERS_CREATE),
        (["customers", _], "GET") => Some(CUSTOMERS_VIEW),
        (["customers", _], "PUT") => Some(CUSTOMERS_EDIT),
        (["customers", _], "DELETE") => Some(CUSTOMERS_DELETE),
        (["customers", _, "addresses"], "GET") => Some(CUSTOMERS_VIEW),
        (["customers", _, "addresses"], _) => Some(CUSTOMERS_ADDRESSES_ASSIGN),
        (["owners"], "GET") => Some(OWNERS_VIEW),
        (["owners"], "POST") => Some(OWNERS_CREATE),
        (["owners", _], "GET") => Some(OWNERS_VIEW),
        (["owners", _], "PUT") => Some(OWNERS_EDIT),
        (["owners", _], "DELETE") => Some(OWNERS_DELETE),
        (["activities"], _) => Some(ACTIVITIES_VIEW),
        _ => None,
    }
}

/// Permission definitions
pub mod permissions {
    pub const ADMIN: &str = "admin";

    pub const CUSTOMERS_VIEW: &str = "permissions.customers.view";
    pub const CUSTOMERS_CREATE: &str = "permissions.customers.create";
    pub const CUSTOMERS_EDIT: &str = "permissions.customers.edit";
    pub const CUSTOMERS_DELETE: &str = "permissions.customers.delete";
    pub const CUSTOMERS_ADDRESSES_ASSIGN: &str = "permissions.customers.addresses.assign";

    pub const OWNERS_VIEW: &str = "permissions.owners.view";
    pub const OWNERS_CREATE: &str = "permissions.owners.create";
    pub const OWNERS_EDIT: &str = "permissions.owners.edit";
    pub const OWNERS_DELETE: &str = "permissions.owners.delete";

    pub const ACTIVITIES_VIEW: &str = "permissions.activities.view";
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = create_token("user-1", vec!["permissions.customers.view".into()], SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert!(has_role(&claims, permissions::CUSTOMERS_VIEW));
        assert!(!has_role(&claims, permissions::CUSTOMERS_CREATE));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_token("user-1", vec![], SECRET, 60).unwrap();
        assert!(matches!(
            validate_token(&token, "other-secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_admin_grants_everything() {
        let claims = Claims {
            sub: "root".into(),
            roles: vec![permissions::ADMIN.into()],
            exp: 0,
            iat: 0,
        };
        assert!(authorize(&claims, permissions::OWNERS_DELETE).is_ok());
        assert!(authorize(&claims, permissions::ACTIVITIES_VIEW).is_ok());
    }

    #[test]
    fn test_route_permissions() {
        let cases = [
            (Method::GET, "/api/v1/customers", Some(permissions::CUSTOMERS_VIEW)),
            (Method::POST, "/api/v1/customers", Some(permissions::CUSTOMERS_CREATE)),
            (Method::PUT, "/customers/CUS-1", Some(permissions::CUSTOMERS_EDIT)),
            (Method::DELETE, "/customers/1", Some(permissions::CUSTOMERS_DELETE)),
            (Method::GET, "/customers/1/addresses", Some(permissions::CUSTOMERS_VIEW)),
            (Method::PUT, "/customers/1/addresses", Some(permissions::CUSTOMERS_ADDRESSES_ASSIGN)),
            (Method::DELETE, "/customers/1/addresses/", Some(permissions::CUSTOMERS_ADDRESSES_ASSIGN)),
            (Method::POST, "/owners", Some(permissions::OWNERS_CREATE)),
            (Method::GET, "/owners/OWN-1", Some(permissions::OWNERS_VIEW)),
            (Method::GET, "/activities", Some(permissions::ACTIVITIES_VIEW)),
            (Method::GET, "/health", None),
            (Method::PATCH, "/owners/1", None),
        ];

        for (method, path, expected) in cases {
            assert_eq!(route_permission(&method, path), expected, "{} {}", method, path);
        }
    }

    #[test]
    fn test_permission_names_match_issued_roles() {
        assert_eq!(permissions::ACTIVITIES_VIEW, "permissions.activities.view");
        assert_eq!(
            permissions::CUSTOMERS_ADDRESSES_ASSIGN,
            "permissions.customers.addresses.assign"
        );
    }

    #[test]
    fn test_missing_permission() {
        let claims = Claims {
            sub: "user-2".into(),
            roles: vec![permissions::OWNERS_VIEW.into()],
            exp: 0,
            iat: 0,
        };
        assert!(matches!(
            authorize(&claims, permissions::OWNERS_EDIT),
            Err(AuthError::MissingPermission(p)) if p == "permissions.owners.edit"
        ));
    }
}
