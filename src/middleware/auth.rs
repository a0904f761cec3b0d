//! Bearer-token guard for role-scoped endpoints.
//!
//! Session tokens are issued by `/login` and carry the caller's document
//! number, display name and role id. The guard decodes and validates the
//! token from the `Authorization: Bearer` header and checks the role claim
//! against the required permission. Only the dashboard endpoints are
//! guarded; the CRUD surface remains open.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::{
    error::{auth::AuthError, AppError},
    service::auth::{Claims, ROL_ADMIN, ROL_CLIENTE, ROL_VETERINARIO},
};

pub enum Permission {
    Admin,
    Cliente,
    Veterinario,
}

impl Permission {
    fn rol_id(&self) -> i32 {
        match self {
            Self::Admin => ROL_ADMIN,
            Self::Cliente => ROL_CLIENTE,
            Self::Veterinario => ROL_VETERINARIO,
        }
    }
}

pub struct AuthGuard<'a> {
    jwt_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(jwt_secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            jwt_secret,
            headers,
        }
    }

    /// Validates the bearer token and requires the given role.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and the role claim matches
    /// - `Err(AuthError)` - Missing/invalid token or wrong role
    pub fn require(&self, permission: Permission) -> Result<Claims, AppError> {
        let token = self.bearer_token()?;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        let claims = data.claims;

        if claims.rol != permission.rol_id() {
            return Err(AuthError::AccessDenied(claims.n_documento).into());
        }

        Ok(claims)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::auth::issue_token;
    use axum::http::HeaderValue;

    const SECRET: &str = "secret-for-tests";

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn accepts_valid_token_with_matching_role() {
        let token = issue_token(SECRET, "100", "Ana", ROL_ADMIN).unwrap();
        let headers = headers_with(&token);

        let claims = AuthGuard::new(SECRET, &headers)
            .require(Permission::Admin)
            .unwrap();

        assert_eq!(claims.n_documento, "100");
        assert_eq!(claims.rol, ROL_ADMIN);
    }

    #[test]
    fn rejects_token_with_wrong_role() {
        let token = issue_token(SECRET, "100", "Ana", ROL_CLIENTE).unwrap();
        let headers = headers_with(&token);

        let result = AuthGuard::new(SECRET, &headers).require(Permission::Admin);

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_)))
        ));
    }

    #[test]
    fn rejects_missing_header() {
        let headers = HeaderMap::new();

        let result = AuthGuard::new(SECRET, &headers).require(Permission::Cliente);

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = issue_token("another-secret", "100", "Ana", ROL_ADMIN).unwrap();
        let headers = headers_with(&token);

        let result = AuthGuard::new(SECRET, &headers).require(Permission::Admin);

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }
}
