use crate::{modules::user::repository::Role, types::AuthContext};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

pub struct IssuedToken {
    pub token: String,
    pub expires: DateTime<Utc>,
}

pub fn issue_token(auth: &AuthContext, user_id: &str, role: Role) -> Result<IssuedToken> {
    let now = Utc::now();
    let expires = now + Duration::hours(auth.token_expiry_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now.timestamp(),
        exp: expires.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
    )
    .map(|token| IssuedToken { token, expires })
    .map_err(|err| {
        tracing::error!("Failed to sign access token: {}", err);
        Error::UnexpectedError
    })
}

pub fn verify_token(auth: &AuthContext, token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["sub", "exp"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => {
            tracing::debug!("Rejected access token: {}", err);
            Error::InvalidToken
        }
    })
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::UnexpectedError
        })
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_context() -> AuthContext {
        AuthContext {
            jwt_secret: String::from("a-test-secret-that-is-long-enough"),
            token_expiry_hours: 24,
        }
    }

    #[test]
    fn issued_token_carries_user_and_role() {
        let auth = auth_context();
        let issued = issue_token(&auth, "01HZXUSER", Role::VendorAdmin).unwrap();

        let claims = verify_token(&auth, &issued.token).unwrap();
        assert_eq!(claims.sub, "01HZXUSER");
        assert_eq!(claims.role, Role::VendorAdmin);
        assert_eq!(claims.exp, issued.expires.timestamp());
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let auth = AuthContext {
            token_expiry_hours: -1,
            ..auth_context()
        };
        let issued = issue_token(&auth, "01HZXUSER", Role::Customer).unwrap();

        assert_eq!(
            verify_token(&auth, &issued.token).unwrap_err(),
            Error::ExpiredToken
        );
    }

    #[test]
    fn token_signed_with_another_secret_is_invalid() {
        let issued = issue_token(&auth_context(), "01HZXUSER", Role::Admin).unwrap();
        let other = AuthContext {
            jwt_secret: String::from("some-other-secret"),
            ..auth_context()
        };

        assert_eq!(
            verify_token(&other, &issued.token).unwrap_err(),
            Error::InvalidToken
        );
        assert_eq!(
            verify_token(&other, "not-a-jwt").unwrap_err(),
            Error::InvalidToken
        );
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("correct horse battery").unwrap();

        assert_ne!(hash, "correct horse battery");
        assert!(verify_password("correct horse battery", &hash));
        assert!(!verify_password("wrong password", &hash));
        assert!(!verify_password("correct horse battery", "not-a-phc-string"));
    }
}
