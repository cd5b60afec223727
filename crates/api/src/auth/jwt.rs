//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs carrying the usuario id and the names
//! of the roles assigned to it at login time.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use prefab_core::roles::RoleSet;
use prefab_core::types::DbId;
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub usuario_id: DbId,
    /// Role names, e.g. `"super_administrador"`.
    pub roles: Vec<String>,
    pub iss: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Not three non-empty `.`-separated JWS segments.
    #[error("Token malformado")]
    Malformed,
    /// Signature, issuer or claim shape is wrong.
    #[error("Token inválido")]
    Invalid,
    #[error("Token expirado")]
    Expired,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in hours (default: 24).
    pub expiry_hours: i64,
    /// `iss` claim written and required (default: `miApp`).
    pub issuer: String,
}

const DEFAULT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_ISSUER: &str = "miApp";

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    /// | `JWT_ISSUER`       | no       | `miApp` |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.trim().is_empty(), "JWT_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());

        Self {
            secret,
            expiry_hours,
            issuer,
        }
    }
}

/// Generate an HS256 access token for a usuario and its roles.
pub fn generate_access_token(
    usuario_id: DbId,
    roles: &RoleSet,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        usuario_id,
        roles: roles.to_vec(),
        iss: config.issuer.clone(),
        exp: now + config.expiry_hours * 3600,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token.
///
/// No leeway is granted: a token is expired the second after `exp`.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    if !is_compact_jws(token) {
        return Err(TokenError::Malformed);
    }

    let mut validation = Validation::default(); // HS256, validates exp
    validation.leeway = 0;
    validation.set_issuer(&[config.issuer.as_str()]);
    validation.set_required_spec_claims(&["exp", "iss"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}

fn is_compact_jws(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3 && segments.iter().all(|s| !s.is_empty())
}
