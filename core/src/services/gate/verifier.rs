//! JWT signature and expiry verification

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::entities::Claims;
use crate::errors::{DomainError, TokenError};

/// Verifies a bearer token against a key bound at construction
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// `jsonwebtoken` backed verifier
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Build an RS256 verifier from a PEM encoded public key
    ///
    /// # Arguments
    /// * `public_key_pem` - RSA public key issued by the user service
    /// * `leeway` - Clock skew tolerated on `exp`, in seconds
    pub fn from_rsa_pem(public_key_pem: &str, leeway: u64) -> Result<Self, DomainError> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| DomainError::internal(format!("Invalid public key format: {}", e)))?;

        Ok(Self {
            decoding_key,
            validation: Self::validation(Algorithm::RS256, leeway),
        })
    }

    /// HS256 verifier over a shared secret
    pub fn from_secret(secret: &[u8], leeway: u64) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::validation(Algorithm::HS256, leeway),
        }
    }

    fn validation(algorithm: Algorithm, leeway: u64) -> Validation {
        let mut validation = Validation::new(algorithm);
        // Tokens are issued for several services without a fixed audience
        validation.validate_aud = false;
        validation.validate_exp = true;
        validation.leeway = leeway;
        validation
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed {
                    reason: e.to_string(),
                },
            })
    }
}
