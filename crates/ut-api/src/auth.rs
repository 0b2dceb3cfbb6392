use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use clap::ValueEnum;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum AuthMode {
    ApiKey,
    Jwt,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub api_key: Option<String>,
    pub jwt_secret: Option<String>,
}

/// Verified caller identity, one per authenticated request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

impl AuthConfig {
    /// Checks request credentials against the configured mode. Token issuance
    /// is Supabase's job; only signatures are verified here.
    fn verify(&self, parts: &Parts) -> Result<AuthUser, ApiError> {
        match self.mode {
            AuthMode::ApiKey => self.verify_api_key(parts),
            AuthMode::Jwt => self.verify_bearer(parts),
        }
    }

    fn verify_api_key(&self, parts: &Parts) -> Result<AuthUser, ApiError> {
        let expected = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("server has no API key configured".into()))?;

        match header_str(parts, "x-api-key") {
            Some(provided) if provided == expected => Ok(AuthUser {
                subject: "api_key".into(),
            }),
            Some(_) => Err(ApiError::Unauthorized("invalid API key".into())),
            None => Err(ApiError::Unauthorized("missing X-API-Key header".into())),
        }
    }

    fn verify_bearer(&self, parts: &Parts) -> Result<AuthUser, ApiError> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("server has no JWT secret configured".into()))?;

        let token = header_str(parts, AUTHORIZATION.as_str())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized("expected Bearer token".into()))?;

        let mut validation = Validation::new(Algorithm::HS256);
        // Supabase audiences differ between access and service tokens.
        validation.validate_aud = false;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|err| ApiError::Unauthorized(format!("invalid token: {err}")))?
        .claims;

        Ok(AuthUser {
            subject: claims.sub,
        })
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AuthConfig::from_ref(state).verify(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn parts_with_header(name: &str, value: &str) -> Parts {
        Request::builder()
            .header(name, value)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    fn api_key_config(key: &str) -> AuthConfig {
        AuthConfig {
            mode: AuthMode::ApiKey,
            api_key: Some(key.into()),
            jwt_secret: None,
        }
    }

    fn jwt_config(secret: &str) -> AuthConfig {
        AuthConfig {
            mode: AuthMode::Jwt,
            api_key: None,
            jwt_secret: Some(secret.into()),
        }
    }

    #[test]
    fn accepts_matching_api_key() {
        let config = api_key_config("scoring-key");
        let parts = parts_with_header("x-api-key", "scoring-key");

        let user = config.verify(&parts).unwrap();
        assert_eq!(user.subject, "api_key");
    }

    #[test]
    fn rejects_wrong_or_missing_api_key() {
        let config = api_key_config("scoring-key");

        let wrong = parts_with_header("x-api-key", "other");
        assert!(matches!(
            config.verify(&wrong),
            Err(ApiError::Unauthorized(_))
        ));

        let missing = Request::builder().body(()).unwrap().into_parts().0;
        assert!(matches!(
            config.verify(&missing),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn extracts_subject_from_a_signed_token() {
        let config = jwt_config("topsecret");
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = encode(
            &Header::default(),
            &json!({ "sub": "user-42", "aud": "authenticated", "exp": exp }),
            &EncodingKey::from_secret(b"topsecret"),
        )
        .unwrap();

        let parts = parts_with_header("authorization", &format!("Bearer {token}"));
        let user = config.verify(&parts).unwrap();
        assert_eq!(user.subject, "user-42");
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let config = jwt_config("topsecret");
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = encode(
            &Header::default(),
            &json!({ "sub": "user-42", "exp": exp }),
            &EncodingKey::from_secret(b"not-the-secret"),
        )
        .unwrap();

        let parts = parts_with_header("authorization", &format!("Bearer {token}"));
        assert!(matches!(
            config.verify(&parts),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
