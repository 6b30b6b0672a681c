use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, ACCESS_TOKEN_TYPE};
use crate::auth::application::ports::outgoing::TokenClaims;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_topics: u64,
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    is_admin: bool,
    #[serde(default)]
    token_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Valid,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "NotYetValid" => Ok(TokenKind::NotYetValid),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Mint a token in a given state, signed with the configured secret.
/// GET /test/token/{token_kind}/{user_id}?is_admin=true&token_type=access
pub async fn generate_test_token(
    path: web::Path<(String, String)>,
    query: web::Query<TokenQuery>,
    jwt_config: web::Data<JwtConfig>,
) -> Result<HttpResponse> {
    let (token_kind_str, user_id_str) = path.into_inner();

    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;

    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    let query = query.into_inner();
    let token_type = query
        .token_type
        .unwrap_or_else(|| ACCESS_TOKEN_TYPE.to_string());

    tracing::debug!(
        kind = ?token_kind,
        %user_id,
        is_admin = query.is_admin,
        %token_type,
        "Generating test token"
    );

    let token = mint_token(
        &jwt_config,
        token_kind,
        user_id,
        query.is_admin,
        &token_type,
    )
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

fn mint_token(
    config: &JwtConfig,
    kind: TokenKind,
    user_id: Uuid,
    is_admin: bool,
    token_type: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();

    let (iat, nbf, exp) = match kind {
        TokenKind::Valid | TokenKind::InvalidSignature => (now, now, now + 3600),
        // Both offsets exceed the 30s verification leeway
        TokenKind::Expired => (now - 7200, now - 7200, now - 60),
        TokenKind::NotYetValid => (now, now + 300, now + 3600),
        TokenKind::Malformed => return Ok(format!("malformed.{}.token", Uuid::new_v4())),
    };

    let claims = TokenClaims {
        sub: user_id,
        iss: config.issuer.clone(),
        exp,
        iat,
        nbf,
        token_type: token_type.to_string(),
        is_admin,
    };

    let secret = if kind == TokenKind::InvalidSignature {
        "wrong-secret-wrong-secret-wrong-secret"
    } else {
        config.secret_key.as_str()
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Remove every topic row
/// DELETE /test/cleanup/topics
pub async fn cleanup_topics(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    let result = db
        .execute(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM topics",
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete topics: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_topics: result.rows_affected(),
    }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/cleanup/topics", web::delete().to(cleanup_topics))
            .route(
                "/token/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::JwtTokenService;
    use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

    fn config() -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_only_32b".to_string(),
            issuer: "topics".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn valid_token_verifies_with_admin_claim() {
        let user_id = Uuid::new_v4();
        let token = mint_token(&config(), TokenKind::Valid, user_id, true, "access").unwrap();

        let claims = JwtTokenService::new(config()).verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.is_admin);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = mint_token(&config(), TokenKind::Expired, Uuid::new_v4(), false, "access")
            .unwrap();

        let err = JwtTokenService::new(config()).verify_token(&token).unwrap_err();
        assert_eq!(err, TokenError::TokenExpired);
    }

    #[test]
    fn not_yet_valid_token_is_rejected() {
        let token = mint_token(
            &config(),
            TokenKind::NotYetValid,
            Uuid::new_v4(),
            false,
            "access",
        )
        .unwrap();

        let err = JwtTokenService::new(config()).verify_token(&token).unwrap_err();
        assert_eq!(err, TokenError::TokenNotYetValid);
    }

    #[test]
    fn invalid_signature_token_is_rejected() {
        let token = mint_token(
            &config(),
            TokenKind::InvalidSignature,
            Uuid::new_v4(),
            false,
            "access",
        )
        .unwrap();

        let err = JwtTokenService::new(config()).verify_token(&token).unwrap_err();
        assert_eq!(err, TokenError::InvalidSignature);
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        assert!("Forged".parse::<TokenKind>().is_err());
        assert_eq!("Malformed".parse::<TokenKind>(), Ok(TokenKind::Malformed));
    }
}
