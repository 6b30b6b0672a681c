use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService, ACCESS_TOKEN_TYPE};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_32b";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "topics".to_string(),
        secret_key: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    })
}

/// Header carrying the placeholder token accepted by [`StubTokenProvider`].
pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

pub fn bearer_for(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Token provider that ignores the token and answers with fixed claims.
#[derive(Clone)]
pub struct StubTokenProvider {
    result: Result<TokenClaims, TokenError>,
}

impl StubTokenProvider {
    fn claims(user_id: Uuid, is_admin: bool, token_type: &str) -> TokenClaims {
        TokenClaims {
            sub: user_id,
            iss: "topics".to_string(),
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: token_type.to_string(),
            is_admin,
        }
    }

    pub fn admin(user_id: Uuid) -> Self {
        Self {
            result: Ok(Self::claims(user_id, true, ACCESS_TOKEN_TYPE)),
        }
    }

    pub fn regular(user_id: Uuid) -> Self {
        Self {
            result: Ok(Self::claims(user_id, false, ACCESS_TOKEN_TYPE)),
        }
    }

    pub fn with_token_type(token_type: &str) -> Self {
        Self {
            result: Ok(Self::claims(Uuid::new_v4(), true, token_type)),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            result: Err(TokenError::InvalidSignature),
        }
    }

    pub fn into_app_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _is_admin: bool) -> Result<String, TokenError> {
        unimplemented!("Not used in route tests")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.result.clone()
    }
}
