use crate::users::UserRole;
use anyhow::Context;
use jsonwebtoken::dangerous::insecure_decode;
use serde_derive::Deserialize;

/// Claims of the session token issued by the Photo Quest API. The client can't verify the token
/// signature, claims are only used to route the user after login.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl TokenClaims {
    /// Extracts claims from the specified token without verifying its signature.
    pub fn decode(token: &str) -> anyhow::Result<Self> {
        Ok(insecure_decode::<TokenClaims>(token)
            .context("Cannot decode session token claims.")?
            .claims)
    }
}

#[cfg(test)]
mod tests {
    use super::TokenClaims;
    use crate::{tests::mock_token, users::UserRole};
    use serde_json::json;

    #[test]
    fn decodes_claims() -> anyhow::Result<()> {
        let claims = TokenClaims::decode(&mock_token(json!({
            "user_id": "665f1b2c9d1e4a0012345678",
            "username": "devquest",
            "avatar_url": "",
            "role": "admin",
            "exp": 1_900_000_000
        })))?;
        assert_eq!(
            claims,
            TokenClaims {
                user_id: Some("665f1b2c9d1e4a0012345678".to_string()),
                username: Some("devquest".to_string()),
                role: UserRole::Admin,
            }
        );

        Ok(())
    }

    #[test]
    fn missing_role_defaults_to_user() -> anyhow::Result<()> {
        let claims = TokenClaims::decode(&mock_token(json!({ "user_id": "1" })))?;
        assert_eq!(claims.role, UserRole::User);

        let claims = TokenClaims::decode(&mock_token(json!({ "role": "" })))?;
        assert_eq!(claims.role, UserRole::Other);

        Ok(())
    }

    #[test]
    fn ignores_expiration_and_signature() -> anyhow::Result<()> {
        let token = mock_token(json!({ "username": "devquest", "exp": 1 }));
        let (payload, _) = token
            .rsplit_once('.')
            .ok_or_else(|| anyhow::anyhow!("Token should have a signature."))?;

        let claims = TokenClaims::decode(&format!("{payload}.c2lnbmF0dXJl"))?;
        assert_eq!(claims.username.as_deref(), Some("devquest"));

        Ok(())
    }

    #[test]
    fn fails_for_malformed_token() {
        assert!(TokenClaims::decode("not-a-token").is_err());
    }
}
