use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is not a three-part JWT")]
    Malformed,
    #[error("Token payload is not valid base64url")]
    Encoding,
    #[error("Token payload is not valid JSON: {0}")]
    Payload(String),
    #[error("Token expired")]
    Expired,
}

/// Decoded access-token claims. `groups` drives every client-side role check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.username.is_empty() {
            self.username.clone()
        } else {
            self.email.clone()
        }
    }

    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now_secs)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.eq_ignore_ascii_case(group))
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    let decoded = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    serde_json::from_slice(&decoded).map_err(|e| TokenError::Payload(e.to_string()))
}

/// Decodes and rejects tokens whose `exp` is at or before `now_secs`.
pub fn decode_valid_claims(token: &str, now_secs: i64) -> Result<Claims, TokenError> {
    let claims = decode_claims(token)?;
    if claims.is_expired_at(now_secs) {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_groups_and_names() {
        let token = encode_test_token(&json!({
            "user_id": 7,
            "username": "maria",
            "first_name": "Maria",
            "last_name": "Lopes",
            "groups": ["funcionario"],
            "exp": 4_000_000_000i64
        }));
        let claims = decode_valid_claims(&token, 1_700_000_000).unwrap();
        assert_eq!(claims.user_id, Some(7));
        assert_eq!(claims.display_name(), "Maria Lopes");
        assert!(claims.has_group("funcionario"));
        assert!(!claims.has_group("administrador"));
    }

    #[test]
    fn missing_groups_default_to_empty() {
        let token = encode_test_token(&json!({"username": "ana"}));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.groups.is_empty());
        assert_eq!(claims.display_name(), "ana");
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = encode_test_token(&json!({"groups": [], "exp": 100}));
        assert_eq!(decode_valid_claims(&token, 100), Err(TokenError::Expired));
    }

    #[test]
    fn malformed_tokens_fail_without_panicking() {
        assert_eq!(decode_claims("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.@@@.c"), Err(TokenError::Encoding));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Payload(_))));
    }

    #[test]
    fn string_user_id_is_accepted() {
        let token = encode_test_token(&json!({"user_id": "12"}));
        assert_eq!(decode_claims(&token).unwrap().user_id, Some(12));
    }
}
