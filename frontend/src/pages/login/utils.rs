use crate::{
    api::LoginRequest,
    state::auth::LoginOutcome,
    utils::navigation::{next_from_query, TWO_FACTOR_PATH},
};

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    if email.trim().is_empty() {
        return Err("Email é obrigatório.".into());
    }
    if password.is_empty() {
        return Err("Password é obrigatória.".into());
    }
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Where to go after a successful login call. A safe `next` from the query
/// wins over the role landing page.
pub fn post_login_target(outcome: &LoginOutcome, query: &str) -> String {
    match outcome {
        LoginOutcome::TwoFactorRequired => TWO_FACTOR_PATH.to_string(),
        LoginOutcome::Authenticated { landing } => {
            next_from_query(query).unwrap_or_else(|| landing.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_rejected_before_request() {
        assert_eq!(
            validate_credentials(" ", "x").unwrap_err(),
            "Email é obrigatório."
        );
        assert_eq!(
            validate_credentials("a@uni.cv", "").unwrap_err(),
            "Password é obrigatória."
        );
        let request = validate_credentials(" a@uni.cv ", "segredo1").unwrap();
        assert_eq!(request.email, "a@uni.cv");
    }

    #[test]
    fn next_param_overrides_landing() {
        let outcome = LoginOutcome::Authenticated { landing: "/inicio" };
        assert_eq!(post_login_target(&outcome, ""), "/inicio");
        assert_eq!(post_login_target(&outcome, "?next=/camas"), "/camas");
        assert_eq!(
            post_login_target(&outcome, "?next=https://evil.example"),
            "/inicio"
        );
        assert_eq!(
            post_login_target(&LoginOutcome::TwoFactorRequired, "?next=/camas"),
            "/2fa-verification"
        );
    }
}
