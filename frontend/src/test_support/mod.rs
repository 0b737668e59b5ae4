#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::AuthState;
    use crate::utils::token::Claims;
    use leptos::*;

    fn claims(id: i64, username: &str, group: &str) -> Claims {
        Claims {
            user_id: Some(id),
            username: username.into(),
            email: format!("{}@uni.cv", username),
            first_name: String::new(),
            last_name: String::new(),
            groups: vec![group.into()],
            exp: None,
        }
    }

    pub fn student_claims() -> Claims {
        claims(10, "estudante1", "estudante")
    }

    pub fn staff_claims() -> Claims {
        claims(20, "funcionario1", "funcionario")
    }

    pub fn admin_claims() -> Claims {
        claims(30, "admin", "administrador")
    }

    pub fn provide_auth(user: Option<Claims>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            access_token: is_authenticated.then(|| "test-token".to_string()),
            is_authenticated,
            ..AuthState::default()
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
