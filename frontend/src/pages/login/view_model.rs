use super::utils;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth::{self, LoginOutcome};
use leptos::*;
use leptos_router::{use_location, use_navigate};

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<LoginOutcome, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match utils::validate_credentials(
            &self.form.email.get_untracked(),
            &self.form.password.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(outcome) => {
                    error.set(None);
                    form.password.set(String::new());
                    let target = utils::post_login_target(&outcome, &location.search.get_untracked());
                    navigate(&target, Default::default());
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
