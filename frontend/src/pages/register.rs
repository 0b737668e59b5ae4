use crate::{
    api::RegisterRequest,
    components::forms::TextField,
    state::{
        auth::use_register_action,
        forms::{looks_like_email, FieldErrors},
    },
    utils::navigation::LOGIN_PATH,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterFields {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("username", &self.username, "Username é obrigatório.");
        if self.email.trim().is_empty() {
            errors.add("email", "Email é obrigatório.");
        } else if !looks_like_email(&self.email) {
            errors.add("email", "Email inválido.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("A password deve ter pelo menos {} caracteres.", MIN_PASSWORD_LEN),
            );
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "As passwords não coincidem.");
        }
        errors.into_result()?;
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.clone(),
            password2: self.confirm_password.clone(),
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let fields = create_rw_signal(RegisterFields::default());
    let errors = create_rw_signal(FieldErrors::new());
    let failure = create_rw_signal(None::<String>);
    let register = use_register_action();
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(result) = register.value().get() {
            match result {
                Ok(()) => navigate(LOGIN_PATH, Default::default()),
                Err(err) => failure.set(Some(err.error)),
            }
        }
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if register.pending().get_untracked() {
            return;
        }
        match fields.with_untracked(RegisterFields::validate) {
            Ok(request) => {
                errors.set(FieldErrors::new());
                failure.set(None);
                register.dispatch(request);
            }
            Err(invalid) => errors.set(invalid),
        }
    });

    view! {
        <RegisterForm
            fields=fields
            errors=errors
            failure=failure.into()
            pending=register.pending().into()
            on_submit=on_submit
        />
    }
}

#[component]
pub fn RegisterForm(
    fields: RwSignal<RegisterFields>,
    errors: RwSignal<FieldErrors>,
    failure: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |get: fn(&RegisterFields) -> String, set: fn(&mut RegisterFields, String)| {
        (
            Signal::derive(move || fields.with(get)),
            Callback::new(move |value: String| fields.update(|f| set(f, value))),
        )
    };
    let error_for = move |name: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)))
    };
    let (username, set_username) = field(|f| f.username.clone(), |f, v| f.username = v);
    let (email, set_email) = field(|f| f.email.clone(), |f, v| f.email = v);
    let (first_name, set_first_name) = field(|f| f.first_name.clone(), |f, v| f.first_name = v);
    let (last_name, set_last_name) = field(|f| f.last_name.clone(), |f, v| f.last_name = v);
    let (password, set_password) = field(|f| f.password.clone(), |f, v| f.password = v);
    let (confirm, set_confirm) = field(|f| f.confirm_password.clone(), |f, v| f.confirm_password = v);

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow-lg p-8">
                <h2 class="text-2xl font-semibold text-center mb-6">"Registar"</h2>
                {move || failure.get().map(|msg| view! {
                    <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded mb-4" role="alert">{msg}</div>
                })}
                <form on:submit=move |ev| on_submit.call(ev)>
                    <TextField label="Username" name="username" value=username on_input=set_username error=error_for("username") required=true />
                    <TextField label="Email" name="email" input_type="email" value=email on_input=set_email error=error_for("email") required=true />
                    <TextField label="Primeiro nome" name="first_name" value=first_name on_input=set_first_name />
                    <TextField label="Apelido" name="last_name" value=last_name on_input=set_last_name />
                    <TextField
                        label="Password"
                        name="password"
                        input_type="password"
                        value=password
                        on_input=set_password
                        error=error_for("password")
                        required=true
                    />
                    <TextField
                        label="Confirmar password"
                        name="confirm_password"
                        input_type="password"
                        value=confirm
                        on_input=set_confirm
                        error=error_for("confirm_password")
                        required=true
                    />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full rounded-md bg-blue-600 py-2 text-sm font-semibold text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "A registar..." } else { "Registar" }}
                    </button>
                    <p class="mt-4 text-center text-sm text-gray-600">
                        "Já tem conta? "
                        <a href=LOGIN_PATH class="text-blue-600 hover:underline">"Iniciar sessão"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterFields {
        RegisterFields {
            username: "novo".into(),
            email: "novo@uni.cv".into(),
            first_name: "Nuno".into(),
            last_name: String::new(),
            password: "segredo12".into(),
            confirm_password: "segredo12".into(),
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let fields = RegisterFields {
            password: "curta".into(),
            confirm_password: "curta".into(),
            ..filled()
        };
        let errors = fields.validate().unwrap_err();
        assert!(errors.has("password"));
        assert!(!errors.has("confirm_password"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let fields = RegisterFields {
            confirm_password: "segredo13".into(),
            ..filled()
        };
        let errors = fields.validate().unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("As passwords não coincidem."));
    }

    #[test]
    fn valid_fields_build_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.username, "novo");
        assert_eq!(request.password2, "segredo12");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_errors_and_failure_render() {
        let html = render_to_string(move || {
            let fields = create_rw_signal(RegisterFields {
                password: "a".into(),
                ..RegisterFields::default()
            });
            let errors = create_rw_signal(fields.get_untracked().validate().unwrap_err());
            view! {
                <RegisterForm
                    fields=fields
                    errors=errors
                    failure=Signal::derive(|| Some("Utilizador já existe.".to_string()))
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Utilizador já existe."));
        assert!(html.contains("As passwords não coincidem."));
        assert!(html.contains("Username é obrigatório."));
    }
}
