use crate::utils::navigation::REGISTER_PATH;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

#[component]
pub fn LoginForm(
    email: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">"Iniciar Sessão"</h2>
                    <p class="mt-2 text-center text-sm text-gray-600">"Gestão de Residências"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| on_email_input.call(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| on_password_input.call(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "A entrar..." } else { "Entrar" }}
                    </button>
                    <p class="text-center text-sm text-gray-600">
                        "Ainda não tem conta? "
                        <a href=REGISTER_PATH class="text-blue-600 hover:underline">"Registar"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn error_is_shown_and_links_to_register() {
        let html = render_to_string(move || {
            view! {
                <LoginForm
                    email=Signal::derive(String::new)
                    password=Signal::derive(String::new)
                    error=Signal::derive(|| Some("Credenciais inválidas.".to_string()))
                    pending=Signal::derive(|| false)
                    on_email_input=Callback::new(|_| {})
                    on_password_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Credenciais inválidas."));
        assert!(html.contains("href=\"/register\""));
        assert!(html.contains("Entrar"));
    }
}
