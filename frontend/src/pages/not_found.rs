use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let home = move || {
        let state = auth.get();
        if state.is_authenticated {
            state.landing_route()
        } else {
            crate::utils::navigation::LOGIN_PATH
        }
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <h1 class="text-6xl font-bold text-gray-300">"404"</h1>
            <p class="mt-4 text-lg text-gray-700">"Página não encontrada."</p>
            <a href=home class="mt-6 text-blue-600 hover:underline">"Voltar ao início"</a>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, student_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn links_back_to_the_landing_route() {
        let html = render_to_string(move || {
            provide_auth(Some(student_claims()));
            view! { <NotFoundPage /> }
        });
        assert!(html.contains("Página não encontrada."));
        assert!(html.contains("href=\"/inicio\""));
    }

    #[test]
    fn anonymous_visitors_go_to_login() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <NotFoundPage /> }
        });
        assert!(html.contains("href=\"/login\""));
    }
}
