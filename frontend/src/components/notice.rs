use crate::state::forms::MessageState;
use gloo_timers::callback::Timeout;
use leptos::*;

pub const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// Success/error banner driven by a [`MessageState`]. Clears itself after
/// [`NOTICE_TIMEOUT_MS`] or when dismissed.
#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<MessageState>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let timer = store_value(None::<Timeout>);
    create_effect(move |_| {
        let empty = notice.with(MessageState::is_empty);
        // Replacing the handle drops and cancels the previous countdown.
        timer.set_value(None);
        if !empty {
            timer.set_value(Some(Timeout::new(NOTICE_TIMEOUT_MS, move || {
                on_dismiss.call(())
            })));
        }
    });

    view! {
        {move || {
            let state = notice.get();
            let (class, text, role) = if let Some(error) = state.error {
                ("bg-red-50 border-red-300 text-red-800", error, "alert")
            } else if let Some(success) = state.success {
                ("bg-green-50 border-green-300 text-green-800", success, "status")
            } else {
                return ().into_view();
            };
            view! {
                <div class=format!("flex items-start justify-between border px-4 py-3 rounded mb-4 {}", class) role=role>
                    <p class="text-sm">{text}</p>
                    <button
                        type="button"
                        aria-label="Fechar"
                        class="ml-4 text-sm opacity-70 hover:opacity-100"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "✕"
                    </button>
                </div>
            }
            .into_view()
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(state: MessageState) -> String {
        render_to_string(move || {
            let notice = create_rw_signal(state);
            view! { <NoticeBanner notice=notice on_dismiss=Callback::new(|_| {}) /> }
        })
    }

    #[test]
    fn renders_error_with_alert_role() {
        let mut state = MessageState::default();
        state.set_error("Erro ao eliminar quarto: Sem permissão.");
        let html = render(state);
        assert!(html.contains("Erro ao eliminar quarto: Sem permissão."));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn renders_success_with_status_role() {
        let mut state = MessageState::default();
        state.set_success("Quarto eliminado com sucesso.");
        let html = render(state);
        assert!(html.contains("Quarto eliminado com sucesso."));
        assert!(html.contains("role=\"status\""));
    }

    #[test]
    fn renders_nothing_when_empty() {
        let html = render(MessageState::default());
        assert!(!html.contains("role="));
    }
}
