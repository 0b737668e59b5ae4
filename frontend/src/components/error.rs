use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

const SUMMARY_KEYS: [&str; 4] = ["detail", "error", "message", "non_field_errors"];

/// Per-field messages from a 400 body, `field: message` each, skipping the
/// keys that already feed the headline.
pub fn field_messages(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    let Some(Value::Object(fields)) = error.details.as_ref() else {
        return Vec::new();
    };
    fields
        .iter()
        .filter(|(field, _)| !SUMMARY_KEYS.contains(&field.as_str()))
        .flat_map(|(field, value)| {
            let messages: Vec<String> = match value {
                Value::String(msg) => vec![msg.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            messages
                .into_iter()
                .map(move |msg| format!("{}: {}", field, msg))
        })
        .filter(|line| line != &error.error)
        .collect()
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let lines = error.get().map(|e| field_messages(&e)).unwrap_or_default();
                    if lines.is_empty() {
                        ().into_view()
                    } else {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_field_details() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(
                400,
                r#"{"detail":"Dados inválidos.","nome":["Campo obrigatório."]}"#.as_bytes(),
            );
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Dados inválidos."));
        assert!(html.contains("nome: Campo obrigatório."));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
