use leptos::*;

const INPUT_BASE: &str = "mt-1 block w-full rounded-md border px-3 py-2 text-sm shadow-sm";

fn input_class(invalid: bool) -> String {
    if invalid {
        format!("{} border-red-500 focus:ring-red-500", INPUT_BASE)
    } else {
        format!("{} border-gray-300 focus:ring-blue-500", INPUT_BASE)
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|msg| view! { <p class="mt-1 text-xs text-red-600">{msg}</p> })}
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="mb-4">
            <label for=name.clone() class="block text-sm font-medium text-gray-700">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=name.clone()
                name=name
                type=input_type
                class=move || input_class(error.with(Option::is_some))
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// `options` are `(value, label)` pairs. An empty `value` selects the
/// placeholder.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Selecione...".to_string());
    view! {
        <div class="mb-4">
            <label for=name.clone() class="block text-sm font-medium text-gray-700">
                {label}
                {required.then_some(" *")}
            </label>
            <select
                id=name.clone()
                name=name
                class=move || input_class(error.with(Option::is_some))
                aria-invalid=move || error.with(Option::is_some).to_string()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let current = option_value.clone();
                            view! {
                                <option value=option_value selected=move || value.get() == current>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn FormActions(
    #[prop(into)] cancel_href: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(optional, into)] submit_label: Option<String>,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Gravar".to_string());
    view! {
        <div class="flex justify-end gap-2 mt-6">
            <a href=cancel_href class="rounded-md border border-gray-300 px-4 py-2 text-sm text-gray-700 hover:bg-gray-50">
                "Cancelar"
            </a>
            <button
                type="submit"
                class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700 disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "A gravar...".to_string() } else { submit_label.clone() }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_inputs_get_red_border() {
        assert!(input_class(true).contains("border-red-500"));
        assert!(!input_class(false).contains("border-red-500"));
    }
}
