use crate::{
    components::layout::{ErrorMessage, LoadingSpinner},
    hooks::RecordResource,
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-blue-600",
            ButtonVariant::Secondary => "bg-white hover:bg-gray-50 text-gray-700 border border-gray-300",
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white shadow-sm",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// A labelled pair on detail pages.
#[component]
pub fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="py-2 grid grid-cols-3 gap-4">
            <dt class="text-sm font-medium text-gray-500">{label}</dt>
            <dd class="text-sm text-gray-900 col-span-2">{value}</dd>
        </div>
    }
}

#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-6">
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
            <div class="flex gap-2">{children.map(|c| c())}</div>
        </div>
    }
}

/// Loading, error, not-found and loaded states of a single fetched record.
#[component]
pub fn RecordView<T, R, V>(record: RecordResource<T>, render: R) -> impl IntoView
where
    T: Clone + 'static,
    R: Fn(T) -> V + 'static,
    V: IntoView,
{
    view! {
        {move || match record.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
            Some(Ok(None)) => view! { <ErrorMessage message="Registo não encontrado." /> }.into_view(),
            Some(Ok(Some(value))) => render(value).into_view(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-blue-600"));
        assert!(ButtonVariant::Danger.classes().contains("bg-red-600"));
        assert_ne!(ButtonVariant::Secondary.classes(), ButtonVariant::Primary.classes());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_button_is_disabled_with_spinner() {
        let html = render_to_string(move || {
            view! { <Button loading=true>"Gravar"</Button> }
        });
        assert!(html.contains("Gravar"));
        assert!(html.contains("disabled"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn page_header_and_detail_row_render() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <PageHeader title="Edifícios" />
                    <DetailRow label="Nome" value="Bloco A" />
                </div>
            }
        });
        assert!(html.contains("Edifícios"));
        assert!(html.contains("Bloco A"));
    }
}
