use crate::{
    components::{confirm_dialog::ConfirmDialog, layout::LoadingSpinner, notice::NoticeBanner},
    state::{
        forms::MessageState,
        listing::{Identified, ListState, Searchable, PAGE_SIZES},
    },
};
use leptos::*;

pub const CELL: &str = "px-4 py-3 text-sm text-gray-700 whitespace-nowrap";

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="w-full sm:w-64 rounded-md border border-gray-300 px-3 py-2 text-sm"
            placeholder=placeholder.unwrap_or_else(|| "Pesquisar...".to_string())
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[component]
pub fn PageSizeSelect(#[prop(into)] value: Signal<usize>, on_change: Callback<usize>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-gray-600">
            "Mostrar"
            <select
                class="rounded-md border border-gray-300 px-2 py-1 text-sm"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or_default();
                    on_change.call(size);
                }
            >
                {PAGE_SIZES
                    .iter()
                    .map(|size| {
                        let size = *size;
                        view! {
                            <option value=size.to_string() selected=move || value.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

pub fn page_summary(page: usize, page_count: usize, total: usize) -> String {
    if page_count == 0 {
        "0 registos".to_string()
    } else {
        format!("Página {} de {} ({} registos)", page + 1, page_count, total)
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let button = "rounded-md border border-gray-300 px-3 py-1 text-sm disabled:opacity-50";
    view! {
        <div class="flex items-center justify-between mt-4 text-sm text-gray-600">
            <span>{move || page_summary(page.get(), page_count.get(), total.get())}</span>
            <div class="flex gap-2">
                <button
                    type="button"
                    class=button
                    disabled=move || page.get() == 0
                    on:click=move |_| on_previous.call(())
                >
                    "Anterior"
                </button>
                <button
                    type="button"
                    class=button
                    disabled=move || page.get() + 1 >= page_count.get()
                    on:click=move |_| on_next.call(())
                >
                    "Seguinte"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-300 bg-gray-50">
            <h3 class="text-sm font-semibold text-gray-700">{title}</h3>
        </div>
    }
}

/// View / edit / delete links for one table row. Absent props hide the
/// matching control.
#[component]
pub fn RowActions(
    #[prop(into)] view_href: String,
    #[prop(default = None)] edit_href: Option<String>,
    #[prop(default = None)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex gap-3 text-sm">
            <a href=view_href class="text-blue-600 hover:underline">"Ver"</a>
            {edit_href.map(|href| view! { <a href=href class="text-gray-700 hover:underline">"Editar"</a> })}
            {on_delete.map(|on_delete| view! {
                <button type="button" class="text-red-600 hover:underline" on:click=move |_| on_delete.call(())>
                    "Eliminar"
                </button>
            })}
        </div>
    }
}

/// Banner content of `list`. Only a changed message notifies, so paging
/// and searching leave the banner countdown alone.
pub fn list_notice<T: 'static>(list: RwSignal<ListState<T>>) -> Memo<MessageState> {
    create_memo(move |_| list.with(|state| state.notice.clone()))
}

/// Search, page size, table, pagination and banner for a fetched
/// collection. Rows are drawn by `row`.
#[component]
pub fn ListView<T, R, V>(
    list: RwSignal<ListState<T>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    headers: Vec<&'static str>,
    row: R,
    #[prop(optional, into)] empty_label: Option<String>,
) -> impl IntoView
where
    T: Clone + Identified + Searchable + 'static,
    R: Fn(T) -> V + Copy + 'static,
    V: IntoView,
{
    let empty_label = empty_label.unwrap_or_else(|| "Nenhum registo encontrado.".to_string());
    let rows = Signal::derive(move || list.with(|state| state.visible_rows()));

    view! {
        <div>
            <NoticeBanner
                notice=list_notice(list)
                on_dismiss=Callback::new(move |_| list.update(|state| state.notice.clear()))
            />
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2 mb-4">
                <SearchBox
                    value=Signal::derive(move || list.with(|state| state.search.clone()))
                    on_input=Callback::new(move |value: String| list.update(|state| state.set_search(value)))
                />
                <PageSizeSelect
                    value=Signal::derive(move || list.with(|state| state.page_size))
                    on_change=Callback::new(move |size| list.update(|state| state.set_page_size(size)))
                />
            </div>
            {move || {
                if let Some(error) = load_error.get() {
                    return view! {
                        <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded mb-4" role="alert">
                            {error}
                        </div>
                    }
                    .into_view();
                }
                if loading.get() && list.with(|state| state.records.is_empty()) {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if rows.with(Vec::is_empty) {
                    return view! { <EmptyState title=empty_label.clone() /> }.into_view();
                }
                view! {
                    <div class="overflow-x-auto bg-white shadow rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    {headers
                                        .iter()
                                        .map(|header| view! {
                                            <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{*header}</th>
                                        })
                                        .collect_view()}
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {rows.get().into_iter().map(row).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_view()
            }}
            <Pagination
                page=Signal::derive(move || list.with(|state| state.page))
                page_count=Signal::derive(move || list.with(|state| state.page_count()))
                total=Signal::derive(move || list.with(|state| state.filtered_count()))
                on_previous=Callback::new(move |_| list.update(|state| state.previous_page()))
                on_next=Callback::new(move |_| list.update(|state| state.next_page()))
            />
        </div>
    }
}

/// Confirmation for a pending row delete. `on_confirm` receives the id and
/// the prompt closes either way.
#[component]
pub fn DeletePrompt(
    pending: RwSignal<Option<i64>>,
    #[prop(into)] message: String,
    on_confirm: Callback<i64>,
) -> impl IntoView {
    view! {
        <ConfirmDialog
            is_open=Signal::derive(move || pending.get().is_some())
            title="Confirmar eliminação"
            message=message
            destructive=true
            confirm_label="Eliminar"
            cancel_label="Cancelar"
            on_confirm=Callback::new(move |_| {
                if let Some(id) = pending.get_untracked() {
                    on_confirm.call(id);
                }
                pending.set(None);
            })
            on_cancel=Callback::new(move |_| pending.set(None))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_summary_is_one_based() {
        assert_eq!(page_summary(0, 3, 25), "Página 1 de 3 (25 registos)");
        assert_eq!(page_summary(0, 0, 0), "0 registos");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Building, BuildingType};
    use crate::test_support::ssr::{render_to_string, with_runtime};

    fn building(id: i64, nome: &str) -> Building {
        Building {
            id,
            nome: nome.into(),
            endereco: "Praia".into(),
            numero_apartamentos: 4,
            tipo: BuildingType::Residencial,
        }
    }

    fn render_list(state: ListState<Building>, loading: bool, error: Option<String>) -> String {
        render_to_string(move || {
            let list = create_rw_signal(state);
            view! {
                <ListView
                    list=list
                    loading=Signal::derive(move || loading)
                    load_error=Signal::derive(move || error.clone())
                    headers=vec!["Nome"]
                    row=|b: Building| view! { <tr><td>{b.nome}</td></tr> }
                />
            }
        })
    }

    #[test]
    fn list_renders_only_current_page() {
        let rows = (1..=12).map(|i| building(i, &format!("Bloco-{:02}", i))).collect();
        let html = render_list(ListState::new(rows), false, None);
        assert!(html.contains("Bloco-10"));
        assert!(!html.contains("Bloco-11"));
        assert!(html.contains("Página 1 de 2 (12 registos)"));
    }

    #[test]
    fn list_shows_empty_state() {
        let html = render_list(ListState::default(), false, None);
        assert!(html.contains("Nenhum registo encontrado."));
    }

    #[test]
    fn list_shows_load_error() {
        let html = render_list(ListState::default(), false, Some("Erro HTTP 500".into()));
        assert!(html.contains("Erro HTTP 500"));
    }

    #[test]
    fn banner_ignores_search_and_paging() {
        with_runtime(|| {
            let rows = (1..=12).map(|i| building(i, &format!("Bloco-{:02}", i))).collect();
            let list = create_rw_signal(ListState::new(rows));
            let notice = list_notice(list);
            let runs = create_rw_signal(0);
            create_isomorphic_effect(move |_| {
                notice.track();
                runs.update_untracked(|n| *n += 1);
            });
            assert_eq!(runs.get_untracked(), 1);

            list.update(|state| state.set_search("Bloco"));
            list.update(|state| state.next_page());
            assert_eq!(runs.get_untracked(), 1);

            list.update(|state| state.notice.set_success("Edifício eliminado com sucesso."));
            assert_eq!(runs.get_untracked(), 2);
        });
    }

    #[test]
    fn row_actions_hide_missing_controls() {
        let html = render_to_string(move || {
            view! { <RowActions view_href="/edificios/1" /> }
        });
        assert!(html.contains("/edificios/1"));
        assert!(!html.contains("Editar"));
        assert!(!html.contains("Eliminar"));
    }
}
