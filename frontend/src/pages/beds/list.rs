use crate::{
    api::{ApiClient, Bed, BedStatus},
    components::{
        common::PageHeader,
        guard::VisibleIf,
        list::{DeletePrompt, ListView, RowActions, CELL},
    },
    hooks::use_collection,
    state::{
        auth::use_auth,
        listing::ListState,
        permissions::{Action as Capability, Resource},
    },
};
use leptos::*;

fn status_class(status: BedStatus) -> &'static str {
    match status {
        BedStatus::Disponivel => "text-green-700",
        BedStatus::Ocupado => "text-red-700",
    }
}

#[component]
pub fn BedsPage() -> impl IntoView {
    let beds = use_collection(|api: ApiClient| async move { api.list_beds().await });
    let pending_delete = create_rw_signal(None::<i64>);

    view! {
        <PageHeader title="Camas">
            <VisibleIf resource=Resource::Bed action=Capability::Create>
                <a href="/camas/criar" class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white">
                    "Nova Cama"
                </a>
            </VisibleIf>
        </PageHeader>
        <BedsTable
            list=beds.list
            loading=beds.loading
            load_error=beds.load_error
            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
        />
        <DeletePrompt
            pending=pending_delete
            message="Tem a certeza que deseja eliminar esta cama?"
            on_confirm=Callback::new(move |id| {
                beds.delete(
                    id,
                    |api, id| async move { api.delete_bed(id).await },
                    "Cama eliminada com sucesso.",
                    "Erro ao eliminar cama:",
                )
            })
        />
    }
}

#[component]
pub fn BedsTable(
    list: RwSignal<ListState<Bed>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let can_edit = Signal::derive(move || auth.get().can(Resource::Bed, Capability::Edit));
    let can_delete = Signal::derive(move || auth.get().can(Resource::Bed, Capability::Delete));

    let row = move |bed: Bed| {
        let id = bed.id;
        let resident = bed
            .residente
            .as_ref()
            .map(|r| r.display())
            .unwrap_or_else(|| "-".to_string());
        view! {
            <tr>
                <td class=CELL>{bed.numero}</td>
                <td class=CELL>{bed.quarto.display()}</td>
                <td class=CELL>
                    <span class=status_class(bed.status)>{bed.status.as_str()}</span>
                </td>
                <td class=CELL>{resident}</td>
                <td class=CELL>
                    <RowActions
                        view_href=format!("/camas/{}", id)
                        edit_href=can_edit.get().then(|| format!("/camas/editar/{}", id))
                        on_delete=can_delete.get().then(|| Callback::new(move |_| on_delete.call(id)))
                    />
                </td>
            </tr>
        }
    };

    view! {
        <ListView
            list=list
            loading=loading
            load_error=load_error
            headers=vec!["Número", "Quarto", "Status", "Residente"]
            row=row
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ForeignRef;
    use crate::test_support::helpers::{provide_auth, staff_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn occupied_bed_shows_resident() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            let list = create_rw_signal(ListState::new(vec![
                Bed {
                    id: 1,
                    numero: "A".into(),
                    quarto: ForeignRef::new(3, "101"),
                    status: BedStatus::Ocupado,
                    residente: Some(ForeignRef::new(9, "Maria Lopes")),
                },
                Bed {
                    id: 2,
                    numero: "B".into(),
                    quarto: ForeignRef::new(3, "101"),
                    status: BedStatus::Disponivel,
                    residente: None,
                },
            ]));
            view! {
                <BedsTable
                    list=list
                    loading=Signal::derive(|| false)
                    load_error=Signal::derive(|| None)
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Maria Lopes"));
        assert!(html.contains("Disponível"));
        assert!(html.contains("/camas/editar/2"));
    }
}
