use crate::{
    api::{ApiClient, Building},
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

#[component]
pub fn BuildingsPage() -> impl IntoView {
    let buildings = use_collection(|api: ApiClient| async move { api.list_buildings().await });
    let pending_delete = create_rw_signal(None::<i64>);

    view! {
        <PageHeader title="Edifícios">
            <VisibleIf resource=Resource::Building action=Capability::Create>
                <a href="/edificios/criar" class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white">
                    "Novo Edifício"
                </a>
            </VisibleIf>
        </PageHeader>
        <BuildingsTable
            list=buildings.list
            loading=buildings.loading
            load_error=buildings.load_error
            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
        />
        <DeletePrompt
            pending=pending_delete
            message="Tem a certeza que deseja eliminar este edifício?"
            on_confirm=Callback::new(move |id| {
                buildings.delete(
                    id,
                    |api, id| async move { api.delete_building(id).await },
                    "Edifício eliminado com sucesso.",
                    "Erro ao eliminar edifício:",
                )
            })
        />
    }
}

#[component]
pub fn BuildingsTable(
    list: RwSignal<ListState<Building>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let can_edit = Signal::derive(move || auth.get().can(Resource::Building, Capability::Edit));
    let can_delete = Signal::derive(move || auth.get().can(Resource::Building, Capability::Delete));

    let row = move |building: Building| {
        let id = building.id;
        view! {
            <tr>
                <td class=CELL>{building.nome}</td>
                <td class=CELL>{building.endereco}</td>
                <td class=CELL>{building.numero_apartamentos}</td>
                <td class=CELL>{building.tipo.label()}</td>
                <td class=CELL>
                    <RowActions
                        view_href=format!("/edificios/{}", id)
                        edit_href=can_edit.get().then(|| format!("/edificios/editar/{}", id))
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
            headers=vec!["Nome", "Endereço", "Apartamentos", "Tipo"]
            row=row
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::BuildingType;
    use crate::test_support::helpers::{admin_claims, provide_auth, staff_claims, student_claims};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::token::Claims;

    fn render_for(claims: Claims) -> String {
        render_to_string(move || {
            provide_auth(Some(claims));
            let list = create_rw_signal(ListState::new(vec![Building {
                id: 7,
                nome: "Bloco Norte".into(),
                endereco: "Praia".into(),
                numero_apartamentos: 12,
                tipo: BuildingType::Residencial,
            }]));
            view! {
                <BuildingsTable
                    list=list
                    loading=Signal::derive(|| false)
                    load_error=Signal::derive(|| None)
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn student_never_sees_delete() {
        let html = render_for(student_claims());
        assert!(html.contains("Bloco Norte"));
        assert!(!html.contains("Eliminar"));
        assert!(!html.contains("/edificios/editar/7"));
    }

    #[test]
    fn staff_can_edit_but_not_delete() {
        let html = render_for(staff_claims());
        assert!(html.contains("/edificios/editar/7"));
        assert!(!html.contains("Eliminar"));
    }

    #[test]
    fn admin_sees_every_action() {
        let html = render_for(admin_claims());
        assert!(html.contains("/edificios/7"));
        assert!(html.contains("/edificios/editar/7"));
        assert!(html.contains("Eliminar"));
    }
}
