use crate::{
    api::{ApiClient, Resident},
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
pub fn ResidentsPage() -> impl IntoView {
    let residents = use_collection(|api: ApiClient| async move { api.list_residents().await });
    let pending_delete = create_rw_signal(None::<i64>);

    view! {
        <PageHeader title="Residentes">
            <VisibleIf resource=Resource::Resident action=Capability::Create>
                <a href="/residentes/criar" class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white">
                    "Novo Residente"
                </a>
            </VisibleIf>
        </PageHeader>
        <ResidentsTable
            list=residents.list
            loading=residents.loading
            load_error=residents.load_error
            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
        />
        <DeletePrompt
            pending=pending_delete
            message="Tem a certeza que deseja eliminar este residente?"
            on_confirm=Callback::new(move |id| {
                residents.delete(
                    id,
                    |api, id| async move { api.delete_resident(id).await },
                    "Residente eliminado com sucesso.",
                    "Erro ao eliminar residente:",
                )
            })
        />
    }
}

#[component]
pub fn ResidentsTable(
    list: RwSignal<ListState<Resident>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let can_edit = Signal::derive(move || auth.get().can(Resource::Resident, Capability::Edit));
    let can_delete = Signal::derive(move || auth.get().can(Resource::Resident, Capability::Delete));

    let row = move |resident: Resident| {
        let id = resident.id;
        view! {
            <tr>
                <td class=CELL>{resident.nome}</td>
                <td class=CELL>{resident.email}</td>
                <td class=CELL>{resident.telefone}</td>
                <td class=CELL>{resident.endereco}</td>
                <td class=CELL>
                    <RowActions
                        view_href=format!("/residentes/{}", id)
                        edit_href=can_edit.get().then(|| format!("/residentes/editar/{}", id))
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
            headers=vec!["Nome", "Email", "Telefone", "Endereço"]
            row=row
            empty_label="Nenhum residente encontrado."
        />
    }
}
