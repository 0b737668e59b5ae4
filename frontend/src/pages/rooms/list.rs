use crate::{
    api::{ApiClient, Room},
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
pub fn RoomsPage() -> impl IntoView {
    let rooms = use_collection(|api: ApiClient| async move { api.list_rooms().await });
    let pending_delete = create_rw_signal(None::<i64>);

    view! {
        <PageHeader title="Quartos">
            <VisibleIf resource=Resource::Room action=Capability::Create>
                <a href="/quartos/criar" class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white">
                    "Novo Quarto"
                </a>
            </VisibleIf>
        </PageHeader>
        <RoomsTable
            list=rooms.list
            loading=rooms.loading
            load_error=rooms.load_error
            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
        />
        <DeletePrompt
            pending=pending_delete
            message="Tem a certeza que deseja eliminar este quarto?"
            on_confirm=Callback::new(move |id| {
                rooms.delete(
                    id,
                    |api, id| async move { api.delete_room(id).await },
                    "Quarto eliminado com sucesso.",
                    "Erro ao eliminar quarto:",
                )
            })
        />
    }
}

#[component]
pub fn RoomsTable(
    list: RwSignal<ListState<Room>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let can_edit = Signal::derive(move || auth.get().can(Resource::Room, Capability::Edit));
    let can_delete = Signal::derive(move || auth.get().can(Resource::Room, Capability::Delete));

    let row = move |room: Room| {
        let id = room.id;
        view! {
            <tr>
                <td class=CELL>{room.numero}</td>
                <td class=CELL>{room.capacidade}</td>
                <td class=CELL>{room.tipo.label()}</td>
                <td class=CELL>{room.edificio.display()}</td>
                <td class=CELL>
                    <RowActions
                        view_href=format!("/quartos/{}", id)
                        edit_href=can_edit.get().then(|| format!("/quartos/editar/{}", id))
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
            headers=vec!["Número", "Capacidade", "Tipo", "Edifício"]
            row=row
        />
    }
}
