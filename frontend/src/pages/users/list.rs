use crate::{
    api::{ApiClient, User},
    components::{
        common::PageHeader,
        list::{DeletePrompt, ListView, RowActions, CELL},
    },
    hooks::use_collection,
    state::listing::ListState,
};
use leptos::*;

use super::utils::{full_name, group_labels};

/// Account management is admin-only, so the route guard already settles
/// every row action.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = use_collection(|api: ApiClient| async move { api.list_users().await });
    let pending_delete = create_rw_signal(None::<i64>);

    view! {
        <PageHeader title="Utilizadores">
            <a href="/utilizadores/criar" class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white">
                "Novo Utilizador"
            </a>
        </PageHeader>
        <UsersTable
            list=users.list
            loading=users.loading
            load_error=users.load_error
            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
        />
        <DeletePrompt
            pending=pending_delete
            message="Tem a certeza que deseja eliminar este utilizador?"
            on_confirm=Callback::new(move |id| {
                users.delete(
                    id,
                    |api, id| async move { api.delete_user(id).await },
                    "Utilizador eliminado com sucesso.",
                    "Erro ao eliminar utilizador:",
                )
            })
        />
    }
}

#[component]
pub fn UsersTable(
    list: RwSignal<ListState<User>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let row = move |user: User| {
        let id = user.id;
        let name = full_name(&user);
        let groups = group_labels(&user);
        view! {
            <tr>
                <td class=CELL>{user.username}</td>
                <td class=CELL>{name}</td>
                <td class=CELL>{user.email}</td>
                <td class=CELL>{groups}</td>
                <td class=CELL>
                    <RowActions
                        view_href=format!("/utilizadores/{}", id)
                        edit_href=Some(format!("/utilizadores/editar/{}", id))
                        on_delete=Some(Callback::new(move |_| on_delete.call(id)))
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
            headers=vec!["Nome do Utilizador", "Nome", "Email", "Grupos"]
            row=row
            empty_label="Nenhum utilizador encontrado."
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_show_groups_and_actions() {
        let html = render_to_string(move || {
            let list = create_rw_signal(ListState::new(vec![User {
                id: 5,
                username: "mfortes".into(),
                email: "m@uni.cv".into(),
                first_name: "Marta".into(),
                last_name: "Fortes".into(),
                groups: vec!["administrador".into()],
            }]));
            view! {
                <UsersTable
                    list=list
                    loading=Signal::derive(|| false)
                    load_error=Signal::derive(|| None)
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Marta Fortes"));
        assert!(html.contains("Administrador"));
        assert!(html.contains("/utilizadores/editar/5"));
        assert!(html.contains("Eliminar"));
    }
}
