use crate::{
    api::User,
    components::common::{DetailRow, PageHeader, RecordView},
    hooks::{parse_id, use_record},
};
use leptos::*;
use leptos_router::use_params_map;

use super::{
    utils::{full_name, group_labels},
    LIST_ROUTE,
};

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_user(id).await });

    view! {
        <PageHeader title="Detalhes do Utilizador">
            <a href=LIST_ROUTE class="text-sm text-blue-600 hover:underline">"Voltar à lista"</a>
        </PageHeader>
        <RecordView record=record render=|user| view! { <UserDetails user=user /> } />
    }
}

#[component]
pub fn UserDetails(user: User) -> impl IntoView {
    let edit_href = format!("/utilizadores/editar/{}", user.id);
    let name = full_name(&user);
    let groups = group_labels(&user);
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Nome do Utilizador" value=user.username />
                <DetailRow label="Nome" value=name />
                <DetailRow label="Email" value=user.email />
                <DetailRow label="Grupos" value=groups />
            </dl>
            <a href=edit_href class="mt-4 inline-block text-sm text-blue-600 hover:underline">"Editar"</a>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn details_link_to_edit() {
        let html = render_to_string(move || {
            let user = User {
                id: 8,
                username: "semgrupo".into(),
                email: String::new(),
                first_name: String::new(),
                last_name: String::new(),
                groups: vec![],
            };
            view! { <UserDetails user=user /> }
        });
        assert!(html.contains("semgrupo"));
        assert!(html.contains("/utilizadores/editar/8"));
    }
}
