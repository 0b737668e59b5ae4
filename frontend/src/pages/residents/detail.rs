use crate::{
    api::Resident,
    components::{
        common::{DetailRow, PageHeader, RecordView},
        guard::VisibleIf,
    },
    hooks::{parse_id, use_record},
    state::permissions::{Action as Capability, Resource},
};
use leptos::*;
use leptos_router::use_params_map;

use super::LIST_ROUTE;

#[component]
pub fn ResidentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_resident(id).await });

    view! {
        <PageHeader title="Detalhes do Residente">
            <a href=LIST_ROUTE class="text-sm text-blue-600 hover:underline">"Voltar à lista"</a>
        </PageHeader>
        <RecordView record=record render=|resident| view! { <ResidentDetails resident=resident /> } />
    }
}

#[component]
pub fn ResidentDetails(resident: Resident) -> impl IntoView {
    let edit_href = format!("/residentes/editar/{}", resident.id);
    let mailto = format!("mailto:{}", resident.email);
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Nome" value=resident.nome />
                <div class="py-2 grid grid-cols-3 gap-4">
                    <dt class="text-sm font-medium text-gray-500">"Email"</dt>
                    <dd class="text-sm col-span-2">
                        <a href=mailto class="text-blue-600 hover:underline">{resident.email}</a>
                    </dd>
                </div>
                <DetailRow label="Telefone" value=resident.telefone />
                <DetailRow label="Endereço" value=resident.endereco />
            </dl>
            <VisibleIf resource=Resource::Resident action=Capability::Edit>
                <a href=edit_href.clone() class="mt-4 inline-block text-sm text-blue-600 hover:underline">"Editar"</a>
            </VisibleIf>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, staff_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn email_is_a_mail_link() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            let resident = Resident {
                id: 3,
                nome: "Ana Silva".into(),
                email: "ana@uni.cv".into(),
                telefone: "9912345".into(),
                endereco: "Praia".into(),
            };
            view! { <ResidentDetails resident=resident /> }
        });
        assert!(html.contains("mailto:ana@uni.cv"));
        assert!(html.contains("9912345"));
        assert!(html.contains("/residentes/editar/3"));
    }
}
