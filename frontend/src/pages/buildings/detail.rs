use crate::{
    api::Building,
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
pub fn BuildingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_building(id).await });

    view! {
        <PageHeader title="Detalhes do Edifício">
            <a href=LIST_ROUTE class="text-sm text-blue-600 hover:underline">"Voltar à lista"</a>
        </PageHeader>
        <RecordView record=record render=|building| view! { <BuildingDetails building=building /> } />
    }
}

#[component]
pub fn BuildingDetails(building: Building) -> impl IntoView {
    let edit_href = format!("/edificios/editar/{}", building.id);
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Nome" value=building.nome />
                <DetailRow label="Endereço" value=building.endereco />
                <DetailRow label="Número de apartamentos" value=building.numero_apartamentos.to_string() />
                <DetailRow label="Tipo" value=building.tipo.label() />
            </dl>
            <VisibleIf resource=Resource::Building action=Capability::Edit>
                <a href=edit_href.clone() class="mt-4 inline-block text-sm text-blue-600 hover:underline">"Editar"</a>
            </VisibleIf>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::BuildingType;
    use crate::test_support::helpers::{provide_auth, staff_claims, student_claims};
    use crate::test_support::ssr::render_to_string;

    fn building() -> Building {
        Building {
            id: 4,
            nome: "Bloco Sul".into(),
            endereco: "Mindelo".into(),
            numero_apartamentos: 6,
            tipo: BuildingType::Comercial,
        }
    }

    #[test]
    fn details_dump_fields_with_edit_link_for_staff() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            view! { <BuildingDetails building=building() /> }
        });
        assert!(html.contains("Bloco Sul"));
        assert!(html.contains("Comercial"));
        assert!(html.contains("/edificios/editar/4"));
    }

    #[test]
    fn edit_link_hidden_without_capability() {
        let html = render_to_string(move || {
            provide_auth(Some(student_claims()));
            view! { <BuildingDetails building=building() /> }
        });
        assert!(html.contains("Mindelo"));
        assert!(!html.contains("/edificios/editar/4"));
    }
}
