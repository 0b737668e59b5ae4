use crate::{
    api::Room,
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
pub fn RoomDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_room(id).await });

    view! {
        <PageHeader title="Detalhes do Quarto">
            <a href=LIST_ROUTE class="text-sm text-blue-600 hover:underline">"Voltar à lista"</a>
        </PageHeader>
        <RecordView record=record render=|room| view! { <RoomDetails room=room /> } />
    }
}

#[component]
pub fn RoomDetails(room: Room) -> impl IntoView {
    let edit_href = format!("/quartos/editar/{}", room.id);
    let building_href = format!("/edificios/{}", room.edificio.id);
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Número" value=room.numero />
                <DetailRow label="Capacidade" value=room.capacidade.to_string() />
                <DetailRow label="Tipo" value=room.tipo.label() />
                <DetailRow label="Edifício" value=room.edificio.display() />
            </dl>
            <div class="mt-4 flex gap-4 text-sm">
                <a href=building_href class="text-blue-600 hover:underline">"Ver edifício"</a>
                <VisibleIf resource=Resource::Room action=Capability::Edit>
                    <a href=edit_href.clone() class="text-blue-600 hover:underline">"Editar"</a>
                </VisibleIf>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ForeignRef, RoomType};
    use crate::test_support::helpers::{provide_auth, staff_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn details_link_back_to_building() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            let room = Room {
                id: 8,
                numero: "204".into(),
                capacidade: 3,
                edificio: ForeignRef::new(2, "Bloco Sul"),
                tipo: RoomType::Triplo,
            };
            view! { <RoomDetails room=room /> }
        });
        assert!(html.contains("204"));
        assert!(html.contains("/edificios/2"));
        assert!(html.contains("/quartos/editar/8"));
    }
}
