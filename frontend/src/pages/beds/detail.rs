use crate::{
    api::Bed,
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
pub fn BedDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_bed(id).await });

    view! {
        <PageHeader title="Detalhes da Cama">
            <a href=LIST_ROUTE class="text-sm text-blue-600 hover:underline">"Voltar à lista"</a>
        </PageHeader>
        <RecordView record=record render=|bed| view! { <BedDetails bed=bed /> } />
    }
}

#[component]
pub fn BedDetails(bed: Bed) -> impl IntoView {
    let edit_href = format!("/camas/editar/{}", bed.id);
    let room_href = format!("/quartos/{}", bed.quarto.id);
    let resident = bed.residente.clone();
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Número" value=bed.numero />
                <DetailRow label="Quarto" value=bed.quarto.display() />
                <DetailRow label="Status" value=bed.status.as_str() />
                <DetailRow
                    label="Residente"
                    value=resident.as_ref().map(|r| r.display()).unwrap_or_else(|| "Sem residente".to_string())
                />
            </dl>
            <div class="mt-4 flex gap-4 text-sm">
                <a href=room_href class="text-blue-600 hover:underline">"Ver quarto"</a>
                {resident.map(|r| view! {
                    <a href=format!("/residentes/{}", r.id) class="text-blue-600 hover:underline">"Ver residente"</a>
                })}
                <VisibleIf resource=Resource::Bed action=Capability::Edit>
                    <a href=edit_href.clone() class="text-blue-600 hover:underline">"Editar"</a>
                </VisibleIf>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{BedStatus, ForeignRef};
    use crate::test_support::helpers::{provide_auth, student_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn unassigned_bed_says_so() {
        let html = render_to_string(move || {
            provide_auth(Some(student_claims()));
            let bed = Bed {
                id: 5,
                numero: "C".into(),
                quarto: ForeignRef::new(2, "102"),
                status: BedStatus::Disponivel,
                residente: None,
            };
            view! { <BedDetails bed=bed /> }
        });
        assert!(html.contains("Sem residente"));
        assert!(html.contains("/quartos/2"));
        assert!(!html.contains("Ver residente"));
        assert!(!html.contains("/camas/editar/5"));
    }
}
