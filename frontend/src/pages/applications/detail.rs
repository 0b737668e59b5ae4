use crate::{
    api::{Application, DocumentFlags, DocumentKind},
    components::{
        common::{DetailRow, PageHeader, RecordView},
        guard::VisibleIf,
    },
    hooks::{parse_id, use_record},
    state::permissions::{Action as Capability, Resource},
    utils::time::format_timestamp,
};
use leptos::*;
use leptos_router::use_params_map;

use super::{list::StatusBadge, LIST_ROUTE};

#[component]
pub fn ApplicationDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_application(id).await });

    view! {
        <PageHeader title="Detalhes da Candidatura">
            <a href=LIST_ROUTE class="text-sm text-blue-600 hover:underline">"Voltar à lista"</a>
        </PageHeader>
        <RecordView record=record render=|application| view! { <ApplicationDetails application=application /> } />
    }
}

/// Delivered/missing state of every supporting document.
#[component]
pub fn DocumentChecklist(documents: DocumentFlags) -> impl IntoView {
    view! {
        <ul class="space-y-1">
            {DocumentKind::ALL
                .into_iter()
                .map(|kind| {
                    let delivered = documents.is_delivered(kind);
                    let (mark, class) = if delivered {
                        ("Entregue", "text-green-700")
                    } else {
                        ("Em falta", "text-gray-400")
                    };
                    view! {
                        <li class="flex justify-between text-sm">
                            <span>{kind.label()}</span>
                            <span class=class>{mark}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn ApplicationDetails(application: Application) -> impl IntoView {
    let id = application.id;
    let student = application.estudante.clone().unwrap_or_default();
    let room_type = application
        .tipo_quarto
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| "-".to_string());
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-6">
            <div class="flex items-center gap-3">
                <h2 class="text-lg font-semibold text-gray-900">{application.student_name()}</h2>
                <StatusBadge status=application.status />
            </div>
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Residência" value=application.residencia.display() />
                <DetailRow label="Tipo de Quarto" value=room_type />
                <DetailRow label="Data de Submissão" value=format_timestamp(&application.data_submissao) />
                <DetailRow label="CNI ou Passaporte" value=student.cni_ou_passaporte />
                <DetailRow label="NIF" value=student.nif />
                <DetailRow label="Curso" value=student.curso />
                <DetailRow label="Telefone" value=student.telefone />
                <DetailRow label="Email" value=student.email />
            </dl>
            <div>
                <h3 class="text-sm font-medium text-gray-700 mb-2">"Documentos"</h3>
                <DocumentChecklist documents=application.documentos />
            </div>
            <div class="flex gap-4 text-sm">
                <VisibleIf resource=Resource::Application action=Capability::Edit>
                    <a href=format!("/candidaturas/editar/{}", id) class="text-blue-600 hover:underline">"Editar"</a>
                </VisibleIf>
                <VisibleIf resource=Resource::Application action=Capability::Review>
                    <a href=format!("/candidaturas/avaliar/{}", id) class="text-green-700 hover:underline">"Avaliar"</a>
                </VisibleIf>
            </div>
        </div>
    }
}
