use crate::{
    api::{ApiClient, Application, ApplicationStatus},
    components::{
        common::{Button, ButtonVariant, PageHeader, RecordView},
        notice::NoticeBanner,
    },
    hooks::{parse_id, use_api, use_record},
    state::forms::MessageState,
};
use leptos::*;
use leptos_router::use_params_map;

use super::{detail::ApplicationDetails, utils::status_options};

/// Sends the new status and describes the outcome for the banner.
pub async fn submit_review(api: &ApiClient, id: i64, status: ApplicationStatus) -> MessageState {
    let mut notice = MessageState::default();
    match api.update_application_status(id, status).await {
        Ok(updated) => {
            log::info!("Application #{} set to {}", id, updated.status.as_str());
            notice.set_success(format!(
                "Estado da candidatura atualizado para {}.",
                updated.status.label()
            ));
        }
        Err(err) => {
            log::error!("Status update for application #{} failed: {}", id, err);
            notice.set_error(format!("Erro ao atualizar o estado: {}", err.error));
        }
    }
    notice
}

#[component]
pub fn ApplicationReviewPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let record = use_record(id, |api, id| async move { api.get_application(id).await });
    let api = use_api();
    let notice = create_rw_signal(MessageState::default());

    let review = create_action(move |(id, status): &(i64, ApplicationStatus)| {
        let (id, status) = (*id, *status);
        let api = api.clone();
        async move {
            let outcome = submit_review(&api, id, status).await;
            let succeeded = outcome.success.is_some();
            notice.set(outcome);
            if succeeded {
                record.refetch();
            }
        }
    });

    view! {
        <PageHeader title="Avaliar Candidatura">
            <a href=move || format!("/candidaturas/{}", id.get().unwrap_or_default()) class="text-sm text-blue-600 hover:underline">
                "Ver detalhes"
            </a>
        </PageHeader>
        <NoticeBanner notice=notice on_dismiss=Callback::new(move |_| notice.update(MessageState::clear)) />
        <RecordView
            record=record
            render=move |application: Application| {
                let app_id = application.id;
                view! {
                    <ReviewPanel
                        current=application.status
                        pending=review.pending()
                        on_status=Callback::new(move |status| review.dispatch((app_id, status)))
                    />
                    <div class="mt-6">
                        <ApplicationDetails application=application />
                    </div>
                }
            }
        />
    }
}

/// Approve/reject shortcuts plus a select over every status.
#[component]
pub fn ReviewPanel(
    current: ApplicationStatus,
    #[prop(into)] pending: Signal<bool>,
    on_status: Callback<ApplicationStatus>,
) -> impl IntoView {
    let chosen = create_rw_signal(current);
    let decided = matches!(current, ApplicationStatus::Aprovado | ApplicationStatus::Rejeitado);

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Primary
                    disabled=decided
                    loading=pending
                    on:click=move |_| on_status.call(ApplicationStatus::Aprovado)
                >
                    "Aprovar"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=decided
                    loading=pending
                    on:click=move |_| on_status.call(ApplicationStatus::Rejeitado)
                >
                    "Rejeitar"
                </Button>
            </div>
            <div class="flex items-end gap-2">
                <label class="text-sm text-gray-700">
                    "Estado"
                    <select
                        name="status"
                        class="ml-2 rounded-md border border-gray-300 px-2 py-1 text-sm"
                        on:change=move |ev| {
                            if let Some(status) = ApplicationStatus::parse(&event_target_value(&ev)) {
                                chosen.set(status);
                            }
                        }
                    >
                        {status_options()
                            .into_iter()
                            .map(|(value, label)| {
                                let selected = value == current.as_str();
                                view! { <option value=value selected=selected>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <Button
                    variant=ButtonVariant::Secondary
                    loading=pending
                    on:click=move |_| on_status.call(chosen.get_untracked())
                >
                    "Atualizar Estado"
                </Button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn decided_application_locks_shortcuts() {
        let html = render_to_string(move || {
            view! {
                <ReviewPanel
                    current=ApplicationStatus::Aprovado
                    pending=Signal::derive(|| false)
                    on_status=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Aprovar"));
        assert!(html.contains("Em Análise"));
        assert!(html.contains("disabled"));
    }

    #[tokio::test]
    async fn review_patches_status_and_reports_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PATCH).path("/candidaturas/atualizar/5/");
            then.status(200).json_body(json!({
                "id": 5,
                "residencia": 1,
                "status": "aprovado"
            }));
        });
        let api = server.client();

        let notice = submit_review(&api, 5, ApplicationStatus::Aprovado).await;

        assert_eq!(
            notice.success.as_deref(),
            Some("Estado da candidatura atualizado para Aprovado.")
        );
        let body = server.last_request().unwrap().body.unwrap();
        assert_eq!(body["status"], "aprovado");
    }

    #[tokio::test]
    async fn review_failure_becomes_error_notice() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PATCH).path("/candidaturas/atualizar/5/");
            then.status(400).json_body(json!({"detail": "Transição inválida."}));
        });
        let api = server.client();

        let notice = submit_review(&api, 5, ApplicationStatus::Pendente).await;

        assert!(notice.success.is_none());
        assert!(notice.error.unwrap().contains("Transição inválida."));
    }
}
