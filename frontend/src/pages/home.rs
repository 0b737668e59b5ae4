use crate::{
    api::Application,
    components::{
        common::DetailRow,
        layout::{ErrorMessage, LoadingSpinner},
    },
    hooks::use_api,
    pages::{
        applications::{DocumentChecklist, StatusBadge},
        dashboard::greeting,
    },
    state::auth::use_auth,
    utils::time::format_timestamp,
};
use leptos::*;

/// Student landing page with the signed-in student's own application.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_api();
    let application = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.my_application().await }
        },
    );

    view! {
        <h1 class="text-2xl font-bold text-gray-900 mb-6">{move || greeting(&auth.get())}</h1>
        {move || match application.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => {
                log::error!("Failed to load own application: {}", err);
                view! { <ErrorMessage message=err.error /> }.into_view()
            }
            Some(Ok(mine)) => view! { <MyApplication application=mine /> }.into_view(),
        }}
    }
}

#[component]
pub fn MyApplication(application: Option<Application>) -> impl IntoView {
    let Some(application) = application else {
        return view! {
            <div class="bg-white shadow rounded-lg p-6 text-center">
                <p class="text-gray-600 mb-4">"Ainda não submeteu nenhuma candidatura."</p>
                <a href="/candidaturas/nova" class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white">
                    "Submeter Candidatura"
                </a>
            </div>
        }
        .into_view();
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-6">
            <div class="flex items-center gap-3">
                <h2 class="text-lg font-semibold text-gray-900">"A minha candidatura"</h2>
                <StatusBadge status=application.status />
            </div>
            <dl class="divide-y divide-gray-200">
                <DetailRow label="Residência" value=application.residencia.display() />
                <DetailRow label="Data de Submissão" value=format_timestamp(&application.data_submissao) />
            </dl>
            <div>
                <h3 class="text-sm font-medium text-gray-700 mb-2">"Documentos entregues"</h3>
                <DocumentChecklist documents=application.documentos />
            </div>
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApplicationStatus, DocumentFlags, ForeignRef};
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn without_application_offers_to_submit_one() {
        let html = render_to_string(move || view! { <MyApplication application=None /> });
        assert!(html.contains("Ainda não submeteu nenhuma candidatura."));
        assert!(html.contains("/candidaturas/nova"));
    }

    #[test]
    fn shows_status_and_documents() {
        let html = render_to_string(move || {
            let application = Application {
                id: 4,
                estudante: None,
                residencia: ForeignRef::new(2, "Residência Sul"),
                data_submissao: String::new(),
                status: ApplicationStatus::Aprovado,
                tipo_quarto: None,
                documentos: DocumentFlags {
                    cni_ou_passaporte: true,
                    ..DocumentFlags::default()
                },
            };
            view! { <MyApplication application=Some(application) /> }
        });
        assert!(html.contains("Aprovado"));
        assert!(html.contains("Residência Sul"));
        assert!(html.contains("Entregue"));
        assert!(html.contains("Em falta"));
    }

    #[tokio::test]
    async fn missing_application_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/candidaturas/minha/");
            then.status(404).json_body(json!({"detail": "Não encontrado."}));
        });
        let mine = server.client().my_application().await;
        assert_eq!(mine, Ok(None));
    }
}
