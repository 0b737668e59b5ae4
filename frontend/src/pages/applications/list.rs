use crate::{
    api::{ApiClient, Application, ApplicationStatus},
    components::{
        common::PageHeader,
        list::{DeletePrompt, ListView, RowActions, CELL},
    },
    hooks::use_collection,
    state::{
        auth::use_auth,
        listing::ListState,
        permissions::{Action as Capability, Resource},
    },
    utils::time::format_date,
};
use leptos::*;

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}", status.badge_class())>
            {status.label()}
        </span>
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let applications = use_collection(|api: ApiClient| async move { api.list_applications().await });
    let pending_delete = create_rw_signal(None::<i64>);

    view! {
        <PageHeader title="Candidaturas" />
        <ApplicationsTable
            list=applications.list
            loading=applications.loading
            load_error=applications.load_error
            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
        />
        <DeletePrompt
            pending=pending_delete
            message="Tem a certeza que deseja eliminar esta candidatura?"
            on_confirm=Callback::new(move |id| {
                applications.delete(
                    id,
                    |api, id| async move { api.delete_application(id).await },
                    "Candidatura eliminada com sucesso.",
                    "Erro ao eliminar candidatura:",
                )
            })
        />
    }
}

#[component]
fn StatusFilter(list: RwSignal<ListState<Application>>) -> impl IntoView {
    let on_change = move |ev| {
        let raw = event_target_value(&ev);
        let category = ApplicationStatus::parse(&raw).map(|s| s.as_str());
        list.update(|state| state.set_category(category));
    };
    view! {
        <label class="flex items-center gap-2 text-sm text-gray-700 mb-4">
            "Estado:"
            <select class="rounded-md border border-gray-300 px-2 py-1 text-sm" on:change=on_change>
                <option value="" selected=move || list.with(|s| s.category.is_none())>"Todos"</option>
                {ApplicationStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option
                                value=status.as_str()
                                selected=move || list.with(|s| s.category == Some(status.as_str()))
                            >
                                {status.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn ApplicationsTable(
    list: RwSignal<ListState<Application>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let can_edit = Signal::derive(move || auth.get().can(Resource::Application, Capability::Edit));
    let can_review = Signal::derive(move || auth.get().can(Resource::Application, Capability::Review));
    let can_delete = Signal::derive(move || auth.get().can(Resource::Application, Capability::Delete));

    let row = move |application: Application| {
        let id = application.id;
        let student = application.student_name();
        view! {
            <tr>
                <td class=CELL>{student}</td>
                <td class=CELL>{application.residencia.display()}</td>
                <td class=CELL>{format_date(&application.data_submissao)}</td>
                <td class=CELL><StatusBadge status=application.status /></td>
                <td class=CELL>
                    <div class="flex items-center gap-3">
                        <RowActions
                            view_href=format!("/candidaturas/{}", id)
                            edit_href=can_edit.get().then(|| format!("/candidaturas/editar/{}", id))
                            on_delete=can_delete.get().then(|| Callback::new(move |_| on_delete.call(id)))
                        />
                        {can_review.get().then(|| view! {
                            <a href=format!("/candidaturas/avaliar/{}", id) class="text-sm text-green-700 hover:underline">
                                "Avaliar"
                            </a>
                        })}
                    </div>
                </td>
            </tr>
        }
    };

    view! {
        <StatusFilter list=list />
        <ListView
            list=list
            loading=loading
            load_error=load_error
            headers=vec!["Estudante", "Residência", "Data de Submissão", "Estado"]
            row=row
            empty_label="Nenhuma candidatura encontrada."
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Applicant, DocumentFlags, ForeignRef};
    use crate::test_support::helpers::{admin_claims, provide_auth, staff_claims};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::token::Claims;

    fn application(id: i64, nome: &str, status: ApplicationStatus) -> Application {
        Application {
            id,
            estudante: Some(Applicant {
                id: id + 100,
                nome: nome.into(),
                ..Applicant::default()
            }),
            residencia: ForeignRef::new(1, "Residência Central"),
            data_submissao: "2024-05-01T10:00:00Z".into(),
            status,
            tipo_quarto: None,
            documentos: DocumentFlags::default(),
        }
    }

    fn render_for(claims: Claims, category: Option<ApplicationStatus>) -> String {
        render_to_string(move || {
            provide_auth(Some(claims));
            let mut state = ListState::new(vec![
                application(1, "Ana Silva", ApplicationStatus::Pendente),
                application(2, "Rui Gomes", ApplicationStatus::Aprovado),
            ]);
            state.set_category(category.map(|s| s.as_str()));
            let list = create_rw_signal(state);
            view! {
                <ApplicationsTable
                    list=list
                    loading=Signal::derive(|| false)
                    load_error=Signal::derive(|| None)
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn staff_reviews_but_cannot_delete() {
        let html = render_for(staff_claims(), None);
        assert!(html.contains("Ana Silva"));
        assert!(html.contains("01&#x2F;05&#x2F;2024"));
        assert!(html.contains("/candidaturas/avaliar/1"));
        assert!(!html.contains("Eliminar"));
    }

    #[test]
    fn status_filter_hides_other_rows() {
        let html = render_for(admin_claims(), Some(ApplicationStatus::Aprovado));
        assert!(html.contains("Rui Gomes"));
        assert!(!html.contains("Ana Silva"));
        assert!(html.contains("Eliminar"));
    }
}
