use crate::{
    api::{ApplicationInput, DocumentKind, DocumentUpload},
    components::{
        common::PageHeader,
        error::InlineErrorMessage,
        forms::{FormActions, SelectField, TextField},
        layout::LoadingSpinner,
    },
    hooks::{parse_id, use_entity_form, use_lookup, EntityForm},
    state::{
        auth::use_auth,
        forms::{FieldErrors, FormFields},
        permissions::{Action as Capability, Resource},
    },
    utils::files::{put_upload, read_upload, selected_file},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map};

use super::{
    utils::{check_documents, residence_option, room_type_options, ApplicationForm, WizardStep, DOCUMENTS_FIELD},
    LIST_ROUTE,
};

/// Moves to the documents step only when every text field validates.
pub fn try_advance(form: EntityForm<ApplicationForm>, step: RwSignal<WizardStep>) -> bool {
    match form.fields.with_untracked(ApplicationForm::validate) {
        Ok(_) => {
            form.errors.set(FieldErrors::new());
            step.set(WizardStep::Documents);
            true
        }
        Err(errors) => {
            form.errors.set(errors);
            step.set(WizardStep::Details);
            false
        }
    }
}

#[component]
fn ApplicationWizard(id: Memo<Option<i64>>) -> impl IntoView {
    let form = use_entity_form::<ApplicationForm, _, _>(id, |api, id| async move { api.get_application(id).await });
    let residences = use_lookup(|api| async move { api.list_residences().await }, residence_option);
    let step = create_rw_signal(WizardStep::Details);
    let uploads = create_rw_signal(Vec::<DocumentUpload>::new());
    let (auth, _) = use_auth();
    let navigate = use_navigate();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if !try_advance(form, step) {
            return;
        }
        let documents = uploads.get_untracked();
        if let Err(errors) = check_documents(&documents, !form.is_edit()) {
            form.errors.set(errors);
            return;
        }
        let target = if auth.get_untracked().can(Resource::Application, Capability::View) {
            LIST_ROUTE
        } else {
            "/inicio"
        };
        let navigate = navigate.clone();
        form.submit(
            move |api, id, input: ApplicationInput| async move {
                match id {
                    Some(id) => api.update_application(id, &input, &documents).await,
                    None => api.create_application(&input, &documents).await,
                }
            },
            move |_| navigate(target, Default::default()),
        );
    });

    view! {
        <ApplicationWizardView
            form=form
            step=step
            residences=residences
            uploads=uploads
            on_submit=on_submit
        />
    }
}

#[component]
pub fn NewApplicationPage() -> impl IntoView {
    let id = create_memo(|_| None::<i64>);
    view! { <ApplicationWizard id=id /> }
}

#[component]
pub fn ApplicationEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    view! { <ApplicationWizard id=id /> }
}

#[component]
fn StepIndicator(step: RwSignal<WizardStep>) -> impl IntoView {
    view! {
        <ol class="flex gap-6 mb-6 text-sm">
            {[WizardStep::Details, WizardStep::Documents]
                .into_iter()
                .map(|s| {
                    let class = move || {
                        if step.get() == s {
                            "font-semibold text-blue-700"
                        } else {
                            "text-gray-500"
                        }
                    };
                    view! { <li class=class>{format!("{}. {}", s.number(), s.label())}</li> }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn DocumentPicker(kind: DocumentKind, uploads: RwSignal<Vec<DocumentUpload>>, failure: RwSignal<Option<String>>) -> impl IntoView {
    let picked = move || {
        uploads.with(|all| {
            all.iter()
                .find(|u| u.kind == kind)
                .map(|u| u.file_name.clone())
        })
    };
    let on_change = move |ev: ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_upload(kind, file).await {
                Ok(upload) => {
                    failure.set(None);
                    uploads.update(|all| put_upload(all, upload));
                }
                Err(err) => {
                    log::error!("{}", err);
                    failure.set(Some(err));
                }
            }
        });
    };
    view! {
        <div class="mb-4">
            <label for=kind.field() class="block text-sm font-medium text-gray-700">
                {kind.label()}
                {(kind == DocumentKind::CniOuPassaporte).then_some(" *")}
            </label>
            <input id=kind.field() name=kind.field() type="file" class="mt-1 block text-sm" on:change=on_change />
            {move || picked().map(|name| view! { <p class="mt-1 text-xs text-gray-500">{name}</p> })}
        </div>
    }
}

#[component]
pub fn ApplicationWizardView(
    form: EntityForm<ApplicationForm>,
    step: RwSignal<WizardStep>,
    #[prop(into)] residences: Signal<Vec<(String, String)>>,
    uploads: RwSignal<Vec<DocumentUpload>>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let title = if form.is_edit() { "Editar Candidatura" } else { "Nova Candidatura" };
    let failure = create_rw_signal(None::<String>);
    let (residencia, set_residencia) = form.bind(|f| f.residencia_id.clone(), |f, v| f.residencia_id = v);
    let (tipo, set_tipo) = form.bind(|f| f.tipo_quarto.clone(), |f, v| f.tipo_quarto = v);
    let (nome, set_nome) = form.bind(|f| f.nome.clone(), |f, v| f.nome = v);
    let (cni, set_cni) = form.bind(|f| f.cni_ou_passaporte.clone(), |f, v| f.cni_ou_passaporte = v);
    let (nif, set_nif) = form.bind(|f| f.nif.clone(), |f, v| f.nif = v);
    let (curso, set_curso) = form.bind(|f| f.curso.clone(), |f, v| f.curso = v);
    let (telefone, set_telefone) = form.bind(|f| f.telefone.clone(), |f, v| f.telefone = v);
    let (email, set_email) = form.bind(|f| f.email.clone(), |f, v| f.email = v);
    let documents_error = form.error_for(DOCUMENTS_FIELD);

    view! {
        <PageHeader title=title />
        <StepIndicator step=step />
        <InlineErrorMessage error=form.load_error />
        <InlineErrorMessage error=form.submit_error.into() />
        <Show when=move || !form.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <form class="bg-white shadow rounded-lg p-6" on:submit=move |ev| on_submit.call(ev)>
                <div class:hidden=move || step.get() != WizardStep::Details>
                    <SelectField
                        label="Residência"
                        name="residencia"
                        value=residencia
                        options=residences
                        on_change=set_residencia
                        error=form.error_for("residencia")
                        required=true
                    />
                    <SelectField
                        label="Tipo de Quarto"
                        name="tipo_quarto"
                        value=tipo
                        options=Signal::derive(room_type_options)
                        on_change=set_tipo
                        error=form.error_for("tipo_quarto")
                        required=true
                    />
                    <TextField label="Nome" name="nome" value=nome on_input=set_nome error=form.error_for("nome") required=true />
                    <TextField
                        label="CNI ou Passaporte"
                        name="cni_ou_passaporte"
                        value=cni
                        on_input=set_cni
                        error=form.error_for("cni_ou_passaporte")
                        required=true
                    />
                    <TextField label="NIF" name="nif" value=nif on_input=set_nif error=form.error_for("nif") required=true />
                    <TextField label="Curso" name="curso" value=curso on_input=set_curso error=form.error_for("curso") required=true />
                    <TextField label="Telefone" name="telefone" input_type="tel" value=telefone on_input=set_telefone />
                    <TextField
                        label="Email"
                        name="email"
                        input_type="email"
                        value=email
                        on_input=set_email
                        error=form.error_for("email")
                        required=true
                    />
                    <div class="flex justify-end mt-6">
                        <button
                            type="button"
                            class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700"
                            on:click=move |_| {
                                try_advance(form, step);
                            }
                        >
                            "Seguinte"
                        </button>
                    </div>
                </div>
                <div class:hidden=move || step.get() != WizardStep::Documents>
                    {DocumentKind::ALL
                        .into_iter()
                        .map(|kind| view! { <DocumentPicker kind=kind uploads=uploads failure=failure /> })
                        .collect_view()}
                    {move || documents_error.get().map(|msg| view! { <p class="text-sm text-red-600">{msg}</p> })}
                    {move || failure.get().map(|msg| view! { <p class="text-sm text-red-600">{msg}</p> })}
                    <div class="flex justify-between mt-6">
                        <button
                            type="button"
                            class="rounded-md border border-gray-300 px-4 py-2 text-sm text-gray-700"
                            on:click=move |_| step.set(WizardStep::Details)
                        >
                            "Anterior"
                        </button>
                        <FormActions cancel_href=LIST_ROUTE pending=form.pending submit_label="Submeter" />
                    </div>
                </div>
            </form>
        </Show>
    }
}
