use crate::{
    api::ResidentInput,
    components::{
        common::PageHeader,
        error::InlineErrorMessage,
        forms::{FormActions, TextField},
        layout::LoadingSpinner,
    },
    hooks::{parse_id, use_entity_form, EntityForm},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map};

use super::{utils::ResidentForm, LIST_ROUTE};

#[component]
pub fn ResidentFormPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let form = use_entity_form::<ResidentForm, _, _>(id, |api, id| async move { api.get_resident(id).await });
    let navigate = use_navigate();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.submit(
            |api, id, input: ResidentInput| async move {
                match id {
                    Some(id) => api.update_resident(id, &input).await,
                    None => api.create_resident(&input).await,
                }
            },
            move |_| navigate(LIST_ROUTE, Default::default()),
        );
    });

    view! { <ResidentFormView form=form on_submit=on_submit /> }
}

#[component]
pub fn ResidentFormView(form: EntityForm<ResidentForm>, on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let title = if form.is_edit() { "Editar Residente" } else { "Adicionar Novo Residente" };
    let (nome, set_nome) = form.bind(|f| f.nome.clone(), |f, v| f.nome = v);
    let (email, set_email) = form.bind(|f| f.email.clone(), |f, v| f.email = v);
    let (telefone, set_telefone) = form.bind(|f| f.telefone.clone(), |f, v| f.telefone = v);
    let (endereco, set_endereco) = form.bind(|f| f.endereco.clone(), |f, v| f.endereco = v);

    view! {
        <PageHeader title=title />
        <InlineErrorMessage error=form.load_error />
        <InlineErrorMessage error=form.submit_error.into() />
        <Show when=move || !form.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <form class="bg-white shadow rounded-lg p-6" on:submit=move |ev| on_submit.call(ev)>
                <TextField label="Nome" name="nome" value=nome on_input=set_nome error=form.error_for("nome") required=true />
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value=email
                    on_input=set_email
                    error=form.error_for("email")
                    required=true
                />
                <TextField
                    label="Telefone"
                    name="telefone"
                    input_type="tel"
                    value=telefone
                    on_input=set_telefone
                    error=form.error_for("telefone")
                    required=true
                />
                <TextField
                    label="Endereço"
                    name="endereco"
                    value=endereco
                    on_input=set_endereco
                    error=form.error_for("endereco")
                    required=true
                />
                <FormActions cancel_href=LIST_ROUTE pending=form.pending />
            </form>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::forms::{FieldErrors, FormFields};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn email_error_is_rendered_next_to_field() {
        let html = render_to_string(move || {
            let id = create_memo(|_| None::<i64>);
            let form = use_entity_form::<ResidentForm, _, _>(id, |api, id| async move { api.get_resident(id).await });
            let errors: FieldErrors = ResidentForm {
                email: "sem-arroba".into(),
                ..ResidentForm::default()
            }
            .validate()
            .unwrap_err();
            form.errors.set(errors);
            view! { <ResidentFormView form=form on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Adicionar Novo Residente"));
        assert!(html.contains("Email inválido."));
        assert!(html.contains("Telefone é obrigatório."));
    }
}
