use crate::{
    api::BuildingInput,
    components::{
        common::PageHeader,
        error::InlineErrorMessage,
        forms::{FormActions, SelectField, TextField},
        layout::LoadingSpinner,
    },
    hooks::{parse_id, use_entity_form, EntityForm},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map};

use super::{
    utils::{type_options, BuildingForm},
    LIST_ROUTE,
};

#[component]
pub fn BuildingFormPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let form = use_entity_form::<BuildingForm, _, _>(id, |api, id| async move {
        api.get_building(id).await
    });
    let navigate = use_navigate();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.submit(
            |api, id, input: BuildingInput| async move {
                match id {
                    Some(id) => api.update_building(id, &input).await,
                    None => api.create_building(&input).await,
                }
            },
            move |_| navigate(LIST_ROUTE, Default::default()),
        );
    });

    view! { <BuildingFormView form=form on_submit=on_submit /> }
}

#[component]
pub fn BuildingFormView(form: EntityForm<BuildingForm>, on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let title = if form.is_edit() { "Editar Edifício" } else { "Criar Novo Edifício" };
    let (nome, set_nome) = form.bind(|f| f.nome.clone(), |f, v| f.nome = v);
    let (endereco, set_endereco) = form.bind(|f| f.endereco.clone(), |f, v| f.endereco = v);
    let (apartments, set_apartments) =
        form.bind(|f| f.numero_apartamentos.clone(), |f, v| f.numero_apartamentos = v);
    let (tipo, set_tipo) = form.bind(|f| f.tipo.clone(), |f, v| f.tipo = v);

    view! {
        <PageHeader title=title />
        <InlineErrorMessage error=form.load_error />
        <InlineErrorMessage error=form.submit_error.into() />
        <Show when=move || !form.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <form class="bg-white shadow rounded-lg p-6" on:submit=move |ev| on_submit.call(ev)>
                <TextField label="Nome" name="nome" value=nome on_input=set_nome error=form.error_for("nome") required=true />
                <TextField
                    label="Endereço"
                    name="endereco"
                    value=endereco
                    on_input=set_endereco
                    error=form.error_for("endereco")
                    required=true
                />
                <TextField
                    label="Número de apartamentos"
                    name="numero_apartamentos"
                    input_type="number"
                    value=apartments
                    on_input=set_apartments
                    error=form.error_for("numero_apartamentos")
                    required=true
                />
                <SelectField
                    label="Tipo"
                    name="tipo"
                    value=tipo
                    options=Signal::derive(type_options)
                    on_change=set_tipo
                    error=form.error_for("tipo")
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
    use crate::state::forms::FieldErrors;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn invalid_field_is_annotated() {
        let html = render_to_string(move || {
            let id = create_memo(|_| None::<i64>);
            let form = use_entity_form::<BuildingForm, _, _>(id, |api, id| async move {
                api.get_building(id).await
            });
            let mut errors = FieldErrors::new();
            errors.add("nome", "Nome é obrigatório.");
            form.errors.set(errors);
            view! { <BuildingFormView form=form on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Criar Novo Edifício"));
        assert!(html.contains("Nome é obrigatório."));
        assert!(html.contains("aria-invalid=\"true\""));
    }
}
