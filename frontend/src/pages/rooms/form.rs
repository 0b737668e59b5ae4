use crate::{
    api::RoomInput,
    components::{
        common::PageHeader,
        error::InlineErrorMessage,
        forms::{FormActions, SelectField, TextField},
        layout::LoadingSpinner,
    },
    hooks::{parse_id, use_entity_form, use_lookup, EntityForm},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map};

use super::{
    utils::{building_option, type_options, RoomForm},
    LIST_ROUTE,
};

#[component]
pub fn RoomFormPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let form = use_entity_form::<RoomForm, _, _>(id, |api, id| async move { api.get_room(id).await });
    let building_choices = use_lookup(|api| async move { api.list_buildings().await }, building_option);
    let navigate = use_navigate();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.submit(
            |api, id, input: RoomInput| async move {
                match id {
                    Some(id) => api.update_room(id, &input).await,
                    None => api.create_room(&input).await,
                }
            },
            move |_| navigate(LIST_ROUTE, Default::default()),
        );
    });

    view! { <RoomFormView form=form buildings=building_choices on_submit=on_submit /> }
}

#[component]
pub fn RoomFormView(
    form: EntityForm<RoomForm>,
    #[prop(into)] buildings: Signal<Vec<(String, String)>>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let title = if form.is_edit() { "Editar Quarto" } else { "Adicionar Novo Quarto" };
    let (numero, set_numero) = form.bind(|f| f.numero.clone(), |f, v| f.numero = v);
    let (capacidade, set_capacidade) = form.bind(|f| f.capacidade.clone(), |f, v| f.capacidade = v);
    let (edificio, set_edificio) = form.bind(|f| f.edificio_id.clone(), |f, v| f.edificio_id = v);
    let (tipo, set_tipo) = form.bind(|f| f.tipo.clone(), |f, v| f.tipo = v);

    view! {
        <PageHeader title=title />
        <InlineErrorMessage error=form.load_error />
        <InlineErrorMessage error=form.submit_error.into() />
        <Show when=move || !form.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <form class="bg-white shadow rounded-lg p-6" on:submit=move |ev| on_submit.call(ev)>
                <TextField label="Número" name="numero" value=numero on_input=set_numero error=form.error_for("numero") required=true />
                <TextField
                    label="Capacidade"
                    name="capacidade"
                    input_type="number"
                    value=capacidade
                    on_input=set_capacidade
                    error=form.error_for("capacidade")
                    required=true
                />
                <SelectField
                    label="Edifício"
                    name="edificio"
                    value=edificio
                    options=buildings
                    on_change=set_edificio
                    error=form.error_for("edificio")
                    required=true
                />
                <SelectField
                    label="Tipo de Quarto"
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
