use crate::{
    api::BedInput,
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
    utils::{resident_option, room_option, status_options, BedForm},
    LIST_ROUTE,
};

#[component]
pub fn BedFormPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let form = use_entity_form::<BedForm, _, _>(id, |api, id| async move { api.get_bed(id).await });
    let rooms = use_lookup(|api| async move { api.list_rooms().await }, room_option);
    let residents = use_lookup(|api| async move { api.list_residents().await }, resident_option);
    let navigate = use_navigate();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.submit(
            |api, id, input: BedInput| async move {
                match id {
                    Some(id) => api.update_bed(id, &input).await,
                    None => api.create_bed(&input).await,
                }
            },
            move |_| navigate(LIST_ROUTE, Default::default()),
        );
    });

    view! { <BedFormView form=form rooms=rooms residents=residents on_submit=on_submit /> }
}

#[component]
pub fn BedFormView(
    form: EntityForm<BedForm>,
    #[prop(into)] rooms: Signal<Vec<(String, String)>>,
    #[prop(into)] residents: Signal<Vec<(String, String)>>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let title = if form.is_edit() { "Editar Cama" } else { "Criar Nova Cama" };
    let (numero, set_numero) = form.bind(|f| f.numero.clone(), |f, v| f.numero = v);
    let (quarto, set_quarto) = form.bind(|f| f.quarto_id.clone(), |f, v| f.quarto_id = v);
    let (status, set_status) = form.bind(|f| f.status.clone(), |f, v| f.status = v);
    let (residente, set_residente) = form.bind(|f| f.residente_id.clone(), |f, v| f.residente_id = v);

    view! {
        <PageHeader title=title />
        <InlineErrorMessage error=form.load_error />
        <InlineErrorMessage error=form.submit_error.into() />
        <Show when=move || !form.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <form class="bg-white shadow rounded-lg p-6" on:submit=move |ev| on_submit.call(ev)>
                <TextField label="Número" name="numero" value=numero on_input=set_numero error=form.error_for("numero") required=true />
                <SelectField
                    label="Quarto"
                    name="quarto"
                    value=quarto
                    options=rooms
                    on_change=set_quarto
                    error=form.error_for("quarto")
                    required=true
                />
                <SelectField
                    label="Status"
                    name="status"
                    value=status
                    options=Signal::derive(status_options)
                    on_change=set_status
                    error=form.error_for("status")
                    required=true
                />
                <SelectField
                    label="Residente"
                    name="residente"
                    value=residente
                    options=residents
                    on_change=set_residente
                    placeholder="Sem residente"
                />
                <FormActions cancel_href=LIST_ROUTE pending=form.pending />
            </form>
        </Show>
    }
}
