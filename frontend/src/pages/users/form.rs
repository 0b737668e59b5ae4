use crate::{
    api::UserInput,
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

use super::{utils::UserForm, LIST_ROUTE};

#[component]
pub fn UserFormPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| parse_id(params.with(|p| p.get("id").cloned())));
    let form = use_entity_form::<UserForm, _, _>(id, |api, id| async move { api.get_user(id).await });
    let navigate = use_navigate();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        form.submit(
            |api, id, input: UserInput| async move {
                match id {
                    Some(id) => api.update_user(id, &input).await,
                    None => api.create_user(&input).await,
                }
            },
            move |_| navigate(LIST_ROUTE, Default::default()),
        );
    });

    view! { <UserFormView form=form on_submit=on_submit /> }
}

#[component]
pub fn UserFormView(form: EntityForm<UserForm>, on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let editing = form.is_edit();
    let title = if editing { "Editar Utilizador" } else { "Criar Novo Utilizador" };
    let password_label = if editing { "Nova password (opcional)" } else { "Password" };
    let (username, set_username) = form.bind(|f| f.username.clone(), |f, v| f.username = v);
    let (email, set_email) = form.bind(|f| f.email.clone(), |f, v| f.email = v);
    let (first_name, set_first_name) = form.bind(|f| f.first_name.clone(), |f, v| f.first_name = v);
    let (last_name, set_last_name) = form.bind(|f| f.last_name.clone(), |f, v| f.last_name = v);
    let (password, set_password) = form.bind(|f| f.password.clone(), |f, v| f.password = v);

    view! {
        <PageHeader title=title />
        <InlineErrorMessage error=form.load_error />
        <InlineErrorMessage error=form.submit_error.into() />
        <Show when=move || !form.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <form class="bg-white shadow rounded-lg p-6" on:submit=move |ev| on_submit.call(ev)>
                <TextField
                    label="Nome do Utilizador"
                    name="username"
                    value=username
                    on_input=set_username
                    error=form.error_for("username")
                    required=true
                />
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value=email
                    on_input=set_email
                    error=form.error_for("email")
                    required=true
                />
                <TextField label="Primeiro nome" name="first_name" value=first_name on_input=set_first_name />
                <TextField label="Apelido" name="last_name" value=last_name on_input=set_last_name />
                <TextField
                    label=password_label
                    name="password"
                    input_type="password"
                    value=password
                    on_input=set_password
                    error=form.error_for("password")
                    required=!editing
                />
                <FormActions cancel_href=LIST_ROUTE pending=form.pending />
            </form>
        </Show>
    }
}
