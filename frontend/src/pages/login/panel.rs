use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let error = vm.error;
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            email=form.email.into()
            password=form.password.into()
            error=error.into()
            pending=pending.into()
            on_email_input=Callback::new(move |value| form.email.set(value))
            on_password_input=Callback::new(move |value| form.password.set(value))
            on_submit=handle_submit
        />
    }
}
