use crate::{
    api::TwoFactorSetup,
    hooks::use_api,
    state::auth::{use_auth, use_verify_two_factor_action, LoginOutcome},
    utils::navigation::LOGIN_PATH,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;
use qrcode::{render::svg, QrCode};

pub const OTP_LEN: usize = 6;

/// `src` for the QR image: the backend PNG when sent, otherwise an SVG
/// rendered locally from the provisioning URI.
pub fn qr_image_src(setup: &TwoFactorSetup) -> Option<String> {
    if let Some(png) = setup.qr_code_base64.as_deref().filter(|b| !b.is_empty()) {
        if png.starts_with("data:") {
            return Some(png.to_string());
        }
        return Some(format!("data:image/png;base64,{}", png));
    }
    let uri = setup.otpauth_url.as_deref().filter(|u| !u.is_empty())?;
    let code = QrCode::new(uri.as_bytes()).ok()?;
    let svg = code.render::<svg::Color>().min_dimensions(200, 200).build();
    Some(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
}

pub fn validate_otp(raw: &str) -> Result<String, String> {
    let code: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if code.len() != OTP_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("Introduza o código de {} dígitos.", OTP_LEN));
    }
    Ok(code)
}

#[component]
pub fn TwoFactorPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_api();
    let pending = create_memo(move |_| auth.with(|state| state.pending_two_factor.clone()));
    let setup = create_local_resource(
        move || pending.get().map(|p| p.token),
        move |token| {
            let api = api.clone();
            async move {
                match token {
                    Some(token) => api.generate_two_factor(&token).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    let code = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let verify = use_verify_two_factor_action();
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(result) = verify.value().get() {
            match result {
                Ok(LoginOutcome::Authenticated { landing }) => navigate(landing, Default::default()),
                Ok(LoginOutcome::TwoFactorRequired) => {}
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if verify.pending().get_untracked() {
            return;
        }
        match validate_otp(&code.get_untracked()) {
            Ok(otp) => {
                error.set(None);
                verify.dispatch(otp);
            }
            Err(msg) => error.set(Some(msg)),
        }
    });

    let qr = Signal::derive(move || match setup.get() {
        Some(Ok(Some(setup))) => qr_image_src(&setup),
        _ => None,
    });
    let setup_error = Signal::derive(move || match setup.get() {
        Some(Err(err)) => Some(err.error),
        _ => None,
    });

    view! {
        <Show
            when=move || pending.with(Option::is_some)
            fallback=|| view! { <ExpiredVerification /> }
        >
            <TwoFactorForm
                email=pending.get_untracked().map(|p| p.email).unwrap_or_default()
                qr=qr
                setup_error=setup_error
                error=error.into()
                pending=verify.pending().into()
                on_input=Callback::new(move |value| code.set(value))
                on_submit=on_submit
            />
        </Show>
    }
}

#[component]
fn ExpiredVerification() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 bg-white shadow rounded-lg p-6 text-center">
            <p class="text-gray-700">"A verificação expirou. Inicie sessão novamente."</p>
            <a href=LOGIN_PATH class="mt-4 inline-block text-blue-600 hover:underline">"Voltar ao login"</a>
        </div>
    }
}

#[component]
pub fn TwoFactorForm(
    #[prop(into)] email: String,
    qr: Signal<Option<String>>,
    setup_error: Signal<Option<String>>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-xl font-semibold text-gray-900">"Verificação em dois passos"</h2>
            <p class="text-sm text-gray-600">{format!("Conta: {}", email)}</p>
            {move || setup_error.get().map(|msg| view! { <p class="text-sm text-red-600">{msg}</p> })}
            {move || qr.get().map(|src| view! {
                <div class="border rounded p-4 flex justify-center">
                    <img src=src alt="Código QR para a aplicação de autenticação" />
                </div>
            })}
            <form class="space-y-3" on:submit=move |ev| on_submit.call(ev)>
                <label for="otp" class="block text-sm font-medium text-gray-700">"Código de verificação"</label>
                <input
                    id="otp"
                    name="otp"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength=OTP_LEN
                    class="w-full rounded-md border border-gray-300 px-3 py-2"
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                {move || error.get().map(|msg| view! { <p class="text-sm text-red-600" role="alert">{msg}</p> })}
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full rounded-md bg-blue-600 py-2 text-sm font-semibold text-white disabled:opacity-50"
                >
                    {move || if pending.get() { "A verificar..." } else { "Verificar" }}
                </button>
            </form>
        </div>
    }
}
