use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest},
    state::permissions::{self, Action as Capability, Resource},
    utils::{
        storage::TokenStore,
        token::{decode_claims, decode_valid_claims, now_secs, Claims, TokenError},
    },
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Credentials accepted by the backend but waiting on a one-time code.
/// Held in memory only; a reload drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTwoFactor {
    pub token: String,
    pub refresh: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Claims>,
    pub access_token: Option<String>,
    pub pending_two_factor: Option<PendingTwoFactor>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn authenticated(claims: Claims, token: String) -> Self {
        Self {
            user: Some(claims),
            access_token: Some(token),
            pending_two_factor: None,
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> Vec<String> {
        self.user
            .as_ref()
            .map(|claims| claims.groups.clone())
            .unwrap_or_default()
    }

    pub fn can(&self, resource: Resource, action: Capability) -> bool {
        self.is_authenticated && permissions::can(&self.groups(), resource, action)
    }

    pub fn landing_route(&self) -> &'static str {
        permissions::landing_route(&self.groups())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { landing: &'static str },
    TwoFactorRequired,
}

/// Reads the stored access token. `Ok(None)` means nobody is signed in.
pub fn restore_session(
    store: &dyn TokenStore,
    now: i64,
) -> Result<Option<(Claims, String)>, TokenError> {
    match store.access_token() {
        Some(token) => decode_valid_claims(&token, now).map(|claims| Some((claims, token))),
        None => Ok(None),
    }
}

/// Persists a freshly issued token pair and returns its claims. A token that
/// cannot be decoded clears storage instead.
pub fn establish_session(
    store: &dyn TokenStore,
    access: &str,
    refresh: Option<&str>,
) -> Result<Claims, ApiError> {
    let claims = match decode_claims(access) {
        Ok(claims) => claims,
        Err(err) => {
            let _ = store.clear_session();
            return Err(err.into());
        }
    };
    store.store_session(access, refresh).map_err(|e| {
        log::error!("Failed to persist session: {}", e);
        ApiError::new("STORAGE_ERROR", "Não foi possível guardar a sessão.")
    })?;
    Ok(claims)
}

async fn refresh_session(api: &ApiClient, refresh: &str) -> Result<AuthState, ApiError> {
    let store = api.token_store();
    let refreshed = api.refresh_access_token(refresh).await?;
    let rotated = refreshed.refresh.as_deref().or(Some(refresh));
    let claims = establish_session(store.as_ref(), &refreshed.access, rotated)?;
    Ok(AuthState::authenticated(claims, refreshed.access))
}

/// Resolves `loading` into authenticated or anonymous from stored tokens,
/// refreshing an expired access token once when a refresh token exists.
pub async fn check_session(api: &ApiClient) -> AuthState {
    let store = api.token_store();
    match restore_session(store.as_ref(), now_secs()) {
        Ok(Some((claims, token))) => AuthState::authenticated(claims, token),
        Ok(None) => AuthState::anonymous(),
        Err(TokenError::Expired) => match store.refresh_token() {
            Some(refresh) => match refresh_session(api, &refresh).await {
                Ok(state) => {
                    log::info!("Session refreshed");
                    state
                }
                Err(err) => {
                    log::warn!("Session refresh failed: {}", err);
                    let _ = store.clear_session();
                    AuthState::anonymous()
                }
            },
            None => {
                let _ = store.clear_session();
                AuthState::anonymous()
            }
        },
        Err(err) => {
            log::warn!("Discarding stored session: {}", err);
            let _ = store.clear_session();
            AuthState::anonymous()
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_effect(move |_| {
        let api = api_client.clone();
        spawn_local(async move {
            let state = check_session(&api).await;
            set_auth_state.set(state);
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

fn fail_session(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    let _ = api.token_store().clear_session();
    set_auth_state.set(AuthState::anonymous());
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<LoginOutcome, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    let response = match api.login(&request).await {
        Ok(response) => response,
        Err(err) => {
            fail_session(api, set_auth_state);
            return Err(err);
        }
    };

    if response.requires_2fa {
        log::info!("Login requires two-factor verification");
        set_auth_state.set(AuthState {
            pending_two_factor: Some(PendingTwoFactor {
                token: response.access,
                refresh: response.refresh,
                email: request.email,
            }),
            ..AuthState::anonymous()
        });
        return Ok(LoginOutcome::TwoFactorRequired);
    }

    let store = api.token_store();
    match establish_session(store.as_ref(), &response.access, response.refresh.as_deref()) {
        Ok(claims) => {
            let state = AuthState::authenticated(claims, response.access);
            let landing = state.landing_route();
            log::info!("Logged in, landing on {}", landing);
            set_auth_state.set(state);
            Ok(LoginOutcome::Authenticated { landing })
        }
        Err(err) => {
            fail_session(api, set_auth_state);
            Err(err)
        }
    }
}

/// Completes a pending two-factor login. A wrong code keeps the pending
/// token so the user can try again.
pub async fn verify_two_factor_request(
    otp_token: String,
    api: &ApiClient,
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<LoginOutcome, ApiError> {
    let Some(pending) = auth_state.get_untracked().pending_two_factor else {
        return Err(ApiError::new(
            "TOKEN_ERROR",
            "A verificação expirou. Inicie sessão novamente.",
        ));
    };

    let response = api.verify_two_factor(&pending.token, &otp_token).await?;
    let refresh = response.refresh.as_deref().or(pending.refresh.as_deref());
    let store = api.token_store();
    match establish_session(store.as_ref(), &response.access, refresh) {
        Ok(claims) => {
            let state = AuthState::authenticated(claims, response.access);
            let landing = state.landing_route();
            set_auth_state.set(state);
            Ok(LoginOutcome::Authenticated { landing })
        }
        Err(err) => {
            fail_session(api, set_auth_state);
            Err(err)
        }
    }
}

pub async fn register_request(
    request: RegisterRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match api.register(&request).await {
        Ok(()) => {
            log::info!("Registered {}", request.username);
            Ok(())
        }
        Err(err) => {
            fail_session(api, set_auth_state);
            Err(err)
        }
    }
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    if let Err(err) = api.token_store().clear_session() {
        log::error!("Failed to clear stored tokens: {}", err);
    }
    set_auth_state.set(AuthState::anonymous());
    log::info!("Logged out");
}

fn api_from_context() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

pub fn use_login_action() -> Action<LoginRequest, Result<LoginOutcome, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = api_from_context();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_verify_two_factor_action() -> Action<String, Result<LoginOutcome, ApiError>> {
    let (auth, set_auth) = use_auth();
    let api = api_from_context();

    create_action(move |code: &String| {
        let code = code.clone();
        let api = api.clone();
        async move { verify_two_factor_request(code, &api, auth, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = api_from_context();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { register_request(payload, &api, set_auth).await }
    })
}

/// Clears the session and leaves for the login screen.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = api_from_context();
    Callback::new(move |_| {
        logout(&api, set_auth);
        crate::utils::navigation::redirect_to(crate::utils::navigation::LOGIN_PATH);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::storage::MemoryStore;
    use crate::utils::token::encode_test_token;
    use serde_json::json;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn restore_session_reads_valid_token() {
        let token = encode_test_token(&json!({"username": "rui", "groups": ["funcionario"], "exp": 2000}));
        let store = MemoryStore::with_tokens(&token, None);
        let (claims, stored) = restore_session(&store, 1000).unwrap().unwrap();
        assert_eq!(claims.username, "rui");
        assert_eq!(stored, token);
    }

    #[test]
    fn restore_session_without_token_is_anonymous() {
        assert_eq!(restore_session(&MemoryStore::new(), 0), Ok(None));
    }

    #[test]
    fn establish_session_clears_storage_on_bad_token() {
        let store = MemoryStore::with_tokens("old", Some("old-refresh"));
        let err = establish_session(&store, "garbage", Some("r")).unwrap_err();
        assert_eq!(err.code, "TOKEN_ERROR");
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn auth_state_capabilities_require_authentication() {
        let claims = Claims {
            user_id: Some(1),
            username: "adm".into(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            groups: vec!["administrador".into()],
            exp: None,
        };
        let state = AuthState::authenticated(claims.clone(), "t".into());
        assert!(state.can(Resource::User, Capability::Delete));
        let stale = AuthState {
            is_authenticated: false,
            ..state
        };
        assert!(!stale.can(Resource::User, Capability::Delete));
    }
}
