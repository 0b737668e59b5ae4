use crate::{
    components::layout::LoadingSpinner,
    state::{
        auth::{use_auth, AuthState},
        permissions::{self, Action as Capability, Resource, Role},
    },
    utils::navigation,
};
use leptos::*;

pub const PERMISSION_DENIED: &str = "Você não tem permissão para acessar esta página.";

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        navigation::redirect_to_login();
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleGate {
    Loading,
    Anonymous,
    Denied,
    Granted,
}

fn role_gate(state: &AuthState, allowed: &[Role]) -> RoleGate {
    if state.loading {
        RoleGate::Loading
    } else if !state.is_authenticated {
        RoleGate::Anonymous
    } else if permissions::has_any_role(&state.groups(), allowed) {
        RoleGate::Granted
    } else {
        RoleGate::Denied
    }
}

/// Like [`RequireAuth`], but a signed-in user outside `roles` gets a
/// permission notice instead of a redirect.
#[component]
pub fn RequireRole(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let allowed = store_value(roles);
    let gate = create_memo(move |_| allowed.with_value(|roles| role_gate(&auth.get(), roles)));
    create_effect(move |_| {
        if gate.get() == RoleGate::Anonymous {
            navigation::redirect_to_login();
        }
    });
    view! {
        {move || match gate.get() {
            RoleGate::Loading => view! { <LoadingSpinner /> }.into_view(),
            RoleGate::Anonymous => ().into_view(),
            RoleGate::Denied => view! { <PermissionDenied /> }.into_view(),
            RoleGate::Granted => children().into_view(),
        }}
    }
}

#[component]
pub fn PermissionDenied() -> impl IntoView {
    view! {
        <div class="bg-yellow-50 border border-yellow-300 text-yellow-800 px-4 py-3 rounded my-4" role="alert">
            <p class="text-sm font-medium">{PERMISSION_DENIED}</p>
        </div>
    }
}

/// Renders its children only when the current user may perform `action`
/// on `resource`.
#[component]
pub fn VisibleIf(resource: Resource, action: Capability, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let allowed = create_memo(move |_| auth.get().can(resource, action));
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::token::Claims;

    fn state_with(groups: &[&str], is_authenticated: bool, loading: bool) -> AuthState {
        AuthState {
            user: Some(Claims {
                user_id: Some(1),
                username: "u".into(),
                email: String::new(),
                first_name: String::new(),
                last_name: String::new(),
                groups: groups.iter().map(|g| g.to_string()).collect(),
                exp: None,
            }),
            access_token: None,
            pending_two_factor: None,
            is_authenticated,
            loading,
        }
    }

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn role_gate_distinguishes_denied_from_anonymous() {
        let staff = [Role::Funcionario, Role::Administrador];
        assert_eq!(role_gate(&state_with(&[], false, true), &staff), RoleGate::Loading);
        assert_eq!(role_gate(&state_with(&[], false, false), &staff), RoleGate::Anonymous);
        assert_eq!(
            role_gate(&state_with(&["estudante"], true, false), &staff),
            RoleGate::Denied
        );
        assert_eq!(
            role_gate(&state_with(&["funcionario"], true, false), &staff),
            RoleGate::Granted
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, staff_claims, student_claims};
    use crate::test_support::ssr::render_to_string;

    fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            user: is_authenticated.then(student_claims),
            is_authenticated,
            loading,
            ..AuthState::default()
        });
        provide_context((auth, set_auth));
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(false, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_role_shows_notice_for_wrong_group() {
        let html = render_to_string(move || {
            provide_auth(Some(student_claims()));
            view! {
                <RequireRole roles=vec![Role::Funcionario, Role::Administrador]>
                    {|| view! { <div>"staff-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("staff-only"));
        assert!(html.contains(PERMISSION_DENIED));
    }

    #[test]
    fn require_role_renders_children_for_allowed_group() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            view! {
                <RequireRole roles=vec![Role::Funcionario]>
                    {|| view! { <div>"staff-only"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("staff-only"));
    }

    #[test]
    fn visible_if_hides_controls_without_capability() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            view! {
                <div>
                    <VisibleIf resource=Resource::Building action=Capability::Edit>
                        {|| view! { <span>"edit-control"</span> }}
                    </VisibleIf>
                    <VisibleIf resource=Resource::Building action=Capability::Delete>
                        {|| view! { <span>"delete-control"</span> }}
                    </VisibleIf>
                </div>
            }
        });
        assert!(html.contains("edit-control"));
        assert!(!html.contains("delete-control"));
    }
}
