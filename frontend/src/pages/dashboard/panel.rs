use crate::{
    components::{common::PageHeader, guard::VisibleIf},
    pages::reports::{components::AggregateGrid, repository::DASHBOARD_AGGREGATES},
    state::{
        auth::{use_auth, AuthState},
        permissions::{Action as Capability, Resource},
    },
};
use leptos::*;

pub fn greeting(state: &AuthState) -> String {
    match state.user.as_ref() {
        Some(user) if !user.first_name.trim().is_empty() => {
            format!("Bem-vindo, {}", user.first_name.trim())
        }
        Some(user) if !user.username.is_empty() => format!("Bem-vindo, {}", user.username),
        _ => "Bem-vindo".to_string(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();

    view! {
        <PageHeader title="Dashboard">
            <VisibleIf resource=Resource::Reports action=Capability::View>
                <a href="/relatorios" class="rounded-md border border-gray-300 px-4 py-2 text-sm text-gray-700 hover:bg-gray-50">
                    "Ver Relatórios"
                </a>
            </VisibleIf>
        </PageHeader>
        <p class="mb-6 text-gray-600">{move || greeting(&auth.get())}</p>
        <QuickLinks />
        <AggregateGrid aggregates=DASHBOARD_AGGREGATES />
    }
}

#[component]
fn QuickLinks() -> impl IntoView {
    let links = [
        (Resource::Application, "/candidaturas", "Candidaturas"),
        (Resource::Resident, "/residentes", "Residentes"),
        (Resource::Building, "/edificios", "Edifícios"),
        (Resource::User, "/utilizadores", "Utilizadores"),
    ];
    view! {
        <div class="mb-6 flex flex-wrap gap-3">
            {links
                .into_iter()
                .map(|(resource, href, label)| {
                    view! {
                        <VisibleIf resource=resource action=Capability::View>
                            <a href=href class="rounded-md bg-white shadow px-4 py-3 text-sm font-medium text-blue-700 hover:bg-blue-50">
                                {label}
                            </a>
                        </VisibleIf>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::staff_claims;

    #[test]
    fn greeting_prefers_first_name() {
        let mut claims = staff_claims();
        claims.first_name = "Ana".into();
        let state = AuthState::authenticated(claims, "token".into());
        assert_eq!(greeting(&state), "Bem-vindo, Ana");
        assert_eq!(greeting(&AuthState::anonymous()), "Bem-vindo");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_claims, provide_auth, staff_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn staff_links_skip_user_management() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            view! { <QuickLinks /> }
        });
        assert!(html.contains("/candidaturas"));
        assert!(html.contains("/residentes"));
        assert!(!html.contains("/utilizadores"));
    }

    #[test]
    fn admin_links_include_user_management() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_claims()));
            view! { <QuickLinks /> }
        });
        assert!(html.contains("/utilizadores"));
    }
}
