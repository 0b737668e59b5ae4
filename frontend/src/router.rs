use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAuth, RequireRole},
        layout::{Layout, LoadingSpinner},
    },
    pages::{
        applications::{
            ApplicationDetailPage, ApplicationEditPage, ApplicationReviewPage, ApplicationsPage,
            NewApplicationPage,
        },
        beds::{BedDetailPage, BedFormPage, BedsPage},
        buildings::{BuildingDetailPage, BuildingFormPage, BuildingsPage},
        dashboard::DashboardPage,
        home::HomePage,
        login::LoginPage,
        not_found::NotFoundPage,
        register::RegisterPage,
        reports::ReportsPage,
        residents::{ResidentDetailPage, ResidentFormPage, ResidentsPage},
        rooms::{RoomDetailPage, RoomFormPage, RoomsPage},
        two_factor::TwoFactorPage,
        users::{UserDetailPage, UserFormPage, UsersPage},
        vacancies::VacanciesPage,
    },
    state::{
        auth::{use_auth, AuthProvider},
        permissions::{allowed_roles, Action as Capability, Resource},
    },
    utils::navigation::LOGIN_PATH,
};

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register", "/2fa-verification"];

/// A signed-in route: the capability it requires (`None` means any
/// authenticated user) and the page it renders.
pub struct ProtectedRoute {
    pub path: &'static str,
    pub gate: Option<(Resource, Capability)>,
    page: fn() -> View,
}

pub static PROTECTED_ROUTES: &[ProtectedRoute] = &[
    ProtectedRoute {
        path: "/inicio",
        gate: None,
        page: || view! { <HomePage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/dashboard",
        gate: Some((Resource::Dashboard, Capability::View)),
        page: || view! { <DashboardPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/relatorios",
        gate: Some((Resource::Reports, Capability::View)),
        page: || view! { <ReportsPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/vagas",
        gate: Some((Resource::Vacancy, Capability::View)),
        page: || view! { <VacanciesPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/edificios",
        gate: Some((Resource::Building, Capability::View)),
        page: || view! { <BuildingsPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/edificios/criar",
        gate: Some((Resource::Building, Capability::Create)),
        page: || view! { <BuildingFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/edificios/editar/:id",
        gate: Some((Resource::Building, Capability::Edit)),
        page: || view! { <BuildingFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/edificios/:id",
        gate: Some((Resource::Building, Capability::View)),
        page: || view! { <BuildingDetailPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/quartos",
        gate: Some((Resource::Room, Capability::View)),
        page: || view! { <RoomsPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/quartos/criar",
        gate: Some((Resource::Room, Capability::Create)),
        page: || view! { <RoomFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/quartos/editar/:id",
        gate: Some((Resource::Room, Capability::Edit)),
        page: || view! { <RoomFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/quartos/:id",
        gate: Some((Resource::Room, Capability::View)),
        page: || view! { <RoomDetailPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/camas",
        gate: Some((Resource::Bed, Capability::View)),
        page: || view! { <BedsPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/camas/criar",
        gate: Some((Resource::Bed, Capability::Create)),
        page: || view! { <BedFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/camas/editar/:id",
        gate: Some((Resource::Bed, Capability::Edit)),
        page: || view! { <BedFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/camas/:id",
        gate: Some((Resource::Bed, Capability::View)),
        page: || view! { <BedDetailPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/residentes",
        gate: Some((Resource::Resident, Capability::View)),
        page: || view! { <ResidentsPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/residentes/criar",
        gate: Some((Resource::Resident, Capability::Create)),
        page: || view! { <ResidentFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/residentes/editar/:id",
        gate: Some((Resource::Resident, Capability::Edit)),
        page: || view! { <ResidentFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/residentes/:id",
        gate: Some((Resource::Resident, Capability::View)),
        page: || view! { <ResidentDetailPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/utilizadores",
        gate: Some((Resource::User, Capability::View)),
        page: || view! { <UsersPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/utilizadores/criar",
        gate: Some((Resource::User, Capability::Create)),
        page: || view! { <UserFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/utilizadores/editar/:id",
        gate: Some((Resource::User, Capability::Edit)),
        page: || view! { <UserFormPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/utilizadores/:id",
        gate: Some((Resource::User, Capability::View)),
        page: || view! { <UserDetailPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/candidaturas",
        gate: Some((Resource::Application, Capability::View)),
        page: || view! { <ApplicationsPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/candidaturas/nova",
        gate: Some((Resource::Application, Capability::Create)),
        page: || view! { <NewApplicationPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/candidaturas/editar/:id",
        gate: Some((Resource::Application, Capability::Edit)),
        page: || view! { <ApplicationEditPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/candidaturas/avaliar/:id",
        gate: Some((Resource::Application, Capability::Review)),
        page: || view! { <ApplicationReviewPage /> }.into_view(),
    },
    ProtectedRoute {
        path: "/candidaturas/:id",
        gate: Some((Resource::Application, Capability::View)),
        page: || view! { <ApplicationDetailPage /> }.into_view(),
    },
];

pub fn find_protected(path: &str) -> Option<&'static ProtectedRoute> {
    PROTECTED_ROUTES.iter().find(|route| route.path == path)
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Residências" />
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=Landing />
                    <Route path="/login" view=LoginPage />
                    <Route path="/register" view=RegisterPage />
                    <Route path="/2fa-verification" view=TwoFactorPage />
                    <Route path="/inicio" view=|| protected("/inicio") />
                    <Route path="/dashboard" view=|| protected("/dashboard") />
                    <Route path="/relatorios" view=|| protected("/relatorios") />
                    <Route path="/vagas" view=|| protected("/vagas") />
                    <Route path="/edificios" view=|| protected("/edificios") />
                    <Route path="/edificios/criar" view=|| protected("/edificios/criar") />
                    <Route path="/edificios/editar/:id" view=|| protected("/edificios/editar/:id") />
                    <Route path="/edificios/:id" view=|| protected("/edificios/:id") />
                    <Route path="/quartos" view=|| protected("/quartos") />
                    <Route path="/quartos/criar" view=|| protected("/quartos/criar") />
                    <Route path="/quartos/editar/:id" view=|| protected("/quartos/editar/:id") />
                    <Route path="/quartos/:id" view=|| protected("/quartos/:id") />
                    <Route path="/camas" view=|| protected("/camas") />
                    <Route path="/camas/criar" view=|| protected("/camas/criar") />
                    <Route path="/camas/editar/:id" view=|| protected("/camas/editar/:id") />
                    <Route path="/camas/:id" view=|| protected("/camas/:id") />
                    <Route path="/residentes" view=|| protected("/residentes") />
                    <Route path="/residentes/criar" view=|| protected("/residentes/criar") />
                    <Route path="/residentes/editar/:id" view=|| protected("/residentes/editar/:id") />
                    <Route path="/residentes/:id" view=|| protected("/residentes/:id") />
                    <Route path="/utilizadores" view=|| protected("/utilizadores") />
                    <Route path="/utilizadores/criar" view=|| protected("/utilizadores/criar") />
                    <Route path="/utilizadores/editar/:id" view=|| protected("/utilizadores/editar/:id") />
                    <Route path="/utilizadores/:id" view=|| protected("/utilizadores/:id") />
                    <Route path="/candidaturas" view=|| protected("/candidaturas") />
                    <Route path="/candidaturas/nova" view=|| protected("/candidaturas/nova") />
                    <Route path="/candidaturas/editar/:id" view=|| protected("/candidaturas/editar/:id") />
                    <Route path="/candidaturas/avaliar/:id" view=|| protected("/candidaturas/avaliar/:id") />
                    <Route path="/candidaturas/:id" view=|| protected("/candidaturas/:id") />
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </Router>
        </AuthProvider>
    }
}

/// Sends `/` to the signed-in user's landing route, or to login.
#[component]
fn Landing() -> impl IntoView {
    let (auth, _) = use_auth();
    view! {
        {move || {
            let state = auth.get();
            if state.loading {
                view! { <LoadingSpinner /> }.into_view()
            } else if state.is_authenticated {
                view! { <Redirect path=state.landing_route() /> }.into_view()
            } else {
                view! { <Redirect path=LOGIN_PATH /> }.into_view()
            }
        }}
    }
}

/// Renders the table entry for `path` behind its gate, inside the layout.
fn protected(path: &'static str) -> View {
    let Some(route) = find_protected(path) else {
        log::error!("No protected route registered for {}", path);
        return view! { <NotFoundPage /> }.into_view();
    };
    let page = route.page;
    match route.gate {
        None => view! { <Signed>{page()}</Signed> }.into_view(),
        Some((resource, action)) => {
            view! { <Gated resource=resource action=action>{page()}</Gated> }.into_view()
        }
    }
}

#[component]
fn Signed(children: ChildrenFn) -> impl IntoView {
    view! {
        <Layout>
            <RequireAuth>{children()}</RequireAuth>
        </Layout>
    }
}

#[component]
fn Gated(resource: Resource, action: Capability, children: ChildrenFn) -> impl IntoView {
    view! {
        <Layout>
            <RequireRole roles=allowed_roles(resource, action).to_vec()>{children()}</RequireRole>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::guard::PERMISSION_DENIED;
    use crate::test_support::helpers::{provide_auth, staff_claims, student_claims};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn staff_are_denied_user_management() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_claims()));
            protected("/utilizadores")
        });
        assert!(html.contains(PERMISSION_DENIED));
    }

    #[test]
    fn students_reach_the_vacancy_list() {
        let html = render_to_string(move || {
            provide_auth(Some(student_claims()));
            protected("/vagas")
        });
        assert!(html.contains("Vagas Disponíveis"));
        assert!(!html.contains(PERMISSION_DENIED));
    }
}
