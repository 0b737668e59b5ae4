use crate::state::{
    auth::{use_auth, use_logout},
    permissions::{Action as Capability, Resource},
};
use leptos::*;

const NAV_LINK: &str =
    "text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";

struct NavEntry {
    href: &'static str,
    label: &'static str,
    resource: Resource,
    action: Capability,
}

const NAV_ENTRIES: [NavEntry; 10] = [
    NavEntry { href: "/dashboard", label: "Painel", resource: Resource::Dashboard, action: Capability::View },
    NavEntry { href: "/candidaturas", label: "Candidaturas", resource: Resource::Application, action: Capability::View },
    NavEntry { href: "/candidaturas/nova", label: "Nova Candidatura", resource: Resource::Application, action: Capability::Create },
    NavEntry { href: "/edificios", label: "Edifícios", resource: Resource::Building, action: Capability::View },
    NavEntry { href: "/quartos", label: "Quartos", resource: Resource::Room, action: Capability::View },
    NavEntry { href: "/camas", label: "Camas", resource: Resource::Bed, action: Capability::View },
    NavEntry { href: "/residentes", label: "Residentes", resource: Resource::Resident, action: Capability::View },
    NavEntry { href: "/utilizadores", label: "Utilizadores", resource: Resource::User, action: Capability::View },
    NavEntry { href: "/relatorios", label: "Relatórios", resource: Resource::Reports, action: Capability::View },
    NavEntry { href: "/vagas", label: "Vagas", resource: Resource::Vacancy, action: Capability::View },
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let on_logout = use_logout();
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };
    let home_href = move || auth.get().landing_route();

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=home_href class="text-xl font-semibold text-gray-900">
                        "Residências"
                    </a>
                    <nav class="flex flex-wrap items-center gap-1">
                        {NAV_ENTRIES
                            .iter()
                            .map(|entry| {
                                let (resource, action) = (entry.resource, entry.action);
                                view! {
                                    <Show when=move || auth.get().can(resource, action)>
                                        <a href=entry.href class=NAV_LINK>{entry.label}</a>
                                    </Show>
                                }
                            })
                            .collect_view()}
                        <span class="text-sm text-gray-500 px-3">{display_name}</span>
                        <button
                            class=NAV_LINK
                            on:click=move |_| on_logout.call(())
                        >
                            "Sair"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">{children()}</div>
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-300 text-green-800 px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}
