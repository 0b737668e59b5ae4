use crate::{
    api::{ApiClient, Vacancy},
    components::{
        common::PageHeader,
        list::{ListView, CELL},
    },
    hooks::use_collection,
    state::listing::ListState,
};
use leptos::*;

pub const LIST_ROUTE: &str = "/vagas";

/// Residences with open places. Read-only for every role.
#[component]
pub fn VacanciesPage() -> impl IntoView {
    let vacancies = use_collection(|api: ApiClient| async move { api.list_vacancies().await });

    view! {
        <PageHeader title="Vagas Disponíveis" />
        <VacanciesTable
            list=vacancies.list
            loading=vacancies.loading
            load_error=vacancies.load_error
        />
    }
}

#[component]
pub fn VacanciesTable(
    list: RwSignal<ListState<Vacancy>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
) -> impl IntoView {
    let row = |vacancy: Vacancy| {
        let building = vacancy
            .edificio
            .as_ref()
            .map(|edificio| edificio.display())
            .unwrap_or_else(|| "-".to_string());
        let capacity = vacancy
            .capacidade
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        view! {
            <tr>
                <td class=CELL>{vacancy.nome}</td>
                <td class=CELL>{building}</td>
                <td class=CELL>{capacity}</td>
                <td class=CELL></td>
            </tr>
        }
    };

    view! {
        <ListView
            list=list
            loading=loading
            load_error=load_error
            headers=vec!["Residência", "Edifício", "Capacidade"]
            row=row
            empty_label="Não há vagas disponíveis no momento."
        />
    }
}
