use crate::{
    components::common::PageHeader,
    pages::reports::{components::AggregateGrid, repository::REPORT_AGGREGATES},
};
use leptos::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <PageHeader title="Relatórios" />
        <AggregateGrid aggregates=REPORT_AGGREGATES />
    }
}
