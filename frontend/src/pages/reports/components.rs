use crate::{
    api::CategoryCount,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::reports::repository::{load_in_sequence, Aggregate, AggregateResult},
};
use leptos::*;

/// Width of a count bar as a percentage of the largest count.
pub fn bar_width(count: i64, max: i64) -> u32 {
    if max <= 0 || count <= 0 {
        return 0;
    }
    ((count.min(max) * 100) / max) as u32
}

#[component]
pub fn AggregateCard(result: AggregateResult) -> impl IntoView {
    let body = match result.rows {
        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
        Ok(rows) if rows.is_empty() => {
            view! { <p class="text-sm text-gray-500">"Sem dados."</p> }.into_view()
        }
        Ok(rows) => view! { <CountBars rows=rows /> }.into_view(),
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">{result.aggregate.title()}</h2>
            {body}
        </section>
    }
}

#[component]
fn CountBars(rows: Vec<CategoryCount>) -> impl IntoView {
    let max = rows.iter().map(|row| row.count).max().unwrap_or(0);
    view! {
        <ul class="space-y-3">
            {rows
                .into_iter()
                .map(|row| {
                    let width = format!("width: {}%", bar_width(row.count, max));
                    view! {
                        <li>
                            <div class="flex justify-between text-sm text-gray-700">
                                <span>{row.category}</span>
                                <span class="font-semibold">{row.count}</span>
                            </div>
                            <div class="mt-1 h-2 rounded bg-gray-100">
                                <div class="h-2 rounded bg-blue-500" style=width></div>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Loads `aggregates` once on mount and lays out one card per aggregate.
#[component]
pub fn AggregateGrid(aggregates: &'static [Aggregate]) -> impl IntoView {
    let api = crate::hooks::use_api();
    let results = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { load_in_sequence(&api, aggregates).await }
        },
    );

    view! {
        {move || match results.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(results) => view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {results
                        .into_iter()
                        .map(|result| view! { <AggregateCard result=result /> })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }}
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_lists_each_category() {
        let html = render_to_string(move || {
            let result = AggregateResult {
                aggregate: Aggregate::RoomOccupancy,
                rows: Ok(vec![
                    CategoryCount::new("Total", 8),
                    CategoryCount::new("Livres", 2),
                    CategoryCount::new("Ocupados", 6),
                ]),
            };
            view! { <AggregateCard result=result /> }
        });
        assert!(html.contains("Ocupação de Quartos"));
        assert!(html.contains("Livres"));
        assert!(html.contains("width: 75%"));
    }

    #[test]
    fn failed_card_shows_its_own_error() {
        let html = render_to_string(move || {
            let result = AggregateResult {
                aggregate: Aggregate::BuildingsByType,
                rows: Err(ApiError::unknown("Falha ao carregar.")),
            };
            view! { <AggregateCard result=result /> }
        });
        assert!(html.contains("Edifícios por Tipo"));
        assert!(html.contains("Falha ao carregar."));
    }
}
