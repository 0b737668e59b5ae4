use std::future::Future;

use crate::api::{ApiClient, ApiError};
use leptos::*;

use super::use_api;

/// `(value, label)` choices for a select, fetched once. A failed lookup
/// is logged and leaves the select empty.
pub fn use_lookup<T, F, Fut>(fetcher: F, to_option: fn(&T) -> (String, String)) -> Signal<Vec<(String, String)>>
where
    T: Clone + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let api = use_api();
    let rows = create_local_resource(
        || (),
        move |_| {
            let request = fetcher(api.clone());
            async move {
                request.await.map_err(|err| {
                    log::error!("Failed to load select options: {}", err);
                    err
                })
            }
        },
    );
    Signal::derive(move || match rows.get() {
        Some(Ok(rows)) => rows.iter().map(to_option).collect(),
        _ => Vec::new(),
    })
}
