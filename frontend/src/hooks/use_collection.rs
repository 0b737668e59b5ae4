use std::future::Future;

use crate::{
    api::{ApiClient, ApiError},
    state::listing::{Identified, ListState, Searchable},
};
use leptos::*;

use super::use_api;

/// A fetched collection plus the local list state derived from it.
pub struct Collection<T: 'static> {
    pub list: RwSignal<ListState<T>>,
    pub loading: Signal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub reload: RwSignal<u32>,
    api: StoredValue<ApiClient>,
}

impl<T: 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Collection<T> {}

impl<T> Collection<T>
where
    T: Clone + Identified + Searchable + 'static,
{
    pub fn refetch(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    /// Issues the delete and splices the row out only when it succeeds.
    pub fn delete<F, Fut>(&self, id: i64, deleter: F, success: &'static str, failure: &'static str)
    where
        F: FnOnce(ApiClient, i64) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let api = self.api.get_value();
        let list = self.list;
        spawn_local(async move {
            let result = deleter(api, id).await;
            if let Err(err) = &result {
                log::error!("Delete of #{} failed: {}", id, err);
            }
            list.update(|state| state.apply_delete_result(id, result, success, failure));
        });
    }

    pub fn dismiss_notice(&self) {
        self.list.update(|state| state.notice.clear());
    }
}

/// Fetches the whole collection on mount (and on every `refetch`) and keeps
/// a local, spliceable copy of it.
pub fn use_collection<T, F, Fut>(fetcher: F) -> Collection<T>
where
    T: Clone + Identified + Searchable + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let api = use_api();
    let reload = create_rw_signal(0u32);
    let list = create_rw_signal(ListState::<T>::default());
    let load_error = create_rw_signal(None::<String>);

    let api_for_fetch = api.clone();
    let resource = create_local_resource(
        move || reload.get(),
        move |_| fetcher(api_for_fetch.clone()),
    );

    create_effect(move |_| {
        if let Some(result) = resource.get() {
            match result {
                Ok(rows) => {
                    load_error.set(None);
                    list.update(|state| state.replace_records(rows));
                }
                Err(err) => {
                    log::error!("Failed to load collection: {}", err);
                    load_error.set(Some(err.error));
                }
            }
        }
    });

    Collection {
        list,
        loading: Signal::derive(move || resource.loading().get()),
        load_error,
        reload,
        api: store_value(api),
    }
}
