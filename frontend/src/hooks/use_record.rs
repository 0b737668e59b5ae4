use std::future::Future;

use crate::api::{ApiClient, ApiError};
use leptos::*;

use super::use_api;

pub type RecordResource<T> = Resource<Option<i64>, Result<Option<T>, ApiError>>;

/// Loads one record whenever `id` changes. `None` resolves to `Ok(None)`
/// without a request, which is how create forms start empty.
pub fn use_record<T, F, Fut>(id: Memo<Option<i64>>, fetcher: F) -> RecordResource<T>
where
    T: Clone + 'static,
    F: Fn(ApiClient, i64) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = use_api();
    let fetcher = std::rc::Rc::new(fetcher);
    create_local_resource(
        move || id.get(),
        move |id| {
            let api = api.clone();
            let fetcher = fetcher.clone();
            async move {
                match id {
                    Some(id) => fetcher(api, id).await.map(Some).map_err(|err| {
                        log::error!("Failed to load record #{}: {}", id, err);
                        err
                    }),
                    None => Ok(None),
                }
            }
        },
    )
}

/// Parses the `:id` route segment.
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|raw| raw.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_numbers_only() {
        assert_eq!(parse_id(Some("12".into())), Some(12));
        assert_eq!(parse_id(Some("criar".into())), None);
        assert_eq!(parse_id(None), None);
    }
}
