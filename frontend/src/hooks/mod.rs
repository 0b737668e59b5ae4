mod use_collection;
mod use_form;
mod use_lookup;
mod use_record;

pub use use_collection::{use_collection, Collection};
pub use use_form::{use_entity_form, EntityForm};
pub use use_lookup::use_lookup;
pub use use_record::{parse_id, use_record, RecordResource};

use crate::api::ApiClient;
use leptos::*;

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}
