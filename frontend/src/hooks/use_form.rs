use std::future::Future;

use crate::{
    api::{ApiClient, ApiError},
    state::forms::{submit_form, FieldErrors, FormFields, SubmitError},
};
use leptos::*;

use super::{use_api, use_record};

/// Create/edit form state. With an id the record is fetched once and copied
/// into `fields`; without one the form starts from `F::default()`.
pub struct EntityForm<F: FormFields> {
    pub id: Memo<Option<i64>>,
    pub fields: RwSignal<F>,
    pub errors: RwSignal<FieldErrors>,
    pub submit_error: RwSignal<Option<ApiError>>,
    pub pending: RwSignal<bool>,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<ApiError>>,
    api: StoredValue<ApiClient>,
}

impl<F: FormFields> Clone for EntityForm<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormFields> Copy for EntityForm<F> {}

impl<F: FormFields> EntityForm<F> {
    pub fn is_edit(&self) -> bool {
        self.id.get_untracked().is_some()
    }

    /// Value/setter pair for a text input bound to one field.
    pub fn bind(
        &self,
        get: fn(&F) -> String,
        set: fn(&mut F, String),
    ) -> (Signal<String>, Callback<String>) {
        let fields = self.fields;
        (
            Signal::derive(move || fields.with(get)),
            Callback::new(move |value: String| fields.update(|f| set(f, value))),
        )
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
    }

    /// Validates, then saves through `save(api, id, input)`. Invalid fields
    /// are annotated and no request is made. `on_success` runs after the
    /// backend accepts the write.
    pub fn submit<S, Fut, T>(&self, save: S, on_success: impl FnOnce(T) + 'static)
    where
        S: FnOnce(ApiClient, Option<i64>, F::Input) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        T: 'static,
    {
        if self.pending.get_untracked() {
            return;
        }
        let form = *self;
        let api = self.api.get_value();
        let id = self.id.get_untracked();
        let snapshot = self.fields.get_untracked();
        form.pending.set(true);
        form.submit_error.set(None);
        spawn_local(async move {
            let result = submit_form(&snapshot, move |input| save(api, id, input)).await;
            form.pending.set(false);
            match result {
                Ok(saved) => {
                    form.errors.set(FieldErrors::new());
                    on_success(saved);
                }
                Err(SubmitError::Invalid(errors)) => form.errors.set(errors),
                Err(SubmitError::Api(err)) => {
                    log::error!("Form submit failed: {}", err);
                    form.errors.set(FieldErrors::new());
                    form.submit_error.set(Some(err));
                }
            }
        });
    }
}

pub fn use_entity_form<F, L, Fut>(id: Memo<Option<i64>>, loader: L) -> EntityForm<F>
where
    F: FormFields,
    L: Fn(ApiClient, i64) -> Fut + 'static,
    Fut: Future<Output = Result<F::Record, ApiError>> + 'static,
{
    let api = use_api();
    let fields = create_rw_signal(F::default());
    let record = use_record(id, loader);

    create_effect(move |_| {
        if let Some(Ok(Some(existing))) = record.get() {
            fields.set(F::from_record(&existing));
        }
    });

    EntityForm {
        id,
        fields,
        errors: create_rw_signal(FieldErrors::new()),
        submit_error: create_rw_signal(None),
        pending: create_rw_signal(false),
        loading: Signal::derive(move || record.loading().get()),
        load_error: Signal::derive(move || record.get().and_then(Result::err)),
        api: store_value(api),
    }
}
