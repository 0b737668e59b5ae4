use crate::api::{
    Application, ApiError, Bed, Building, ForeignRef, Resident, Room, User, Vacancy,
};
use crate::state::forms::MessageState;

pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub trait Identified {
    fn id(&self) -> i64;
}

/// The fields a list page's text filter looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;

    /// Key for the optional category filter (an application's status).
    fn category(&self) -> Option<&'static str> {
        None
    }

    fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Client-side view of a fully fetched collection: filter, page, splice.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub records: Vec<T>,
    pub search: String,
    pub category: Option<&'static str>,
    pub page: usize,
    pub page_size: usize,
    pub notice: MessageState,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            category: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            notice: MessageState::default(),
        }
    }
}

impl<T: Clone + Identified + Searchable> ListState<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn replace_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.clamp_page();
    }

    fn keeps(&self, record: &T) -> bool {
        record.matches(&self.search)
            && self
                .category
                .map_or(true, |category| record.category() == Some(category))
    }

    pub fn filtered(&self) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| self.keeps(record))
            .cloned()
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|record| self.keeps(record)).count()
    }

    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size.max(1))
    }

    pub fn visible_rows(&self) -> Vec<T> {
        let size = self.page_size.max(1);
        self.filtered()
            .into_iter()
            .skip(self.page * size)
            .take(size)
            .collect()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    pub fn set_category(&mut self, category: Option<&'static str>) {
        self.category = category;
        self.page = 0;
    }

    /// Unsupported sizes fall back to the default.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = if PAGE_SIZES.contains(&size) {
            size
        } else {
            DEFAULT_PAGE_SIZE
        };
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    fn clamp_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page > last {
            self.page = last;
        }
    }

    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        self.clamp_page();
        removed
    }

    /// Splices the row out on success; leaves the list untouched on failure.
    pub fn apply_delete_result(
        &mut self,
        id: i64,
        result: Result<(), ApiError>,
        success: &str,
        failure: &str,
    ) {
        match result {
            Ok(()) => {
                self.remove_by_id(id);
                self.notice.set_success(success);
            }
            Err(err) => {
                self.notice.set_error(format!("{} {}", failure, err.error));
            }
        }
    }
}

impl Identified for Vacancy {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Vacancy {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.nome.clone()];
        fields.extend(self.edificio.as_ref().map(ForeignRef::display));
        fields
    }
}

impl Identified for Building {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Building {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            self.endereco.clone(),
            self.numero_apartamentos.to_string(),
        ]
    }
}

impl Identified for Room {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Room {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.numero.clone(),
            self.capacidade.to_string(),
            self.edificio.display(),
        ]
    }
}

impl Identified for Bed {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Bed {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.numero.clone(),
            self.status.as_str().to_string(),
            self.quarto.display(),
        ]
    }
}

impl Identified for Resident {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Resident {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            self.email.clone(),
            self.telefone.clone(),
            self.endereco.clone(),
        ]
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        vec![self.username.clone(), self.email.clone()]
    }
}

impl Identified for Application {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Application {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.student_name(),
            self.residencia.display(),
            self.status.label().to_string(),
            self.data_submissao.clone(),
        ]
    }

    fn category(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}
