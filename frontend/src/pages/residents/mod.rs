mod detail;
mod form;
mod list;
pub mod utils;

pub use detail::ResidentDetailPage;
pub use form::ResidentFormPage;
pub use list::ResidentsPage;

pub const LIST_ROUTE: &str = "/residentes";
