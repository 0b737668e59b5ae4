mod detail;
mod form;
mod list;
pub mod utils;

pub use detail::BuildingDetailPage;
pub use form::BuildingFormPage;
pub use list::BuildingsPage;

pub const LIST_ROUTE: &str = "/edificios";
