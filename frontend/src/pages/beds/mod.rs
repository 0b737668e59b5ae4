mod detail;
mod form;
mod list;
pub mod utils;

pub use detail::BedDetailPage;
pub use form::BedFormPage;
pub use list::BedsPage;

pub const LIST_ROUTE: &str = "/camas";
