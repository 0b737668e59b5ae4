mod detail;
mod form;
mod list;
mod review;
pub mod utils;

pub use detail::{ApplicationDetailPage, DocumentChecklist};
pub use form::{ApplicationEditPage, NewApplicationPage};
pub use list::{ApplicationsPage, StatusBadge};
pub use review::ApplicationReviewPage;

pub const LIST_ROUTE: &str = "/candidaturas";
