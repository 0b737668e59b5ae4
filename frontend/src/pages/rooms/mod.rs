mod detail;
mod form;
mod list;
pub mod utils;

pub use detail::RoomDetailPage;
pub use form::RoomFormPage;
pub use list::RoomsPage;

pub const LIST_ROUTE: &str = "/quartos";
