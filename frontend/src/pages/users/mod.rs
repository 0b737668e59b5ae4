mod detail;
mod form;
mod list;
pub mod utils;

pub use detail::UserDetailPage;
pub use form::UserFormPage;
pub use list::UsersPage;

pub const LIST_ROUTE: &str = "/utilizadores";
