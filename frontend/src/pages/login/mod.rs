//! `/login`: email and password, then the landing route, the `next` target
//! or the two-factor step.

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPage;
