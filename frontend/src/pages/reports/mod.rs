pub mod components;
pub mod repository;

mod panel;

pub use panel::ReportsPage;
