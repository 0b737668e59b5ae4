mod panel;

pub use panel::{greeting, DashboardPage};
