mod applications;
mod auth;
mod beds;
mod buildings;
pub mod client;
pub mod reports;
mod residents;
mod rooms;
pub mod types;
mod users;

pub use applications::application_form;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
