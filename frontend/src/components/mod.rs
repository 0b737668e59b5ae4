pub mod common;
pub mod confirm_dialog;
pub mod error;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod list;
pub mod notice;
