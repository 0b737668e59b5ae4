pub mod files;
pub mod navigation;
pub mod storage;
pub mod time;
pub mod token;
