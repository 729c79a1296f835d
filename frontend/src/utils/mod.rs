pub mod calendar;
pub mod date_range;
pub mod download;
pub mod format;
pub mod storage;
pub mod time;
pub mod upload;
pub mod validation;
