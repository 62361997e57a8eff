pub mod date_format;
pub mod reading_time;
