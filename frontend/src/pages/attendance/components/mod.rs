pub mod manual_entry;
pub mod recent;
pub mod records;
