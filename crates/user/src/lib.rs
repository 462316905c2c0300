pub mod address;
pub mod personalisasi;
