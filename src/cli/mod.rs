pub mod database;
pub mod seed;
pub mod token;
