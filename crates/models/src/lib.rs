pub mod address;
pub mod db;
pub mod errors;
