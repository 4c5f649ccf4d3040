pub mod crypto;
pub mod db;
