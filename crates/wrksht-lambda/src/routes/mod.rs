pub mod ping;
pub mod worksheet;
