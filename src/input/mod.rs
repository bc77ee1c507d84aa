pub mod csv;
pub mod discovery;
