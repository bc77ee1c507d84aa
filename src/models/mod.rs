pub mod entry;
pub mod record;
