pub mod analyse;
pub mod classify;
pub mod first_seen;
pub mod reconcile;
pub mod rows;
