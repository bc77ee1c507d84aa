pub mod analyse;
pub mod config;
pub mod init;
pub mod reconcile;
