pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod load;
pub mod report;
pub mod show;
