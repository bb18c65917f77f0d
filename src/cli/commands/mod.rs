pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod serve;
