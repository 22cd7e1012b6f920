pub mod build;
pub mod icon;
pub mod init;
