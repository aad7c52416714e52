pub mod init;
pub mod similarity;
