pub mod redirect;
pub mod upload;
