//! Upload and listing workflows, independent of the HTTP layer.

pub mod listing;
pub mod upload;

pub use listing::list_files;
pub use upload::{upload_pdf, UploadOptions};
