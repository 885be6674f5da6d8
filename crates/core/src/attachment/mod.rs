mod traits;
mod url;

pub use traits::UploadSigner;
pub use url::{bucket_object_url, endpoint_object_url, read_url, UploadTarget};
