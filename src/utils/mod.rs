pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::filename_from_url;
