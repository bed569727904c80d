pub mod record;
pub mod status_code;

pub use record::extract;
pub use status_code::StatusCode;
