pub mod cert;
pub mod error;
pub mod params;
pub mod pipeline;

pub use pipeline::convert_certificate;
