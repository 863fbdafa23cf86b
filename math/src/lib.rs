pub mod error;
pub mod inverse;
pub mod limbs;
pub mod mont;

pub use mont::{derive_montgomery_record, MontgomeryKeyRecord};
