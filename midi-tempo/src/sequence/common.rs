mod to_vec;
mod wrap_ok;

pub use to_vec::*;
pub use wrap_ok::*;
