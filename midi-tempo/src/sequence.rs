mod common;
pub mod event;

pub use common::*;
