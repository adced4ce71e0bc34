mod common;
mod error;

pub use common::*;
pub use error::*;
