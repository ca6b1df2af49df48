pub mod given;
mod stub_backend;

pub use stub_backend::*;
pub use test_context::*;
