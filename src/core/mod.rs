pub mod descent;
pub mod engine;
pub mod flatten;
pub mod walk;

pub use crate::domain::model::{Nested, Number};
pub use crate::domain::ports::Summation;
pub use crate::utils::error::Result;
