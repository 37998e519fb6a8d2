use crate::domain::model::{Nested, Number};
use crate::utils::error::Result;

/// 加總策略的共同介面
pub trait Summation {
    fn name(&self) -> &'static str;
    fn sum(&self, container: &Nested) -> Result<Number>;
}
