use crate::core::walk::{format_path, top_level, Frame};
use crate::domain::model::{Nested, Number};
use crate::domain::ports::Summation;
use crate::utils::error::{Result, SumError};

pub fn sum_recursive(container: &Nested) -> Result<Number> {
    sum_recursive_from(container, Number::ZERO)
}

/// 從 `accumulator` 開始，依序走訪每個元素：序列就往下一層，葉節點就累加。
///
/// 以顯式堆疊取代遞迴呼叫，巢狀深度不受呼叫堆疊大小限制。
pub fn sum_recursive_from(container: &Nested, accumulator: Number) -> Result<Number> {
    descend(container, accumulator, None)
}

fn descend(container: &Nested, mut acc: Number, nesting_limit: Option<usize>) -> Result<Number> {
    let top = top_level(container)?;
    let mut stack = vec![Frame::new(top)];

    while let Some(frame) = stack.last_mut() {
        match frame.advance() {
            Some(Nested::Leaf(n)) => {
                acc = acc + *n;
                tracing::trace!(accumulator = %acc, "Leaf added");
            }
            Some(Nested::Seq(children)) => {
                if let Some(limit) = nesting_limit {
                    if stack.len() >= limit {
                        return Err(SumError::NestingLimitExceeded {
                            limit,
                            path: format_path(&stack),
                        });
                    }
                }
                stack.push(Frame::new(children));
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!("Recursive sum: {}", acc);
    Ok(acc)
}

/// 深度優先累加策略，可設定初始累加值與巢狀上限
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDescent {
    pub initial: Number,
    pub nesting_limit: Option<usize>,
}

impl RecursiveDescent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, initial: Number) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_nesting_limit(mut self, limit: usize) -> Self {
        self.nesting_limit = Some(limit);
        self
    }
}

impl Summation for RecursiveDescent {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn sum(&self, container: &Nested) -> Result<Number> {
        descend(container, self.initial, self.nesting_limit)
    }
}
