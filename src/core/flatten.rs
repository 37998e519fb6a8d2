use crate::core::walk::{depth, top_level};
use crate::domain::model::{Nested, Number};
use crate::domain::ports::Summation;
use crate::utils::error::{Result, SumError};

/// 攤平一層：把每個子序列的元素依序串接，葉節點原樣保留
pub fn flatten_once<'a>(items: &[&'a Nested]) -> Vec<&'a Nested> {
    flatten_pass(items).0
}

/// 攤平一層，同時回報結果中是否仍有序列
fn flatten_pass<'a>(items: &[&'a Nested]) -> (Vec<&'a Nested>, bool) {
    let mut flat = Vec::with_capacity(items.len());
    let mut residual = false;
    for item in items {
        match *item {
            Nested::Seq(children) => {
                residual |= children.iter().any(|child| !child.is_leaf());
                flat.extend(children.iter());
            }
            Nested::Leaf(_) => flat.push(*item),
        }
    }
    (flat, residual)
}

/// 以加法從 0 開始累加；遇到尚未攤平的序列即回報型別不符
fn fold(items: &[&Nested], passes: usize) -> Result<Number> {
    items
        .iter()
        .enumerate()
        .try_fold(Number::ZERO, |acc, (index, item)| match item {
            Nested::Leaf(n) => Ok(acc + *n),
            Nested::Seq(_) => Err(SumError::type_mismatch(
                format!("$[{}] after {} flatten pass(es)", index, passes),
                "number",
                "array",
            )),
        })
}

/// 依宣告深度 `max_depth` 最多攤平 `max_depth - 1` 次後加總。
///
/// 宣告深度小於實際深度時，殘留的序列會讓加總失敗並回傳
/// [`SumError::TypeMismatch`]，不會被當成 0。
///
/// 每次攤平都會複製整個中間序列，成本為 O(攤平次數 × 元素數)；
/// 很深的輸入請改用 [`crate::core::descent::sum_recursive`]。
pub fn sum_bounded(container: &Nested, max_depth: usize) -> Result<Number> {
    if max_depth == 0 {
        return Err(SumError::InvalidDepth { value: max_depth });
    }
    let top = top_level(container)?;

    let mut flat: Vec<&Nested> = top.iter().collect();
    tracing::debug!("Initial sequence: {} elements", flat.len());

    let mut passes = 0;
    let mut residual = flat.iter().any(|item| !item.is_leaf());
    while passes + 1 < max_depth && residual {
        (flat, residual) = flatten_pass(&flat);
        passes += 1;
        tracing::debug!("Flatten pass {}: {} elements", passes, flat.len());
    }

    let sum = fold(&flat, passes)?;
    tracing::debug!("Bounded sum after {} pass(es): {}", passes, sum);
    Ok(sum)
}

/// 先量測實際深度再攤平加總
pub fn sum_bounded_auto(container: &Nested) -> Result<Number> {
    top_level(container)?;
    sum_bounded(container, depth(container).max(1))
}

/// 迭代攤平策略。`max_depth` 為 `None` 時自動量測深度。
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedFlatten {
    pub max_depth: Option<usize>,
}

impl BoundedFlatten {
    pub fn declared(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    pub fn auto() -> Self {
        Self { max_depth: None }
    }
}

impl Summation for BoundedFlatten {
    fn name(&self) -> &'static str {
        "bounded"
    }

    fn sum(&self, container: &Nested) -> Result<Number> {
        match self.max_depth {
            Some(max_depth) => sum_bounded(container, max_depth),
            None => sum_bounded_auto(container),
        }
    }
}
