use serde::Serialize;
use std::fmt;
use std::ops::Add;

/// 數值葉節點：整數或浮點數
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub const ZERO: Number = Number::Int(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// 比較兩個結果是否相同；兩邊都是 NaN 時視為相同
    pub fn same_value(self, other: Number) -> bool {
        match (self, other) {
            (Number::Float(a), Number::Float(b)) if a.is_nan() && b.is_nan() => true,
            (a, b) => a == b,
        }
    }

    pub fn from_json(n: &serde_json::Number) -> Option<Self> {
        n.as_i64()
            .map(Number::Int)
            .or_else(|| n.as_f64().map(Number::Float))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            // 整數溢位時改用浮點數
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(a as f64 + b as f64)),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl std::iter::Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Self {
        iter.fold(Number::ZERO, Add::add)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// 任意深度的巢狀數值容器：數值葉節點，或由容器組成的有序序列。
///
/// `Clone`/`PartialEq`/`Debug` 是遞迴實作，只適合一般深度的值；
/// 量測、加總、轉換與釋放都不佔用呼叫堆疊。
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    Leaf(Number),
    Seq(Vec<Nested>),
}

impl Nested {
    pub fn leaf(value: impl Into<Number>) -> Self {
        Nested::Leaf(value.into())
    }

    pub fn seq(items: Vec<Nested>) -> Self {
        Nested::Seq(items)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Nested::Leaf(_) => "number",
            Nested::Seq(_) => "array",
        }
    }
}

impl Drop for Nested {
    fn drop(&mut self) {
        if let Nested::Seq(items) = self {
            if items.iter().all(Nested::is_leaf) {
                return;
            }
            // 以工作清單拆解，避免深層巢狀時遞迴釋放造成堆疊溢位
            let mut pending = std::mem::take(items);
            while let Some(mut node) = pending.pop() {
                if let Nested::Seq(children) = &mut node {
                    pending.append(children);
                }
            }
        }
    }
}

impl From<Number> for Nested {
    fn from(value: Number) -> Self {
        Nested::Leaf(value)
    }
}

impl From<i32> for Nested {
    fn from(value: i32) -> Self {
        Nested::leaf(value)
    }
}

impl From<i64> for Nested {
    fn from(value: i64) -> Self {
        Nested::leaf(value)
    }
}

impl From<f64> for Nested {
    fn from(value: f64) -> Self {
        Nested::leaf(value)
    }
}

impl From<Vec<Nested>> for Nested {
    fn from(items: Vec<Nested>) -> Self {
        Nested::Seq(items)
    }
}

/// 以陣列字面值建立 [`Nested`]，例如 `nested!([1, 2, [3, 4, [5]]])`。
/// 每個元素必須是單一 token：負數或路徑常數需加括號，
/// 例如 `nested!([(-1), (f64::INFINITY), 2])`。
#[macro_export]
macro_rules! nested {
    ([ $($item:tt),* ]) => {
        $crate::domain::model::Nested::Seq(vec![ $( $crate::nested!($item) ),* ])
    };
    ($value:expr) => {
        $crate::domain::model::Nested::from($value)
    };
}
