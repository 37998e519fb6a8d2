use crate::domain::model::{Nested, Number};
use crate::utils::brackets::check_balanced;
use crate::utils::error::{Result, SumError};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 轉換中的一層陣列
struct Pending<'a> {
    iter: std::slice::Iter<'a, Value>,
    index: usize,
    built: Vec<Nested>,
}

impl<'a> Pending<'a> {
    fn new(items: &'a [Value]) -> Self {
        Self {
            iter: items.iter(),
            index: 0,
            built: Vec::with_capacity(items.len()),
        }
    }
}

fn path_of(stack: &[Pending<'_>]) -> String {
    stack.iter().fold(String::from("$"), |mut path, level| {
        path.push_str(&format!("[{}]", level.index));
        path
    })
}

impl TryFrom<&Value> for Nested {
    type Error = SumError;

    /// 陣列轉成序列、數字轉成葉節點，其他型別一律回報型別不符
    fn try_from(value: &Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            Value::Number(n) => {
                return Number::from_json(n)
                    .map(Nested::Leaf)
                    .ok_or_else(|| SumError::type_mismatch("$", "number", n.to_string()))
            }
            other => return Err(SumError::type_mismatch("$", "number or array", json_kind(other))),
        };

        let mut stack = vec![Pending::new(items)];
        loop {
            let Some(level) = stack.last_mut() else {
                return Ok(Nested::Seq(Vec::new()));
            };

            match level.iter.next() {
                Some(Value::Array(children)) => stack.push(Pending::new(children)),
                Some(other) => {
                    let leaf = match other {
                        Value::Number(n) => Number::from_json(n),
                        _ => None,
                    };
                    match leaf {
                        Some(n) => {
                            level.built.push(Nested::Leaf(n));
                            level.index += 1;
                        }
                        None => {
                            return Err(SumError::type_mismatch(
                                path_of(&stack),
                                "number or array",
                                json_kind(other),
                            ))
                        }
                    }
                }
                None => {
                    let finished = stack.pop().map(|level| Nested::Seq(level.built));
                    match (stack.last_mut(), finished) {
                        (Some(parent), Some(seq)) => {
                            parent.built.push(seq);
                            parent.index += 1;
                        }
                        (None, Some(seq)) => return Ok(seq),
                        (_, None) => return Ok(Nested::Seq(Vec::new())),
                    }
                }
            }
        }
    }
}

impl TryFrom<Value> for Nested {
    type Error = SumError;

    fn try_from(value: Value) -> Result<Self> {
        Nested::try_from(&value)
    }
}

/// 先檢查括號，再以 JSON 解析並轉換
pub fn parse_str(input: &str) -> Result<Nested> {
    check_balanced(input)?;
    let value: Value = serde_json::from_str(input)?;
    Nested::try_from(&value)
}

pub fn read_reader<R: Read>(mut reader: R) -> Result<Nested> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_str(&input)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Nested> {
    let path = path.as_ref();
    tracing::debug!("Reading input from: {}", path.display());
    let input = std::fs::read_to_string(path)?;
    parse_str(&input)
}
