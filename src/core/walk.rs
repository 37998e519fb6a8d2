use crate::domain::model::Nested;
use crate::utils::error::{Result, SumError};
use serde::Serialize;

/// 走訪堆疊中的一層：子節點迭代器，以及下一個元素的索引
pub(crate) struct Frame<'a> {
    pub iter: std::slice::Iter<'a, Nested>,
    pub next_index: usize,
}

impl<'a> Frame<'a> {
    pub fn new(items: &'a [Nested]) -> Self {
        Self {
            iter: items.iter(),
            next_index: 0,
        }
    }

    pub fn advance(&mut self) -> Option<&'a Nested> {
        let item = self.iter.next()?;
        self.next_index += 1;
        Some(item)
    }
}

/// 容器最外層必須是序列
pub(crate) fn top_level(container: &Nested) -> Result<&[Nested]> {
    match container {
        Nested::Seq(items) => Ok(items),
        Nested::Leaf(_) => Err(SumError::type_mismatch("$", "array", "number")),
    }
}

/// 以 `$[i][j]` 形式描述目前走訪到的位置
pub(crate) fn format_path(frames: &[Frame<'_>]) -> String {
    let mut path = String::from("$");
    for frame in frames {
        path.push_str(&format!("[{}]", frame.next_index.saturating_sub(1)));
    }
    path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub leaves: usize,
    pub sequences: usize,
    pub depth: usize,
}

/// 最大巢狀深度：葉節點為 0，序列為 1 + 子節點最大深度（空序列為 1）
pub fn depth(container: &Nested) -> usize {
    stats(container).depth
}

pub fn stats(container: &Nested) -> Stats {
    let items = match container {
        Nested::Leaf(_) => {
            return Stats {
                leaves: 1,
                sequences: 0,
                depth: 0,
            }
        }
        Nested::Seq(items) => items,
    };

    let mut stats = Stats {
        leaves: 0,
        sequences: 1,
        depth: 1,
    };
    let mut stack = vec![Frame::new(items)];

    while let Some(frame) = stack.last_mut() {
        match frame.advance() {
            Some(Nested::Leaf(_)) => stats.leaves += 1,
            Some(Nested::Seq(children)) => {
                stats.sequences += 1;
                stack.push(Frame::new(children));
                stats.depth = stats.depth.max(stack.len());
            }
            None => {
                stack.pop();
            }
        }
    }

    stats
}
