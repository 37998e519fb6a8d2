use crate::utils::error::{Result, SumError};

fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// 檢查括號是否成對且正確巢狀，字串常值內的括號不列入計算。
///
/// 失敗時回傳第一個出問題的位置（位元組偏移）。
pub fn check_balanced(text: &str) -> Result<()> {
    let mut stack: Vec<(usize, char)> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => stack.push((offset, c)),
            ')' | ']' | '}' => match stack.pop() {
                Some((_, open)) if closing_for(open) == Some(c) => {}
                _ => {
                    return Err(SumError::UnbalancedInput {
                        offset,
                        found: c.to_string(),
                    })
                }
            },
            _ => {}
        }
    }

    match stack.pop() {
        Some((offset, open)) => Err(SumError::UnbalancedInput {
            offset,
            found: format!("unclosed {}", open),
        }),
        None => Ok(()),
    }
}

pub fn is_balanced(text: &str) -> bool {
    check_balanced(text).is_ok()
}
