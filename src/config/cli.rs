use crate::adapters::json::{parse_str, read_file, read_reader};
use crate::domain::model::Nested;
use crate::utils::error::Result;

/// 輸入來源：命令列字串、檔案或標準輸入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(String),
    Stdin,
}

impl InputSource {
    /// 命令列字串優先，其次是檔案，都沒有就讀標準輸入
    pub fn select(inline: Option<&str>, file: Option<&str>) -> Self {
        match (inline, file) {
            (Some(text), _) => InputSource::Inline(text.to_string()),
            (None, Some(path)) => InputSource::File(path.to_string()),
            (None, None) => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Inline(_) => "command line".to_string(),
            InputSource::File(path) => format!("file {}", path),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    pub fn load(&self) -> Result<Nested> {
        match self {
            InputSource::Inline(text) => parse_str(text),
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => read_reader(std::io::stdin().lock()),
        }
    }
}
