use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumError {
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid depth {value}: declared depth must be at least 1")]
    InvalidDepth { value: usize },

    #[error("Nesting limit of {limit} exceeded at {path}")]
    NestingLimitExceeded { limit: usize, path: String },

    #[error("Strategies disagree: bounded = {bounded}, recursive = {recursive}")]
    StrategyMismatch { bounded: String, recursive: String },

    #[error("Unbalanced input at byte {offset}: unexpected '{found}'")]
    UnbalancedInput { offset: usize, found: String },

    #[error("JSON parsing error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidDepth,
    NestingLimit,
    Input,
    Config,
    Io,
}

impl SumError {
    pub fn type_mismatch(path: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        SumError::TypeMismatch {
            path: path.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SumError::TypeMismatch { .. } | SumError::StrategyMismatch { .. } => {
                ErrorKind::TypeMismatch
            }
            SumError::InvalidDepth { .. } => ErrorKind::InvalidDepth,
            SumError::NestingLimitExceeded { .. } => ErrorKind::NestingLimit,
            SumError::UnbalancedInput { .. } | SumError::ParseError(_) => ErrorKind::Input,
            SumError::IoError(_) => ErrorKind::Io,
            SumError::ConfigError { .. } | SumError::InvalidConfigValueError { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// 給使用者看的簡短錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SumError::TypeMismatch {
                path,
                expected,
                found,
            } => format!("Cannot sum: expected {}, found {} at {}", expected, found, path),
            SumError::InvalidDepth { .. } => "Declared depth must be a positive integer".to_string(),
            SumError::NestingLimitExceeded { limit, .. } => {
                format!("Input is nested deeper than the limit of {}", limit)
            }
            SumError::StrategyMismatch { .. } => {
                "Bounded and recursive strategies returned different sums".to_string()
            }
            SumError::UnbalancedInput { offset, .. } => {
                format!("Input brackets are unbalanced near byte {}", offset)
            }
            SumError::ParseError(_) => "Input is not valid JSON".to_string(),
            SumError::IoError(e) => format!("Could not read input: {}", e),
            SumError::ConfigError { message } => format!("Configuration problem: {}", message),
            SumError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
        }
    }

    /// 攤平後仍殘留陣列，代表宣告深度不足
    pub fn is_residual_array(&self) -> bool {
        matches!(
            self,
            SumError::TypeMismatch { expected, found, .. } if *expected == "number" && found == "array"
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        if self.is_residual_array() {
            return "Declared depth is smaller than the input's nesting; raise --max-depth or use --depth-policy auto";
        }
        if let SumError::StrategyMismatch { .. } = self {
            return "Run each strategy separately with --verbose to compare the traces";
        }
        match self.kind() {
            ErrorKind::TypeMismatch => "Remove non-numeric values from the input",
            ErrorKind::InvalidDepth => "Pass --max-depth 1 or greater",
            ErrorKind::NestingLimit => "Raise --nesting-limit or flatten the input",
            ErrorKind::Input => "Check that the input is a JSON array of numbers and arrays",
            ErrorKind::Config => "Check the configuration file and command line flags",
            ErrorKind::Io => "Check that the file exists and is readable",
        }
    }

    /// 依錯誤類別決定結束碼
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Input | ErrorKind::Config | ErrorKind::InvalidDepth => 1,
            ErrorKind::TypeMismatch | ErrorKind::NestingLimit => 2,
            ErrorKind::Io => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SumError>;
