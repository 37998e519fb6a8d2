pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::json::{parse_str, read_file, read_reader};
pub use config::{cli::InputSource, RunSettings, StrategyKind};
pub use core::{
    descent::{sum_recursive, sum_recursive_from, RecursiveDescent},
    engine::{cross_check, CrossCheck, SumEngine},
    flatten::{flatten_once, sum_bounded, sum_bounded_auto, BoundedFlatten},
    walk::{depth, stats, Stats},
};
pub use domain::{
    model::{Nested, Number},
    ports::Summation,
};
pub use utils::error::{ErrorKind, Result, SumError};
