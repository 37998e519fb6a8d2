use crate::core::descent::RecursiveDescent;
use crate::core::flatten::BoundedFlatten;
use crate::core::walk::stats;
use crate::domain::model::{Nested, Number};
use crate::domain::ports::Summation;
use crate::utils::error::{Result, SumError};
use crate::utils::monitor::RunMonitor;

pub struct SumEngine<S: Summation> {
    strategy: S,
    monitor: RunMonitor,
}

impl<S: Summation> SumEngine<S> {
    pub fn new(strategy: S) -> Self {
        Self::new_with_monitoring(strategy, false)
    }

    pub fn new_with_monitoring(strategy: S, monitor_enabled: bool) -> Self {
        Self {
            strategy,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn run(&self, container: &Nested) -> Result<Number> {
        tracing::info!("Summing with {} strategy", self.strategy.name());

        if self.monitor.is_enabled() {
            let shape = stats(container);
            tracing::info!(
                "Input shape: {} leaves, {} sequences, depth {}",
                shape.leaves,
                shape.sequences,
                shape.depth
            );
            self.monitor.log_stats("Measure");
        }

        let sum = self.strategy.sum(container)?;
        self.monitor.log_stats("Sum");
        self.monitor.log_final_stats();

        tracing::info!("✅ Sum: {}", sum);
        Ok(sum)
    }
}

/// 兩種策略都跑一次，結果不一致時回報錯誤
pub fn cross_check(
    container: &Nested,
    bounded: &BoundedFlatten,
    recursive: &RecursiveDescent,
) -> Result<Number> {
    let bounded_sum = bounded.sum(container)?;
    let recursive_sum = recursive.sum(container)?;

    if !bounded_sum.same_value(recursive_sum) {
        tracing::warn!(
            "Strategies disagree: bounded = {}, recursive = {}",
            bounded_sum,
            recursive_sum
        );
        return Err(SumError::StrategyMismatch {
            bounded: bounded_sum.to_string(),
            recursive: recursive_sum.to_string(),
        });
    }

    tracing::debug!("Strategies agree on {}", recursive_sum);
    Ok(recursive_sum)
}

/// 同時執行攤平與深度優先兩種策略並比對結果
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossCheck {
    pub bounded: BoundedFlatten,
    pub recursive: RecursiveDescent,
}

impl CrossCheck {
    pub fn new(bounded: BoundedFlatten, recursive: RecursiveDescent) -> Self {
        Self { bounded, recursive }
    }
}

impl Summation for CrossCheck {
    fn name(&self) -> &'static str {
        "both"
    }

    fn sum(&self, container: &Nested) -> Result<Number> {
        cross_check(container, &self.bounded, &self.recursive)
    }
}
