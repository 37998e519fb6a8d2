use clap::Parser;
use nested_sum::config::LogFormat;
use nested_sum::utils::{logger, monitor::RunMonitor};
use nested_sum::{
    stats, CliConfig, CrossCheck, InputSource, Number, RunSettings, StrategyKind, SumEngine,
    SumError,
};

fn run(config: &CliConfig, settings: &RunSettings) -> Result<Number, SumError> {
    let source = InputSource::select(config.input.as_deref(), settings.input_file.as_deref());
    tracing::debug!("Reading input from {}", source.describe());

    let monitor = RunMonitor::new(settings.monitor);
    let container = source.load()?;
    monitor.log_stats("Load");

    let sum = match settings.strategy {
        StrategyKind::Bounded => {
            SumEngine::new_with_monitoring(settings.bounded(), settings.monitor).run(&container)?
        }
        StrategyKind::Recursive => {
            SumEngine::new_with_monitoring(settings.recursive(), settings.monitor).run(&container)?
        }
        StrategyKind::Both => {
            let strategy = CrossCheck::new(settings.bounded(), settings.recursive());
            SumEngine::new_with_monitoring(strategy, settings.monitor).run(&container)?
        }
    };

    println!("{}", sum);

    if config.stats {
        let shape = stats(&container);
        println!("{}", serde_json::to_string(&shape)?);
    }

    Ok(sum)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&config, &settings) {
        tracing::error!("❌ Summation failed: {} (Kind: {:?})", e, e.kind());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
