use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use stylegate::config::GateConfig;
use stylegate::context::RunContext;
use stylegate::report::StyleDiagnosticFormatter;
use stylegate::runner::ConcurrentRunner;
use stylegate::task::StyleCheckTask;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stylegate")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("stylegate.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_gate(cli: &Cli, config: GateConfig) -> Result<i32> {
    let (context, jobs, timeout) = match &cli.command {
        Commands::Check { files, jobs, timeout } => (RunContext::WholeSet(files.clone()), *jobs, *timeout),
        Commands::Changed { files, jobs, timeout } => (RunContext::ChangedFiles(files.clone()), *jobs, *timeout),
    };

    let mut runner_config = config.runner_config();
    if let Some(jobs) = jobs {
        runner_config = runner_config.jobs(jobs);
    }
    if let Some(secs) = timeout {
        runner_config = runner_config.timeout(Duration::from_secs(secs));
    }

    let runner = Arc::new(ConcurrentRunner::new(runner_config));

    // Ctrl-C aborts the batch; children are reaped before we return.
    let cancel = runner.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling batch");
            cancel.cancel();
        }
    });

    let mut formatter = StyleDiagnosticFormatter::new();
    if let Some(hint) = &config.fix_command {
        formatter = formatter.with_fix_hint(hint);
    }

    let task = StyleCheckTask::new(config.task_config(), runner, Arc::new(formatter));

    if cli.is_verbose() {
        println!("{}", format!("Checking {} file(s)", context.files().len()).yellow());
    }

    match task.run(&context).await {
        Ok(verdict) if verdict.passed() => {
            info!("Gate passed");
            println!("{}", "PASS".green().bold());
            Ok(0)
        }
        Ok(verdict) => {
            info!("Gate failed with {} diagnostic(s)", verdict.diagnostics().len());
            for diagnostic in verdict.diagnostics() {
                println!("{}", diagnostic.message);
                println!("{} {}", "suggestion:".cyan(), diagnostic.suggestion);
                println!();
            }
            println!("{}", "FAIL".red().bold());
            Ok(1)
        }
        Err(e) if e.is_abort() => {
            info!("Gate aborted: {}", e);
            println!("{}", format!("style check did not complete: {e}").yellow());
            Ok(2)
        }
        Err(e) => Err(e).context("gate run failed"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging()?;

    let config = GateConfig::load(cli.config.as_ref())?;
    config.validate()?;

    let exit_code = run_gate(&cli, config).await?;
    std::process::exit(exit_code);
}
