use std::fs;
use std::path::Path;

use clap::Parser;

use buildlog_guard::checker::Thresholds;
use buildlog_guard::cli::Cli;
use buildlog_guard::config::{Config, ConfigLoader, FileConfigLoader};
use buildlog_guard::evaluator::evaluate_file;
use buildlog_guard::output::{ErrorOutput, OutputFormatter};
use buildlog_guard::{EXIT_CONFIG_ERROR, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::stderr().print(&e);
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> buildlog_guard::Result<i32> {
    // 1. Resolve thresholds: CLI positionals over config file
    let thresholds = resolve_thresholds(cli)?;

    // 2. Load, classify, decide
    let evaluation = evaluate_file(&cli.log_path, thresholds)?;

    // 3. Format and write the report
    let output = cli.format.formatter().format(&evaluation)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    Ok(evaluation.exit_code())
}

fn resolve_thresholds(cli: &Cli) -> buildlog_guard::Result<Thresholds> {
    let overrides = cli.threshold_overrides()?;
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    config.thresholds.merge(overrides).resolve()
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> buildlog_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> buildlog_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
