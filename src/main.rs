use routescan::cli::{CliArgs, OutputFormatter};
use routescan::util::logging::parse_level;
use routescan::{config_from_env, init_logging, scan_directory, ReportWriter, ScanConfig, VERSION};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    let config = build_config(&args);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging_from_args(&args, &config);

    debug!("routescan v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match run(&args, &config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(args: &CliArgs, config: &ScanConfig) -> Result<()> {
    let inventory = scan_directory(config)?;

    let writer = ReportWriter::new(&config.output_dir);
    writer.write(&inventory)?;

    let formatter = OutputFormatter::new(args.format.into());
    let output = formatter.format_summary(&inventory.summary(), &writer.report_dir(&inventory))?;
    println!("{}", output);

    Ok(())
}

/// Environment defaults first, then whatever the command line sets explicitly.
fn build_config(args: &CliArgs) -> ScanConfig {
    let mut config = ScanConfig::for_root(&args.directory);

    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if args.include_tests {
        config.include_tests = true;
    }
    if !args.extensions.is_empty() {
        config = config.with_extensions(&args.extensions);
    }
    config.exclude_dirs = args.exclude.clone();
    config.respect_gitignore = args.gitignore;
    if let Some(tag) = &args.query_tag {
        config.query_tag = tag.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }

    config
}

fn init_logging_from_args(args: &CliArgs, config: &ScanConfig) {
    let level = match (&args.log_level, args.verbose, args.quiet) {
        (None, true, _) => Level::DEBUG,
        (None, _, true) => Level::ERROR,
        _ => parse_level(&config.log_level),
    };

    init_logging(config_from_env(level));
}
