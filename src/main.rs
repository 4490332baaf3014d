use clap::Parser;
use tracing_subscriber::EnvFilter;

use phone8ez::args::Args;
use phone8ez::commands;
use phone8ez::visuals;
use phone8ez::writer::write_output;

fn init_logging(args: &Args) {
    let level = if args.output.quiet {
        "warn"
    } else if args.output.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let report = commands::run(&args)?;

    if !args.output.no_report {
        write_output(&args.output, &report.dataset, &report.to_json()?)?;
    }

    if args.output.detailed {
        visuals::print_detailed(&report);
    } else if !args.output.quiet {
        visuals::print_summary(&report);
    }

    Ok(())
}
