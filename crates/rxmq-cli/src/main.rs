//! `rxmq`: inspect MQ message data as stem variables.

use clap::Parser;

use rxmq_cli::cli::{Cli, Command, OutputArg};
use rxmq_cli::commands::{run_event, run_hxt, run_record, run_symbols, run_tm};
use rxmq_cli::config::resolve_options;
use rxmq_cli::logging::{LogConfig, init_logging};
use rxmq_cli::render::{Report, rows_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&LogConfig::from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let options = resolve_options(cli)?;
    let report = match &cli.command {
        Command::Event(args) => run_event(options, args)?,
        Command::Hxt(args) => run_hxt(options, args)?,
        Command::Tm(args) => run_tm(options, args)?,
        Command::Record(args) => run_record(args)?,
        Command::Symbols(args) => {
            println!("{}", run_symbols(args)?);
            return Ok(0);
        }
    };
    print_report(&report, cli.output)?;
    Ok(if report.is_ok() { 0 } else { 2 })
}

fn print_report(report: &Report, output: OutputArg) -> anyhow::Result<()> {
    match output {
        OutputArg::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputArg::Table => {
            if let Some(outcome) = &report.outcome {
                println!("{}", outcome.return_string);
            }
            if !report.rows.is_empty() {
                println!("{}", rows_table(&report.rows));
            }
        }
    }
    Ok(())
}
