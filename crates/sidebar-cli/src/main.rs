//! `sidebar-unlock` replay binary

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sidebar_cli::{init_tracing, run_inspect, run_unlock, LogFormat, UnlockArgs};
use sidebar_document::LayoutVariant;
use std::path::PathBuf;
use std::process::ExitCode;

fn layout_arg() -> Arg {
    Arg::new("layout")
        .long("layout")
        .value_parser(value_parser!(LayoutVariant))
        .help("Page layout: desktop or single-column (detected when omitted)")
}

fn cli() -> Command {
    Command::new("sidebar-unlock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay sidebar unlocks against recorded responses")
        .subcommand_required(true)
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("pretty")
                .value_parser(value_parser!(LogFormat))
                .help("Log output format: pretty or json"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level"),
        )
        .subcommand(
            Command::new("unlock")
                .about("Unlock a restricted document and print the merged result")
                .arg(
                    Arg::new("document")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Restricted document (JSON)"),
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .value_parser(value_parser!(PathBuf))
                        .help("Recorded watch endpoint response"),
                )
                .arg(
                    Arg::new("proxy")
                        .long("proxy")
                        .value_parser(value_parser!(PathBuf))
                        .help("Recorded account proxy response"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML file with [unlock] and [session] tables"),
                )
                .arg(layout_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report layout and sidebar state of a document")
                .arg(
                    Arg::new("document")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Document to inspect (JSON)"),
                )
                .arg(layout_arg()),
        )
}

fn unlock_args(args: &ArgMatches) -> UnlockArgs {
    UnlockArgs {
        document: args.get_one::<PathBuf>("document").cloned().unwrap_or_default(),
        watch: args.get_one::<PathBuf>("watch").cloned(),
        proxy: args.get_one::<PathBuf>("proxy").cloned(),
        layout: args.get_one::<LayoutVariant>("layout").copied(),
        config: args.get_one::<PathBuf>("config").cloned(),
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("unlock", args)) => {
            println!("{}", run_unlock(&unlock_args(args))?);
        }
        Some(("inspect", args)) => {
            let path = args.get_one::<PathBuf>("document").cloned().unwrap_or_default();
            let report = run_inspect(&path, args.get_one::<LayoutVariant>("layout").copied())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let format = matches.get_one::<LogFormat>("log-format").copied().unwrap_or_default();
    let level = if matches.get_flag("verbose") { "debug" } else { "info" };
    if let Err(e) = init_tracing(format, level) {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
