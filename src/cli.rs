use clap::{value_parser, Arg, ArgMatches, Command};

/// Build the command definition. Split out from [`parse_args`] so tests can
/// feed their own argument lists.
pub fn build_command() -> Command {
    Command::new("traywise")
        .about("TrayWise AI - scan your tray and get sorting recommendations")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML config file (defaults to $TRAYWISE_CONFIG when set)")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("scan-delay")
                .long("scan-delay")
                .help("Simulated scan duration in milliseconds")
                .value_name("MS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("finish-delay")
                .long("finish-delay")
                .help("Milliseconds the finish screen stays up before returning to the start")
                .value_name("MS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help("UI language (en_us, zh_chs)")
                .value_name("LOCALE"),
        )
        .arg(
            Arg::new("status-dump")
                .long("status-dump")
                .help("Write a JSON snapshot of the flow state to PATH after every change")
                .value_name("PATH"),
        )
}

/// Parse command line arguments and return ArgMatches.
pub fn parse_args() -> ArgMatches {
    build_command().get_matches()
}
