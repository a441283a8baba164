use crate::CLAP_STYLING;
use clap::{ArgAction, arg};
use menugraph::handlers::DEFAULT_API_URL;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("menugraph")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("menugraph")
        .about("Reports which menus in a paginated collection hold cyclical references")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("Base URL of the menu API; the page parameter is added per request")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_API_URL),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Save report to file (default: standard output)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            arg!(-p --"pretty" "Pretty-print the JSON report")
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(-q --"quiet" "Suppress progress and summary output").required(false))
        .arg(
            arg!(-v --"verbose" "Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .required(false)
                .action(ArgAction::Count),
        )
}
