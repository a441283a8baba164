use commands::command_argument_builder;
use menugraph::handlers::{
    AuditSettings, handle_audit, init_logging, print_failure, print_summary, write_report,
};

mod commands;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();
    let settings = AuditSettings::from_matches(&matches);

    init_logging(settings.verbosity);

    let outcome = match handle_audit(&settings).await {
        Ok(menu_report) => write_report(&menu_report, &settings).map(|_| menu_report),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(menu_report) => print_summary(&menu_report, &settings),
        Err(e) => {
            print_failure(&e);
            std::process::exit(1);
        }
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
