use roboxtract::{ScanConfig, command_argument_builder, handle_scan, interrupt_signal};
use roboxtract_core::print_banner;
use std::io::IsTerminal;
use tracing::Level;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();
    let mut config = ScanConfig::from_matches(&matches);

    config.color = config.color && std::io::stdout().is_terminal();
    if !config.color {
        colored::control::set_override(false);
    }

    let level = if config.verbose { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(config.color)
        .init();

    if !config.quiet {
        print_banner();
    }

    // Exit straight away so an interrupt does not wait on in-flight requests
    let code = handle_scan(&config, interrupt_signal()).await;
    std::process::exit(code);
}
