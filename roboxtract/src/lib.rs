pub mod commands;
pub mod handlers;

pub use commands::{command_argument_builder, parse_threads, parse_timeout};
pub use handlers::{
    INTERRUPT_EXIT_CODE, ScanConfig, handle_scan, interrupt_signal, run_unless_interrupted,
};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
