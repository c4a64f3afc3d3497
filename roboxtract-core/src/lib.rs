pub mod error;
pub mod extract;
pub mod hosts;
pub mod output;
pub mod scan;

use colored::Colorize;

pub use error::CoreError;
pub use extract::{EndpointSet, base_domain, extract_endpoints};
pub use hosts::{load_hosts, parse_hosts};
pub use output::{render_endpoints, write_endpoints};
pub use scan::{ScanOptions, ScanReport, SourceSummary, execute_scan, extract_all, fetch_robots};

const BANNER: &str = r#"
██████╗  ██████╗ ██████╗  ██████╗ ██╗  ██╗████████╗██████╗  █████╗  ██████╗████████╗
██╔══██╗██╔═══██╗██╔══██╗██╔═══██╗╚██╗██╔╝╚══██╔══╝██╔══██╗██╔══██╗██╔════╝╚══██╔══╝
██████╔╝██║   ██║██████╔╝██║   ██║ ╚███╔╝    ██║   ██████╔╝███████║██║        ██║
██╔══██╗██║   ██║██╔══██╗██║   ██║ ██╔██╗    ██║   ██╔══██╗██╔══██║██║        ██║
██║  ██║╚██████╔╝██████╔╝╚██████╔╝██╔╝ ██╗   ██║   ██║  ██║██║  ██║╚██████╗   ██║
╚═╝  ╚═╝ ╚═════╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝   ╚═╝
"#;

pub fn print_banner() {
    println!("{}", BANNER.cyan().bold());
    println!(
        "{}",
        format!(
            "    Extract forbidden endpoints from robots.txt\n    Version {}\n",
            env!("CARGO_PKG_VERSION")
        )
        .cyan()
    );
}
