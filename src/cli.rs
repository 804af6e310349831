use clap::Parser;
use std::path::PathBuf;

use build_order::application::dto::OutputFormat;

/// Compute a build order for Debian packages from apt-rdepends output
#[derive(Parser, Debug)]
#[command(name = "build-order")]
#[command(version)]
#[command(
    about = "Compute a build order for Debian packages from apt-rdepends output",
    long_about = "Runs the dependency tool once per listed package, merges the reports, \
                  and writes one deepest-first <package>.resolved file per top-level \
                  package plus an aggregate file."
)]
pub struct Args {
    /// File listing the packages to resolve, one name per line
    #[arg(value_name = "PACKAGE_LIST")]
    pub package_list: PathBuf,

    /// Dependency tool command line (default: apt-rdepends)
    #[arg(short, long, value_name = "CMD")]
    pub tool: Option<String>,

    /// Directory receiving the .resolved files and the aggregate file (default: .)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name of the aggregate file (default: _res.tree)
    #[arg(short, long, value_name = "NAME")]
    pub aggregate_file: Option<String>,

    /// Never expand packages matching these patterns (supports wildcards: *)
    /// Can be specified multiple times: -i "libc6" -i "lib*-dev"
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Do not ignore debconf and perl-base
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Aggregate file format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the dependency trees to stdout
    #[arg(long)]
    pub print_tree: bool,

    /// Path to config file (default: auto-discover build-order.config.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
