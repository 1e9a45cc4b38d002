use clap::Parser;

use crate::core::check::types::DEFAULT_TIMEOUT_MS;
use crate::core::source::SourceKind;

const AFTER_HELP: &str = "\
Example call:
  $ ggc 172.253.114.90 # Check one IP address.
  $ ggc mirror.example.com # Check one host.
  $ ggc 172.253.114.90,mirror.example.com,142.250.9.90 # Check multiple IP addresses or host.
  $ ggc -f ./ips.txt # Check all IP addresses / host in ips.txt, separated by line breaks.
  $ ggc -u https://example.com/ips.txt # Load the IP address / host list from the specified URL.";

#[derive(Parser, Debug)]
#[command(name = "ggc")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Check Google Translate IP.")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// A comma-separated list of IP addresses / host, or when the -f or -u
    /// parameter is specified, the file path or URL.
    pub list: String,

    /// If you are providing a file path, you need to declare this parameter.
    #[arg(short, long, conflicts_with = "url")]
    pub file: bool,

    /// If you are providing URL, you need to declare this parameter.
    #[arg(short, long)]
    pub url: bool,

    /// Per-candidate probe timeout in milliseconds.
    #[arg(
        short = 't',
        long = "timeout-ms",
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,

    /// Print results in input order instead of ranking them.
    #[arg(long = "no-sort")]
    pub no_sort: bool,

    /// Emit the results as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn source_kind(&self) -> SourceKind {
        if self.file {
            SourceKind::File
        } else if self.url {
            SourceKind::Url
        } else {
            SourceKind::Inline
        }
    }
}
