use std::sync::Arc;

use ggc::cli::Cli;
use ggc::core::check::client::{IsahcProbeClient, ProbeClient};
use ggc::core::check::ranker::{check_all, CheckOptions, SortPolicy};
use ggc::core::source::{load_candidates, proxy_from_env, SourceKind};
use ggc::output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let kind = cli.source_kind();

    // The proxy only ever applies to downloading the list, never to the
    // probes themselves.
    let proxy = if kind == SourceKind::Url {
        proxy_from_env()
    } else {
        None
    };
    if let Some(endpoint) = &proxy {
        println!("This proxy will be used to download the list: {}", endpoint);
        println!("It will not be used to check if the IP / Host is available.\n");
    }

    let list = load_candidates(&cli.list, kind, proxy.as_deref()).await?;

    if !cli.json {
        println!(
            "Please wait a moment, this may take a little time (up to {} seconds)...",
            cli.timeout_ms.div_ceil(1000)
        );
    }

    let options = CheckOptions {
        timeout_ms: cli.timeout_ms,
        sort: if cli.no_sort {
            SortPolicy::Unsorted
        } else {
            SortPolicy::Ranked
        },
    };
    let client: Arc<dyn ProbeClient> = Arc::new(IsahcProbeClient::new()?);
    let outcomes = check_all(client, &list, &options).await;

    if cli.json {
        println!("{}", output::render_json(&outcomes)?);
    } else {
        print!("{}", output::render_table(&outcomes, cli.timeout_ms));
    }

    Ok(())
}
