//! NostrCount - Binary Entry Point
//!
//! Lists the current counters found in a JSON-lines record cache, one JSON
//! object per line on stdout. Configuration comes from `NOSTR_COUNT_*`
//! environment variables; logs go to stderr (`RUST_LOG`, default `info`).

use serde_json::json;
use tracing_subscriber::EnvFilter;

use nostr_count::utils::time::today;
use nostr_count::{ClientConfig, CounterResult, CounterService, JsonlSource};

fn main() -> CounterResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let source = JsonlSource::new(&config.records_file);
    tracing::info!(
        records_file = %source.path().display(),
        relays = config.relays.len(),
        "Loading counters"
    );

    let service = CounterService::with_config(source, config);
    let config = service.config();

    let today = today();
    for counter in service.list_counters(config.author.as_deref(), config.public_only)? {
        let line = json!({
            "counter": counter,
            "days": counter.days(today),
            "display": counter.display(today),
        });
        println!("{}", line);
    }

    Ok(())
}
