use anyhow::Context;

use stockroom_demo::DemoConfig;
use stockroom_inventory::InMemoryCatalogStore;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("invalid configuration")?;
    stockroom_observability::init(config.log_format);

    if config.today.is_none() {
        tracing::debug!("STOCKROOM_TODAY not set; expiry uses the system clock");
    }

    let store = InMemoryCatalogStore::new();
    let clock = config.clock();
    let mut stdout = std::io::stdout().lock();

    let report = stockroom_demo::run(&mut stdout, clock.as_ref(), &store, config.print_snapshot)?;
    tracing::info!(
        total_value = %report.total_value,
        swept = report.swept.len(),
        "demo finished"
    );
    Ok(())
}
