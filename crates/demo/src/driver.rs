//! Scripted walkthrough of the catalog: stock a few items, sell, search,
//! value, sweep and round-trip through a store.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;

use stockroom_core::{Clock, DomainError, ItemId, Money};
use stockroom_inventory::{Catalog, CatalogStore, Item, Size};

/// Outcome figures, returned for callers that want to assert on the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub total_value: Money,
    pub swept: Vec<ItemId>,
    pub reloaded_items: usize,
}

pub fn seed_catalog() -> anyhow::Result<Catalog> {
    let banana_expiry = NaiveDate::from_ymd_opt(2025, 5, 30).context("invalid seed expiry date")?;

    let mut catalog = Catalog::new();
    catalog.add(Item::electronics(
        ItemId::new("M001")?,
        "V60",
        Money::from_major(34000),
        5,
        1,
        "LG",
    ));
    catalog.add(Item::perishable(
        ItemId::new("G001")?,
        "Banana",
        Money::from_major(200),
        100,
        banana_expiry,
    ));
    catalog.add(Item::apparel(
        ItemId::new("C001")?,
        "Cotton T-Shirt",
        Money::from_major(400),
        50,
        Size::M,
        "Cotton",
    ));
    Ok(catalog)
}

fn report_sale(
    out: &mut impl Write,
    id: &str,
    result: Result<(), DomainError>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => writeln!(out, "Sale of {id} successful!")?,
        Err(err @ DomainError::NotFound(_)) => {
            tracing::warn!(item_id = id, "sale skipped: {err}");
            writeln!(out, "Sale of {id} failed: {err}")?;
        }
        Err(err @ DomainError::InsufficientStock { .. }) => {
            tracing::info!(item_id = id, "sale refused: {err}");
            writeln!(out, "Sale of {id} failed: {err}")?;
        }
        Err(err) => return Err(err).context("unexpected sale failure"),
    }
    Ok(())
}

/// Run the walkthrough, writing the human-readable transcript to `out`.
pub fn run(
    out: &mut impl Write,
    clock: &dyn Clock,
    store: &dyn CatalogStore,
    print_snapshot: bool,
) -> anyhow::Result<DemoReport> {
    let mut catalog = seed_catalog()?;
    tracing::info!(items = catalog.len(), "catalog seeded");

    writeln!(out, "\nAll Products:")?;
    for item in &catalog {
        writeln!(out, "{item}")?;
    }

    writeln!(out, "\nSelling 2 Mobiles...")?;
    report_sale(out, "M001", catalog.sell("M001", 2))?;
    report_sale(out, "E001", catalog.sell("E001", 2))?;

    let total_value = catalog.total_value();
    writeln!(out, "\nTotal inventory value: {total_value}")?;

    writeln!(out, "\nSearching for 'cotton':")?;
    for item in catalog.find_by_name("cotton") {
        writeln!(out, "{item}")?;
    }

    writeln!(out, "\nRemoving expired products (today: {}):", clock.today())?;
    let swept = catalog.sweep_expired(clock);
    if swept.is_empty() {
        writeln!(out, "nothing expired")?;
    }
    for id in &swept {
        writeln!(out, "removed {id}")?;
    }

    store
        .save(&catalog.snapshot())
        .context("failed to save catalog snapshot")?;
    let reloaded = store.load_catalog().context("failed to reload catalog")?;
    tracing::info!(items = reloaded.len(), "catalog reloaded from store");

    if print_snapshot {
        let json = serde_json::to_string_pretty(&reloaded.snapshot())
            .context("failed to encode catalog snapshot")?;
        writeln!(out, "\n{json}")?;
    }

    Ok(DemoReport {
        total_value,
        swept,
        reloaded_items: reloaded.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::FixedClock;
    use stockroom_inventory::InMemoryCatalogStore;

    fn on(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn walkthrough_after_banana_expiry() {
        let store = InMemoryCatalogStore::new();
        let mut out = Vec::new();

        let report = run(&mut out, &on(2025, 6, 1), &store, false).unwrap();

        // 34000*3 + 200*100 + 400*50, measured before the sweep.
        assert_eq!(report.total_value, Money::from_major(142_000));
        assert_eq!(report.swept, vec![ItemId::new("G001").unwrap()]);
        assert_eq!(report.reloaded_items, 2);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Sale of M001 successful!"));
        assert!(transcript.contains("Sale of E001 failed: item not found: E001"));
        assert!(transcript.contains("Total inventory value: Rs.142000.00"));
        assert!(transcript.contains("Apparel - Cotton T-Shirt | ID: C001"));
        assert!(transcript.contains("removed G001"));
    }

    #[test]
    fn walkthrough_before_expiry_keeps_everything() {
        let store = InMemoryCatalogStore::new();
        let mut out = Vec::new();

        let report = run(&mut out, &on(2025, 5, 30), &store, true).unwrap();

        assert!(report.swept.is_empty());
        assert_eq!(report.reloaded_items, 3);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("nothing expired"));
        assert!(transcript.contains("\"kind\": \"perishable\""));
    }

    #[test]
    fn sale_of_blank_id_is_reported_not_fatal() {
        let mut catalog = seed_catalog().unwrap();
        let mut out = Vec::new();

        report_sale(&mut out, "", catalog.sell("", 1)).unwrap();

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript, "Sale of  failed: item not found: \n");
    }
}
