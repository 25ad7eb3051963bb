use chrono::NaiveDate;

use stockroom_core::{DomainError, Entity, FixedClock, ItemId, Money};
use stockroom_inventory::{Catalog, Item, ItemKindTag, Size};

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

#[test]
fn selling_electronics_updates_stock_and_value() {
    let mut catalog = Catalog::new();
    catalog.add(Item::electronics(id("E1"), "Laptop", Money::from_major(100), 5, 2, "Acme"));

    catalog.sell("E1", 3).unwrap();
    assert_eq!(catalog.get("E1").unwrap().quantity_in_stock(), 2);
    assert_eq!(catalog.total_value(), Money::from_major(200));

    let err = catalog.sell("E1", 10).unwrap_err();
    assert_eq!(
        err,
        DomainError::InsufficientStock {
            id: id("E1"),
            requested: 10,
            available: 2,
        }
    );
    assert_eq!(catalog.get("E1").unwrap().quantity_in_stock(), 2);
    assert_eq!(catalog.total_value(), Money::from_major(200));
}

#[test]
fn sweeping_removes_expired_perishables() {
    let mut catalog = Catalog::new();
    let yesterday = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    catalog.add(Item::perishable(id("G1"), "Bread", Money::from_major(40), 10, yesterday));
    catalog.add(Item::electronics(id("E1"), "Radio", Money::from_major(900), 1, 1, "Acme"));

    let removed = catalog.sweep_expired(&FixedClock::on(today));

    assert_eq!(removed, vec![id("G1")]);
    assert!(catalog.find_by_variant(ItemKindTag::Perishable).is_empty());
    assert!(catalog.contains("E1"));
}

#[test]
fn name_search_is_case_insensitive() {
    let mut catalog = Catalog::new();
    catalog.add(Item::apparel(
        id("C001"),
        "Cotton T-Shirt",
        Money::from_major(400),
        50,
        Size::M,
        "Cotton",
    ));
    catalog.add(Item::electronics(id("M001"), "V60", Money::from_major(34000), 5, 1, "LG"));

    for query in ["cot", "COT", "t-shirt"] {
        let hits = catalog.find_by_name(query);
        assert_eq!(hits.len(), 1, "query {query:?}");
        assert_eq!(hits[0].id(), &id("C001"));
    }
}

#[test]
fn add_then_remove_leaves_id_absent() {
    let mut catalog = Catalog::new();
    catalog.add(Item::electronics(id("E1"), "Radio", Money::from_major(900), 1, 1, "Acme"));

    assert!(catalog.remove("E1"));
    assert!(catalog.get("E1").is_none());
    assert!(!catalog.remove("E1"));
    assert_eq!(catalog.total_value(), Money::ZERO);
}
