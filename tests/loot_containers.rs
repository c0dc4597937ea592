use rand::{SeedableRng, rngs::StdRng};
use tickgraph::{LootContainer, LootItem, draw, format_inventory, redeem};

/// Containers as the bot stores them, keyed by name.
const STORE: &str = r#"{
  "starter": { "items": [{ "name": "coin", "weight": 9 }, { "name": "gem", "weight": 1 }], "drops": 3 },
  "fresh": { "items": [], "drops": 1 },
  "legacy": { "items": [{ "name": "key", "weight": 2 }] }
}"#;

fn load_store() -> std::collections::BTreeMap<String, LootContainer> {
    serde_json::from_str(STORE).expect("valid container store")
}

#[test]
fn parses_stored_containers() {
    let store = load_store();

    let starter = &store["starter"];
    assert_eq!(starter.drops(), 3);
    assert_eq!(
        starter.items(),
        &[LootItem::new("coin", 9.0), LootItem::new("gem", 1.0)]
    );
}

#[test]
fn missing_drops_defaults_to_one() {
    assert_eq!(load_store()["legacy"].drops(), 1);
}

#[test]
fn serializes_in_store_layout() {
    let lootbox = LootContainer::new().with_item("key", 2.0).with_drops(2);
    let json = serde_json::to_value(&lootbox).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "items": [{ "name": "key", "weight": 2.0 }], "drops": 2 })
    );
}

#[test]
fn opening_then_listing_inventory() {
    let store = load_store();
    let mut rng = StdRng::seed_from_u64(11);
    let mut inventory: Vec<String> = vec!["starter".into(), "fresh".into()];

    let drops = redeem(&mut inventory, "starter", &store["starter"], &mut rng).unwrap();

    assert_eq!(drops.len(), 3);
    assert_eq!(inventory.len(), 1 + 3);
    assert!(inventory[1..].iter().all(|n| n == "coin" || n == "gem"));

    let listing = format_inventory(inventory.iter().map(String::as_str));
    assert!(listing.starts_with("fresh: 1"));
}

#[test]
fn redeeming_an_unowned_box() {
    let store = load_store();
    let mut rng = StdRng::seed_from_u64(11);
    let mut inventory: Vec<String> = vec!["fresh".into()];

    assert_eq!(redeem(&mut inventory, "starter", &store["starter"], &mut rng), None);
    assert_eq!(format_inventory(inventory.iter().map(String::as_str)), "fresh: 1");
}

#[test]
fn fresh_container_drops_nothing() {
    let store = load_store();
    let mut rng = StdRng::seed_from_u64(11);
    assert!(store["fresh"].open(&mut rng).is_empty());
}

#[test]
fn listing_matches_store() {
    assert_eq!(
        load_store()["starter"].to_string(),
        "Items: coin (9), gem (1)\nDrops: 3"
    );
}

#[test]
fn draws_are_independent_with_replacement() {
    let items = [LootItem::new("only", 5.0)];
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(draw(&items, 7, &mut rng), vec!["only"; 7]);
}
