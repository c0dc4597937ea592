use std::collections::HashMap;

use rand::Rng;

use crate::LootContainer;

/// Shown when a user owns nothing.
pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

/// Counts repeated item names, keeping the order in which each name first
/// appears.
///
/// Runs in linear time: a name index points into the ordered result.
#[must_use]
pub fn tally<'a, I>(names: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for name in names {
        match index.get(name) {
            Some(&at) => counts[at].1 += 1,
            None => {
                index.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    counts
}

/// One `name: count` line per distinct item, or [`EMPTY_INVENTORY`].
///
/// # Example
///
/// ```
/// use tickgraph::format_inventory;
///
/// let owned = ["gem", "key", "gem"];
/// assert_eq!(format_inventory(owned), "gem: 2\nkey: 1");
/// assert_eq!(format_inventory([]), "Inventory is empty.");
/// ```
#[must_use]
pub fn format_inventory<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let counts = tally(names);
    if counts.is_empty() {
        return EMPTY_INVENTORY.to_owned();
    }

    counts
        .into_iter()
        .map(|(name, count)| format!("{name}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opens one copy of the box `name` held in `inventory`.
///
/// The copy is removed and the drawn items are appended to the inventory.
/// Returns the drops, or `None` when the inventory holds no such box, in
/// which case it is left untouched.
///
/// # Example
///
/// ```
/// use tickgraph::{LootContainer, redeem};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let starter = LootContainer::new().with_item("coin", 1.0).with_drops(2);
/// let mut owned = vec!["starter".to_owned()];
/// let mut rng = StdRng::seed_from_u64(1);
///
/// assert_eq!(redeem(&mut owned, "starter", &starter, &mut rng), Some(vec!["coin", "coin"]));
/// assert_eq!(owned, ["coin", "coin"]);
/// assert_eq!(redeem(&mut owned, "starter", &starter, &mut rng), None);
/// ```
pub fn redeem<'c, R: Rng>(
    inventory: &mut Vec<String>,
    name: &str,
    lootbox: &'c LootContainer,
    rng: &mut R,
) -> Option<Vec<&'c str>> {
    let Some(at) = inventory.iter().position(|owned| owned == name) else {
        tracing::debug!(name, "box not in inventory");
        return None;
    };
    inventory.remove(at);

    let drops = lootbox.open(rng);
    inventory.extend(drops.iter().map(|&item| item.to_owned()));

    Some(drops)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tally {
        use super::*;

        #[test]
        fn keeps_first_seen_order() {
            let names = ["b", "a", "b", "c", "a", "b"];
            assert_eq!(tally(names), vec![("b", 3), ("a", 2), ("c", 1)]);
        }

        #[test]
        fn of_nothing() {
            assert!(tally(std::iter::empty()).is_empty());
        }

        #[test]
        fn many_repeats() {
            let names: Vec<String> = (0..10_000).map(|i| format!("item-{}", i % 100)).collect();
            let counts = tally(names.iter().map(String::as_str));

            assert_eq!(counts.len(), 100);
            assert!(counts.iter().all(|&(_, count)| count == 100));
            assert_eq!(counts[0].0, "item-0");
            assert_eq!(counts[99].0, "item-99");
        }
    }

    mod format {
        use super::*;

        #[test]
        fn lines() {
            let owned = vec!["crate".to_owned(), "sword".to_owned(), "crate".to_owned()];
            assert_eq!(
                format_inventory(owned.iter().map(String::as_str)),
                "crate: 2\nsword: 1"
            );
        }

        #[test]
        fn single_item_has_no_newline() {
            assert_eq!(format_inventory(["gem"]), "gem: 1");
        }

        #[test]
        fn empty_message() {
            assert_eq!(format_inventory(std::iter::empty()), EMPTY_INVENTORY);
        }
    }

    mod redeem {
        use super::*;
        use crate::test_util::rng;

        fn starter() -> LootContainer {
            LootContainer::new().with_item("coin", 1.0).with_drops(3)
        }

        #[test]
        fn not_owned() {
            let mut inventory = vec!["fresh".to_owned()];

            assert_eq!(redeem(&mut inventory, "starter", &starter(), &mut rng()), None);
            assert_eq!(inventory, ["fresh"]);
        }

        #[test]
        fn replaces_one_copy_with_drops() {
            let lootbox = starter();
            let mut inventory = vec!["starter".to_owned(), "key".to_owned(), "starter".to_owned()];

            let drops = redeem(&mut inventory, "starter", &lootbox, &mut rng());

            assert_eq!(drops, Some(vec!["coin"; 3]));
            assert_eq!(inventory, ["key", "starter", "coin", "coin", "coin"]);
        }

        #[test]
        fn skipped_draw_still_consumes_box() {
            let empty = LootContainer::new();
            let mut inventory = vec!["fresh".to_owned()];

            assert_eq!(redeem(&mut inventory, "fresh", &empty, &mut rng()), Some(vec![]));
            assert!(inventory.is_empty());
        }
    }
}
