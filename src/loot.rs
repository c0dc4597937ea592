use std::fmt::{Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One entry of a [`LootContainer`].
///
/// Weights are relative: an item's chance per draw is its weight over the
/// container's total. Zero-weight items are never drawn.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LootItem {
    pub name: String,
    pub weight: f64,
}

impl LootItem {
    #[must_use]
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A reward box: a weighted item list and the number of draws made when
/// it is opened.
///
/// Serializes as `{ "items": [{ "name": .., "weight": .. }], "drops": n }`.
/// A missing `drops` field means one draw.
///
/// # Example
///
/// ```
/// use tickgraph::LootContainer;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let crate_box = LootContainer::new()
///     .with_item("sword", 1.0)
///     .with_item("coin", 9.0)
///     .with_drops(3);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(crate_box.open(&mut rng).len(), 3);
/// ```
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LootContainer {
    #[serde(default)]
    items: Vec<LootItem>,
    #[serde(default = "LootContainer::default_drops")]
    drops: u32,
}

impl LootContainer {
    /// Empty container with a single drop.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            drops: Self::default_drops(),
        }
    }

    fn default_drops() -> u32 {
        1
    }

    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.push_item(LootItem::new(name, weight));
        self
    }

    #[must_use]
    pub fn with_drops(mut self, drops: u32) -> Self {
        self.drops = drops;
        self
    }

    pub fn push_item(&mut self, item: LootItem) {
        self.items.push(item);
    }

    pub fn set_drops(&mut self, drops: u32) {
        self.drops = drops;
    }

    #[must_use]
    pub fn items(&self) -> &[LootItem] {
        &self.items
    }

    #[must_use]
    pub fn drops(&self) -> u32 {
        self.drops
    }

    /// Draws [`drops`](Self::drops) items. See [`draw`].
    pub fn open<R: Rng>(&self, rng: &mut R) -> Vec<&str> {
        draw(&self.items, self.drops as usize, rng)
    }
}

impl Default for LootContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for LootContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Items: ")?;
        if self.items.is_empty() {
            f.write_str("None")?;
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", item.name, item.weight)?;
        }
        write!(f, "\nDrops: {}", self.drops)
    }
}

/// Makes `count` independent weighted draws (with replacement) from `items`.
///
/// Each draw picks `r` uniformly from `[0, total)` and walks the list in
/// order until the running weight exceeds `r`. When the total weight is not
/// a positive finite number the draw yields nothing, so degenerate lists
/// return fewer than `count` names instead of failing.
///
/// # Example
///
/// ```
/// use tickgraph::{LootItem, draw};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let items = [LootItem::new("A", 1.0), LootItem::new("B", 0.0)];
/// let mut rng = StdRng::seed_from_u64(1);
///
/// assert!(draw(&items, 100, &mut rng).iter().all(|name| *name == "A"));
/// assert!(draw(&[], 5, &mut rng).is_empty());
/// ```
pub fn draw<'a, R: Rng>(items: &'a [LootItem], count: usize, rng: &mut R) -> Vec<&'a str> {
    let total: f64 = items.iter().map(|item| item.weight).sum();

    if !(total.is_finite() && total > 0.0) {
        if count > 0 {
            tracing::debug!(items = items.len(), total, count, "no selectable weight, skipping draws");
        }
        return Vec::new();
    }

    let mut drops = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.random_range(0.0..total);

        let mut acc = 0.0;
        let pick = items.iter().find(|item| {
            acc += item.weight;
            r < acc
        });

        match pick {
            Some(item) => drops.push(item.name.as_str()),
            None => tracing::debug!(r, total, "draw fell past the last item, skipping"),
        }
    }

    drops
}
