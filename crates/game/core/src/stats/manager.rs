use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::stat::{Stat, StatBounds, StatError, StatId};

/// Builds stats and keeps them addressable by name.
#[derive(Debug, Default)]
pub struct StatManager {
    stats: BTreeMap<String, Stat>,
    next_id: u32,
}

impl StatManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stat with the default `[0, 100]` bounds.
    ///
    /// A stat already registered under `name` is replaced.
    pub fn build_stat(&mut self, name: &str, initial_value: i32) -> &mut Stat {
        self.insert(name, initial_value, StatBounds::DEFAULT)
    }

    /// Builds a stat with explicit bounds.
    pub fn build_bounded_stat(
        &mut self,
        name: &str,
        initial_value: i32,
        min: i32,
        max: i32,
    ) -> Result<&mut Stat, StatError> {
        let bounds = StatBounds::new(min, max)?;
        Ok(self.insert(name, initial_value, bounds))
    }

    pub fn get(&self, name: &str) -> Option<&Stat> {
        self.stats.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Stat> {
        self.stats.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stat> {
        self.stats.values()
    }

    /// Resets every stat, returning how many actually changed.
    pub fn reset_all(&mut self) -> usize {
        self.stats
            .values_mut()
            .map(Stat::reset)
            .filter(|changed| *changed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    fn insert(&mut self, name: &str, initial_value: i32, bounds: StatBounds) -> &mut Stat {
        let id = StatId(self.next_id);
        self.next_id += 1;

        let stat = Stat::new(id, name, initial_value, bounds);
        match self.stats.entry(name.to_owned()) {
            Entry::Occupied(mut slot) => {
                slot.insert(stat);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(stat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_stats_with_sequential_ids() {
        let mut manager = StatManager::new();
        let health = manager.build_stat("Health", 90).id();
        let mana = manager.build_stat("Mana", 30).id();

        assert_eq!(health, StatId(0));
        assert_eq!(mana, StatId(1));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("Health").map(Stat::value), Some(90));
    }

    #[test]
    fn bounded_stats_validate_range() {
        let mut manager = StatManager::new();
        let stat = manager.build_bounded_stat("Hit Chance", 10, 5, 95).unwrap();
        assert_eq!(stat.bounds(), StatBounds { min: 5, max: 95 });

        assert!(manager.build_bounded_stat("Broken", 0, 10, 1).is_err());
        assert!(manager.get("Broken").is_none());
    }

    #[test]
    fn reset_all_counts_changed_stats() {
        let mut manager = StatManager::new();
        manager.build_stat("Health", 90);
        manager.build_stat("Mana", 30);
        manager.get_mut("Health").unwrap().adjust(-40);

        assert_eq!(manager.reset_all(), 1);
        assert_eq!(manager.get("Health").unwrap().value(), 90);
    }

    #[test]
    fn rebuilding_a_name_replaces_the_stat() {
        let mut manager = StatManager::new();
        manager.build_stat("Health", 90);
        let replaced = manager.build_stat("Health", 40);

        assert_eq!(replaced.value(), 40);
        assert_eq!(replaced.id(), StatId(1));
        assert_eq!(manager.len(), 1);
    }
}
