//! Usage-based ranking of insertable items.
//!
//! Scores combine how often an item was inserted with how recently: an
//! insert within the last hour counts four times, within a day twice,
//! within a week half and anything older a quarter.

use crate::block_types::BlockTypeSet;
use crate::candidates::{Attributes, CandidateItem, CandidateRanker};
use crate::error::RegistryError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    pub name: String,
    pub title: String,
    pub icon: String,
    /// Types hidden from the inserter never become candidates
    #[serde(default = "default_inserter")]
    pub inserter: bool,
}

fn default_inserter() -> bool {
    true
}

impl BlockType {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            icon: icon.into(),
            inserter: true,
        }
    }

    pub fn hidden_from_inserter(mut self) -> Self {
        self.inserter = false;
        self
    }
}

/// Registered block types and their pre-filled variations, in registration order
#[derive(Debug, Default)]
pub struct BlockTypeRegistry {
    types: HashMap<String, BlockType>,
    items: Vec<CandidateItem>,
}

impl BlockTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, block_type: BlockType) -> Result<(), RegistryError> {
        if self.types.contains_key(&block_type.name) {
            return Err(RegistryError::AlreadyRegistered(block_type.name));
        }
        if block_type.inserter {
            self.items.push(CandidateItem::for_block_type(
                block_type.name.clone(),
                block_type.title.clone(),
                block_type.icon.clone(),
            ));
        }
        self.types.insert(block_type.name.clone(), block_type);
        Ok(())
    }

    /// Register a pre-filled item of an already registered type
    pub fn register_variation(
        &mut self,
        id: impl Into<String>,
        name: &str,
        title: impl Into<String>,
        initial_attributes: Attributes,
    ) -> Result<(), RegistryError> {
        let block_type = self
            .types
            .get(name)
            .ok_or_else(|| RegistryError::UnknownBlockType(name.to_string()))?;
        if !block_type.inserter {
            return Ok(());
        }

        self.items.push(CandidateItem {
            id: id.into(),
            name: block_type.name.clone(),
            title: title.into(),
            icon: block_type.icon.clone(),
            initial_attributes,
        });
        Ok(())
    }

    pub fn block_type(&self, name: &str) -> Option<&BlockType> {
        self.types.get(name)
    }

    /// Inserter-visible items permitted by `allowed`
    pub fn items<'a>(&'a self, allowed: &'a BlockTypeSet) -> impl Iterator<Item = &'a CandidateItem> {
        self.items.iter().filter(|item| allowed.allows(&item.name))
    }
}

/// Insert history of one item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Usage {
    pub count: u32,
    pub last_used: Option<DateTime<Utc>>,
}

impl Usage {
    /// Frecency score at `now`
    pub fn frecency(&self, now: DateTime<Utc>) -> f64 {
        let count = f64::from(self.count);
        let Some(last_used) = self.last_used else {
            return count;
        };

        // Timestamps from a skewed clock count as just used
        let age = (now - last_used).max(Duration::zero());
        if age < Duration::hours(1) {
            count * 4.0
        } else if age < Duration::days(1) {
            count * 2.0
        } else if age < Duration::weeks(1) {
            count / 2.0
        } else {
            count / 4.0
        }
    }
}

/// Insert counts keyed by candidate item id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    usage: HashMap<String, Usage>,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an insert of `id` at `at`
    pub fn record_insert(&mut self, id: &str, at: DateTime<Utc>) {
        let usage = self.usage.entry(id.to_string()).or_default();
        usage.count = usage.count.saturating_add(1);
        usage.last_used = Some(at);
    }

    pub fn get(&self, id: &str) -> Usage {
        self.usage.get(id).copied().unwrap_or_default()
    }
}

/// Ranks registry items by frecency at a fixed instant
pub struct FrecencyRanker<'a> {
    registry: &'a BlockTypeRegistry,
    usage: &'a UsageStats,
    now: DateTime<Utc>,
}

impl<'a> FrecencyRanker<'a> {
    pub fn new(registry: &'a BlockTypeRegistry, usage: &'a UsageStats, now: DateTime<Utc>) -> Self {
        Self {
            registry,
            usage,
            now,
        }
    }
}

impl CandidateRanker for FrecencyRanker<'_> {
    fn rank(&self, allowed: &BlockTypeSet, limit: usize) -> Vec<CandidateItem> {
        if allowed.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<_> = self
            .registry
            .items(allowed)
            .map(|item| (self.usage.get(&item.id).frecency(self.now), item))
            .collect();
        // Stable: equal scores keep registration order
        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn registry() -> BlockTypeRegistry {
        let mut registry = BlockTypeRegistry::new();
        for (name, title, icon) in [
            ("core/paragraph", "Paragraph", "editor-paragraph"),
            ("core/heading", "Heading", "heading"),
            ("core/image", "Image", "format-image"),
            ("core/quote", "Quote", "format-quote"),
        ] {
            registry
                .register(BlockType::new(name, title, icon))
                .unwrap();
        }
        registry
            .register(BlockType::new("core/missing", "Missing", "warning").hidden_from_inserter())
            .unwrap();
        registry
    }

    fn ids(items: &[CandidateItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[rstest]
    #[case(Duration::minutes(5), 12.0)]
    #[case(Duration::hours(3), 6.0)]
    #[case(Duration::days(2), 1.5)]
    #[case(Duration::weeks(3), 0.75)]
    fn test_frecency_decays_with_age(#[case] age: Duration, #[case] expected: f64) {
        let usage = Usage {
            count: 3,
            last_used: Some(now() - age),
        };
        assert_eq!(usage.frecency(now()), expected);
    }

    #[test]
    fn test_frecency_without_time_is_count() {
        assert_eq!(Usage::default().frecency(now()), 0.0);
        let usage = Usage {
            count: 5,
            last_used: None,
        };
        assert_eq!(usage.frecency(now()), 5.0);
    }

    #[test]
    fn test_record_insert_counts_and_stamps() {
        let mut stats = UsageStats::new();
        stats.record_insert("core/image", now() - Duration::days(3));
        stats.record_insert("core/image", now());

        assert_eq!(
            stats.get("core/image"),
            Usage {
                count: 2,
                last_used: Some(now()),
            }
        );
        assert_eq!(stats.get("core/quote"), Usage::default());
    }

    #[test]
    fn test_record_insert_saturates_count() {
        let mut stats = UsageStats::new();
        stats.usage.insert(
            "core/image".to_string(),
            Usage {
                count: u32::MAX,
                last_used: None,
            },
        );

        stats.record_insert("core/image", now());

        assert_eq!(stats.get("core/image").count, u32::MAX);
        assert_eq!(stats.get("core/image").last_used, Some(now()));
    }

    #[test]
    fn test_future_timestamp_counts_as_just_used() {
        let usage = Usage {
            count: 3,
            last_used: Some(now() + Duration::days(30)),
        };
        assert_eq!(usage.frecency(now()), 12.0);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = registry();
        let result = registry.register(BlockType::new("core/image", "Image", "format-image"));
        assert_eq!(
            result,
            Err(RegistryError::AlreadyRegistered("core/image".to_string()))
        );
    }

    #[test]
    fn test_variation_requires_registered_type() {
        let mut registry = registry();
        let result = registry.register_variation("vendor/x-wide", "vendor/x", "X", Attributes::new());
        assert_eq!(
            result,
            Err(RegistryError::UnknownBlockType("vendor/x".to_string()))
        );
    }

    #[test]
    fn test_rank_orders_by_frecency() {
        let registry = registry();
        let mut stats = UsageStats::new();
        stats.record_insert("core/quote", now() - Duration::minutes(10));
        stats.record_insert("core/image", now() - Duration::days(10));
        stats.record_insert("core/image", now() - Duration::days(10));
        stats.record_insert("core/heading", now() - Duration::hours(2));

        let ranker = FrecencyRanker::new(&registry, &stats, now());
        let items = ranker.rank(&BlockTypeSet::Unrestricted, 10);

        // quote 4.0, heading 2.0, image 0.5, paragraph 0.0
        assert_eq!(
            ids(&items),
            vec!["core/quote", "core/heading", "core/image", "core/paragraph"]
        );
    }

    #[test]
    fn test_rank_ties_keep_registration_order() {
        let registry = registry();
        let stats = UsageStats::new();
        let ranker = FrecencyRanker::new(&registry, &stats, now());

        let items = ranker.rank(&BlockTypeSet::Unrestricted, 3);

        assert_eq!(ids(&items), vec!["core/paragraph", "core/heading", "core/image"]);
    }

    #[test]
    fn test_rank_respects_allow_set_and_limit() {
        let registry = registry();
        let mut stats = UsageStats::new();
        stats.record_insert("core/heading", now());
        let ranker = FrecencyRanker::new(&registry, &stats, now());

        let allowed = BlockTypeSet::restricted(["core/paragraph", "core/image", "core/missing"]);
        let items = ranker.rank(&allowed, 1);

        assert_eq!(ids(&items), vec!["core/paragraph"]);
        assert!(ranker.rank(&BlockTypeSet::restricted(Vec::<String>::new()), 3).is_empty());
    }

    #[test]
    fn test_hidden_types_are_never_ranked() {
        let registry = registry();
        let mut stats = UsageStats::new();
        stats.record_insert("core/missing", now());
        let ranker = FrecencyRanker::new(&registry, &stats, now());

        let items = ranker.rank(&BlockTypeSet::Unrestricted, 10);

        assert!(items.iter().all(|item| item.name != "core/missing"));
        assert!(registry.block_type("core/missing").is_some());
    }

    #[test]
    fn test_variations_rank_independently() {
        let mut registry = registry();
        let mut attributes = Attributes::new();
        attributes.insert("dropCap".to_string(), json!(true));
        registry
            .register_variation("core/paragraph/drop-cap", "core/paragraph", "Drop cap", attributes)
            .unwrap();

        let mut stats = UsageStats::new();
        stats.record_insert("core/paragraph/drop-cap", now());
        let ranker = FrecencyRanker::new(&registry, &stats, now());

        let items = ranker.rank(&BlockTypeSet::restricted(["core/paragraph"]), 3);

        assert_eq!(ids(&items), vec!["core/paragraph/drop-cap", "core/paragraph"]);
        assert_eq!(items[0].initial_attributes["dropCap"], json!(true));
    }
}
