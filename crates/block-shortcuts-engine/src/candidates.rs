use crate::block_types::BlockTypeSet;
use serde::{Deserialize, Serialize};

/// Attribute name to value mapping carried by blocks and candidate items
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A block type offered for insertion, possibly pre-filled with attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Unique per item; variations of one block type have distinct ids
    pub id: String,
    /// Block type name, e.g. `core/image`
    pub name: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub initial_attributes: Attributes,
}

impl CandidateItem {
    /// An item for a block type with no pre-filled attributes, keyed by the type name
    pub fn for_block_type(
        name: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            title: title.into(),
            icon: icon.into(),
            initial_attributes: Attributes::new(),
        }
    }

    pub fn with_initial_attributes(mut self, initial_attributes: Attributes) -> Self {
        self.initial_attributes = initial_attributes;
        self
    }
}

/// Source of candidate items ordered by usage.
///
/// Implementations return at most `limit` items, only of types permitted by
/// `allowed`, most frequently and recently used first. Ordering of equal
/// scores must be deterministic for a given state; callers never re-sort.
pub trait CandidateRanker {
    fn rank(&self, allowed: &BlockTypeSet, limit: usize) -> Vec<CandidateItem>;
}

impl<F> CandidateRanker for F
where
    F: Fn(&BlockTypeSet, usize) -> Vec<CandidateItem>,
{
    fn rank(&self, allowed: &BlockTypeSet, limit: usize) -> Vec<CandidateItem> {
        self(allowed, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_block_type_uses_name_as_id() {
        let item = CandidateItem::for_block_type("core/image", "Image", "format-image");
        assert_eq!(item.id, "core/image");
        assert_eq!(item.name, "core/image");
        assert!(item.initial_attributes.is_empty());
    }

    #[test]
    fn test_closure_acts_as_ranker() {
        let ranker = |allowed: &BlockTypeSet, limit: usize| {
            [
                CandidateItem::for_block_type("core/quote", "Quote", "format-quote"),
                CandidateItem::for_block_type("core/image", "Image", "format-image"),
            ]
            .into_iter()
            .filter(|item| allowed.allows(&item.name))
            .take(limit)
            .collect::<Vec<_>>()
        };

        let items = ranker.rank(&BlockTypeSet::restricted(["core/image"]), 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "core/image");
    }

    #[test]
    fn test_initial_attributes_default_to_empty() {
        let item: CandidateItem = serde_json::from_value(json!({
            "id": "core/heading",
            "name": "core/heading",
            "title": "Heading",
            "icon": "heading",
        }))
        .unwrap();
        assert!(item.initial_attributes.is_empty());
    }
}
