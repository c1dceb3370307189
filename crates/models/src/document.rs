use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::organization::Organization;

/// The full persisted state: both category lists together. Field names match
/// the on-disk JSON layout.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub orphanages: Vec<Organization>,
    #[serde(default, rename = "oldageHomes")]
    pub oldage_homes: Vec<Organization>,
}

impl Document {
    pub fn list(&self, category: Category) -> &Vec<Organization> {
        match category {
            Category::Orphanage => &self.orphanages,
            Category::OldageHome => &self.oldage_homes,
        }
    }

    pub fn list_mut(&mut self, category: Category) -> &mut Vec<Organization> {
        match category {
            Category::Orphanage => &mut self.orphanages,
            Category::OldageHome => &mut self.oldage_homes,
        }
    }

    /// Next id within a category: max existing id (0 when empty) plus one.
    pub fn next_id(&self, category: Category) -> u32 {
        self.list(category).iter().map(|o| o.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: u32) -> Organization {
        Organization { id, org_name: format!("org-{id}"), fund_amount: "₹100".into() }
    }

    #[test]
    fn next_id_starts_at_one() {
        let doc = Document::default();
        assert_eq!(doc.next_id(Category::Orphanage), 1);
        assert_eq!(doc.next_id(Category::OldageHome), 1);
    }

    #[test]
    fn next_id_is_max_plus_one_per_category() {
        let doc = Document {
            orphanages: vec![org(3), org(1)],
            oldage_homes: vec![org(7)],
        };
        assert_eq!(doc.next_id(Category::Orphanage), 4);
        assert_eq!(doc.next_id(Category::OldageHome), 8);
    }

    #[test]
    fn disk_layout_uses_wire_field_names() {
        let doc = Document { orphanages: vec![org(1)], oldage_homes: vec![] };
        let json = serde_json::to_value(&doc).expect("serialize");
        assert!(json.get("orphanages").is_some());
        assert!(json.get("oldageHomes").is_some());
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let doc: Document = serde_json::from_str("{}").expect("deserialize");
        assert!(doc.orphanages.is_empty());
        assert!(doc.oldage_homes.is_empty());
    }
}
