//! Relevance Selector: picks the knowledge categories a question touches.
//!
//! Matching is plain case-insensitive substring containment, not word matching:
//! the trigger "auto" also fires on "automation", "essen" on "vergessen".
//! This looseness is known and must be preserved.
//! No ranking and no cap: every matching category is included.

use crate::models::knowledge::{KnowledgeBase, RelevantKnowledge};

/// Associates a category identifier with the substrings that select it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: &'static str,
    pub triggers: &'static [&'static str],
}

/// Every selectable category. Adding a category only needs a new entry here
/// plus a matching key in the knowledge file.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "reisen",
        triggers: &["reise", "fahren", "fliegen", "bahn", "auto", "berlin", "münchen"],
    },
    CategoryRule {
        category: "meetings",
        triggers: &["meeting", "konferenz", "zoom", "teams", "hybrid"],
    },
    CategoryRule {
        category: "buero_material",
        triggers: &["stift", "papier", "büromaterial", "kugelschreiber", "ordner"],
    },
    CategoryRule {
        category: "energie",
        triggers: &["energie", "strom", "heizung", "licht", "computer"],
    },
    CategoryRule {
        category: "kantine",
        triggers: &["kantine", "essen", "food", "mensa", "catering"],
    },
];

/// Selects categories from `knowledge` using [`CATEGORY_RULES`].
pub fn select(query: &str, knowledge: &KnowledgeBase) -> RelevantKnowledge {
    select_with_rules(query, knowledge, CATEGORY_RULES)
}

/// Returns the full payload of every category whose rule matches `query`
/// and which exists in `knowledge`, in rule order. Empty when nothing matches.
pub fn select_with_rules(
    query: &str,
    knowledge: &KnowledgeBase,
    rules: &[CategoryRule],
) -> RelevantKnowledge {
    let query_lower = query.to_lowercase();

    rules
        .iter()
        .filter(|rule| rule.triggers.iter().any(|t| query_lower.contains(t)))
        .filter_map(|rule| {
            knowledge
                .get(rule.category)
                .map(|payload| (rule.category.to_string(), payload.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::store::default_knowledge;
    use serde_json::json;

    fn full_knowledge() -> KnowledgeBase {
        serde_json::from_value(json!({
            "reisen": { "bahn": { "co2_pro_km": 0.032 } },
            "meetings": { "virtuell": { "tools": ["Teams"] } },
            "buero_material": { "papier": { "tipps": ["Recyclingpapier"] } },
            "energie": { "licht": { "tipps": ["LED"] } },
            "kantine": { "vegetarisch": { "co2_ersparnis": "50%" } }
        }))
        .unwrap()
    }

    #[test]
    fn test_berlin_trip_selects_travel_only() {
        let knowledge = full_knowledge();
        let relevant = select("Ich muss nach Berlin fahren", &knowledge);

        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant["reisen"], *knowledge.get("reisen").unwrap());
    }

    #[test]
    fn test_no_trigger_returns_empty() {
        let relevant = select("Wie spät ist es?", &full_knowledge());
        assert!(relevant.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive_including_umlauts() {
        let relevant = select("REISE nach MÜNCHEN", &full_knowledge());
        assert!(relevant.contains_key("reisen"));
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "auto" inside "Automatisierung" still selects travel.
        let relevant = select("Automatisierung im Lager", &full_knowledge());
        assert!(relevant.contains_key("reisen"));
    }

    #[test]
    fn test_multiple_categories_all_included() {
        let relevant = select(
            "Hybrid-Meeting mit Catering und Papier-Handouts",
            &full_knowledge(),
        );
        assert_eq!(relevant.len(), 3);
        assert!(relevant.contains_key("meetings"));
        assert!(relevant.contains_key("kantine"));
        assert!(relevant.contains_key("buero_material"));
    }

    #[test]
    fn test_selected_categories_follow_rule_order() {
        let relevant = select("Meeting mit Catering und Papier", &full_knowledge());
        let keys: Vec<&str> = relevant.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["meetings", "buero_material", "kantine"]);

        let rendered = serde_json::to_string(&relevant).unwrap();
        let meetings = rendered.find("\"meetings\"").unwrap();
        let buero = rendered.find("\"buero_material\"").unwrap();
        let kantine = rendered.find("\"kantine\"").unwrap();
        assert!(meetings < buero && buero < kantine);
    }

    #[test]
    fn test_matched_category_missing_from_base_is_skipped() {
        // The default base has no "energie" category.
        let relevant = select("Strom sparen am Computer", &default_knowledge());
        assert!(relevant.is_empty());
    }

    #[test]
    fn test_custom_rules() {
        const RULES: &[CategoryRule] = &[CategoryRule {
            category: "garten",
            triggers: &["kompost"],
        }];
        let knowledge: KnowledgeBase =
            serde_json::from_value(json!({ "garten": { "tipps": ["Bioabfall trennen"] } }))
                .unwrap();

        let relevant = select_with_rules("Wohin mit dem Kompost?", &knowledge, RULES);
        assert_eq!(relevant["garten"], json!({ "tipps": ["Bioabfall trennen"] }));
    }

    #[test]
    fn test_every_rule_has_triggers() {
        for rule in CATEGORY_RULES {
            assert!(!rule.triggers.is_empty(), "{} has no triggers", rule.category);
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }
}
