//! Vegan classification rule engine.
//!
//! Decides, per record, whether a food item is vegan. Default-allow: most
//! rows in this database are plant-based, so the engine looks for positive
//! evidence of animal origin and lets everything else through.
//!
//! The rules run in a fixed order, cheapest and most reliable signal
//! first:
//!
//! 1. positive cholesterol (numeric only, no string matching)
//! 2. blocked category label (coarse)
//! 3. blocked name keyword with plant-name suppression (fine-grained)
//!
//! Classification is a pure function of the record: no I/O, no state
//! across rows, same record in, same verdict out.

pub mod lexicon;
pub mod rules;

pub use rules::{Rule, RuleMatch, Subject};

use once_cell::sync::Lazy;

use crate::models::FoodRecord;

static STANDARD_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::default);

/// An ordered set of non-vegan detection rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![
                Rule::CholesterolPresent,
                Rule::BlockedCategory {
                    categories: lexicon::NON_VEGAN_CATEGORIES,
                },
                Rule::BlockedKeyword {
                    keywords: lexicon::NON_VEGAN_KEYWORDS,
                    exceptions: lexicon::VEGAN_EXCEPTIONS,
                },
            ],
        }
    }
}

impl RuleSet {
    /// The process-wide default rule set, built once.
    pub fn standard() -> &'static RuleSet {
        &STANDARD_RULES
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule that marks the record non-vegan, if any.
    pub fn first_match(&self, record: &FoodRecord) -> Option<RuleMatch> {
        let subject = Subject::new(&record.name, &record.category, record.cholesterol);
        self.match_subject(&subject)
    }

    /// Like [`first_match`](Self::first_match), for an already-built subject.
    pub fn match_subject(&self, subject: &Subject) -> Option<RuleMatch> {
        self.rules.iter().find_map(|rule| rule.evaluate(subject))
    }

    /// Default-allow verdict: vegan unless some rule says otherwise.
    pub fn is_vegan(&self, record: &FoodRecord) -> bool {
        self.first_match(record).is_none()
    }
}

/// Human-readable rule listing for the `rules` CLI command.
pub fn rules_description() -> String {
    format!(
        "Classification rules, evaluated in order (first match = non-vegan):\n\
         \n\
         1. cholesterol  known value > 0; unknown never matches\n\
         2. category     label contains any of:\n\
         {}\n\
         3. keyword      name contains any of:\n\
         {}\n\
         \n\
         A keyword match is suppressed when the name also contains one of:\n\
         {}\n\
         and for '{}' when the category contains: {}\n\
         \n\
         No rule matched = vegan.",
        wrapped(lexicon::NON_VEGAN_CATEGORIES),
        wrapped(lexicon::NON_VEGAN_KEYWORDS),
        wrapped(lexicon::VEGAN_EXCEPTIONS),
        lexicon::NUT_HOMOGRAPH,
        lexicon::NUT_CATEGORY_MARKERS.join(", "),
    )
}

fn wrapped(entries: &[&str]) -> String {
    entries
        .chunks(8)
        .map(|chunk| format!("                {}", chunk.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> &'static RuleSet {
        RuleSet::standard()
    }

    #[test]
    fn test_cholesterol_dominates_name_and_category() {
        // Plant-sounding name and category, but a known cholesterol value.
        let record = FoodRecord::named("Sojabönor kokta", "Baljväxter").with_cholesterol(3.0);
        assert!(!rules().is_vegan(&record));
        assert_eq!(rules().first_match(&record).unwrap().rule, "cholesterol");
    }

    #[test]
    fn test_category_fires_despite_plant_sounding_name() {
        let record = FoodRecord::named("Tofu", "Kött");
        assert!(!rules().is_vegan(&record));
        assert_eq!(rules().first_match(&record).unwrap().rule, "category");
    }

    #[test]
    fn test_default_allow() {
        let record = FoodRecord::named("Äpple", "Frukt").with_cholesterol(0.0);
        assert!(rules().is_vegan(&record));
    }

    #[test]
    fn test_coconut_milk_is_vegan() {
        let record = FoodRecord::named("Kokosmjölk", "Drycker").with_cholesterol(0.0);
        assert!(rules().is_vegan(&record));
    }

    #[test]
    fn test_ground_beef_is_not_vegan() {
        let record = FoodRecord::named("Nötfärs", "Kött");
        assert!(!rules().is_vegan(&record));
    }

    #[test]
    fn test_ground_beef_keyword_without_category() {
        // Even with an unblocked category the name keyword catches it.
        let record = FoodRecord::named("Nötfärs stekt", "Maträtter");
        let m = rules().first_match(&record).unwrap();
        assert_eq!(m.rule, "keyword");
        assert_eq!(m.trigger, "nöt");
    }

    #[test]
    fn test_peanuts_are_vegan() {
        let record = FoodRecord::named("Jordnötter", "Nötter och frön");
        assert!(rules().is_vegan(&record));
    }

    #[test]
    fn test_empty_name_and_category_default_vegan() {
        let record = FoodRecord::named("", "");
        assert!(rules().is_vegan(&record));
    }

    #[test]
    fn test_classification_is_pure() {
        let record = FoodRecord::named("Filmjölk", "Mjölkprodukter");
        let first = rules().is_vegan(&record);
        for _ in 0..10 {
            assert_eq!(rules().is_vegan(&record), first);
        }
        assert!(!first);
    }

    #[test]
    fn test_rule_order_is_numeric_then_category_then_keyword() {
        let names: Vec<&str> = rules().rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["cholesterol", "category", "keyword"]);
    }

    #[test]
    fn test_rules_description_mentions_every_table() {
        let text = rules_description();
        assert!(text.contains("kyckling"));
        assert!(text.contains("skaldjur"));
        assert!(text.contains("kokos"));
        assert!(text.contains("nötter"));
    }
}
