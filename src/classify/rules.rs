//! Non-vegan detection rules.
//!
//! Each rule is an independent predicate over one record; the rule set
//! evaluates them in a fixed sequence and the first match wins. Keeping
//! the rules as plain values means each one can be tested in isolation
//! and the sequence reordered deliberately.

use super::lexicon;

/// What a rule gets to look at: case-folded name and category, plus the
/// cholesterol value if the source knew it.
#[derive(Debug, Clone)]
pub struct Subject {
    pub name: String,
    pub category: String,
    pub cholesterol: Option<f64>,
}

impl Subject {
    /// Case-folds on construction so every rule sees the same text.
    /// Missing name/category fold to the empty string.
    pub fn new(name: &str, category: &str, cholesterol: Option<f64>) -> Self {
        Self {
            name: name.to_lowercase(),
            category: category.to_lowercase(),
            cholesterol,
        }
    }
}

/// Why a record was marked non-vegan.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// The entry or value that triggered it.
    pub trigger: String,
}

/// A single non-vegan detection rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Positive dietary cholesterol. In this database it is reported
    /// essentially only for animal products, so it is the cheapest and
    /// most reliable signal. Unknown cholesterol is no evidence, not zero.
    CholesterolPresent,

    /// The category label contains a blocked entry as a substring.
    BlockedCategory {
        categories: &'static [&'static str],
    },

    /// The name contains a blocked keyword as a substring. A match is
    /// suppressed when a plant-derived exception also occurs in the name
    /// ("kokosmjölk"), or for the beef/nut homograph when the category
    /// says the item is a nut or seed. A suppressed match does not stop
    /// the scan.
    BlockedKeyword {
        keywords: &'static [&'static str],
        exceptions: &'static [&'static str],
    },
}

impl Rule {
    /// Short name for operator output.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::CholesterolPresent => "cholesterol",
            Rule::BlockedCategory { .. } => "category",
            Rule::BlockedKeyword { .. } => "keyword",
        }
    }

    /// Evaluate against a subject. `Some` marks the record non-vegan.
    pub fn evaluate(&self, subject: &Subject) -> Option<RuleMatch> {
        match self {
            Rule::CholesterolPresent => match subject.cholesterol {
                Some(mg) if mg > 0.0 => Some(self.matched(format!("{mg} mg"))),
                _ => None,
            },

            Rule::BlockedCategory { categories } => {
                for &category in *categories {
                    if subject.category.contains(category) {
                        return Some(self.matched(category.to_string()));
                    }
                }
                None
            }

            Rule::BlockedKeyword {
                keywords,
                exceptions,
            } => {
                for &keyword in *keywords {
                    if !subject.name.contains(keyword) {
                        continue;
                    }
                    if suppressed(keyword, subject, exceptions) {
                        continue;
                    }
                    return Some(self.matched(keyword.to_string()));
                }
                None
            }
        }
    }

    fn matched(&self, trigger: String) -> RuleMatch {
        RuleMatch {
            rule: self.name(),
            trigger,
        }
    }
}

/// Whether a keyword hit is a known false positive.
///
/// Exceptions are tested against the whole name, matching the behavior the
/// dataset was originally cleaned with: "ris" inside "gris" suppresses the
/// pork keyword too, and the homograph check only looks at category
/// markers. Both quirks are kept deliberately.
fn suppressed(keyword: &str, subject: &Subject, exceptions: &[&str]) -> bool {
    if exceptions.iter().any(|e| subject.name.contains(e)) {
        return true;
    }

    keyword == lexicon::NUT_HOMOGRAPH
        && lexicon::NUT_CATEGORY_MARKERS
            .iter()
            .any(|m| subject.category.contains(m))
}
