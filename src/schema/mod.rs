//! Canonical schema mapping.
//!
//! The source export names its columns in Swedish; the app schema uses
//! English names. [`COLUMN_MAP`] is the fixed projection between the two:
//! only the listed columns survive, everything else in the source is
//! dropped. The mapping is data, not behavior, so extending or localizing
//! it never touches the mapping code.
//!
//! Header validation runs once per load and reports every missing column
//! at once, since an absent column means the input is a different export
//! format, not a bad row. Cell-level problems are the opposite: an
//! unparseable numeric cell becomes null and the run continues.

use serde_json::Value;

use crate::error::{MappingError, MappingResult};
use crate::models::FoodRecord;

/// Fixed projection from source columns to canonical fields, in output
/// column order.
pub const COLUMN_MAP: &[(&str, &str)] = &[
    ("Livsmedelsnamn", "Name"),
    ("Gruppering", "Category"),
    ("Energi (kcal)", "Calories"),
    ("Protein (g)", "Protein"),
    ("Fett, totalt (g)", "Fat"),
    ("Kolhydrater, tillgängliga (g)", "Carbs"),
    ("Fibrer (g)", "Fiber"),
    ("Sockerarter, totalt (g)", "Sugar"),
    ("Tillsatt socker (g)", "AddedSugar"),
    ("Fullkorn totalt (g)", "WholeGrains"),
    ("Summa mättade fettsyror (g)", "SaturatedFat"),
    ("Summa enkelomättade fettsyror (g)", "MonounsaturatedFat"),
    ("Summa fleromättade fettsyror (g)", "PolyunsaturatedFat"),
    ("Kolesterol (mg)", "Cholesterol"),
    ("Vitamin D (µg)", "VitaminD"),
    ("Vitamin B12 (µg)", "VitaminB12"),
    ("Järn, Fe (mg)", "Iron"),
    ("Zink, Zn (mg)", "Zinc"),
    ("Kalcium, Ca (mg)", "Calcium"),
    ("Linolensyra C18:3 (g)", "Omega3"),
    ("Linolsyra C18:2 (g)", "Omega6"),
];

/// Validate that every mapped source column exists in the header set.
///
/// Must run once per load, before any row is mapped; a missing column is a
/// structural mismatch with the expected export format.
pub fn validate_headers(headers: &[String]) -> MappingResult<()> {
    let missing: Vec<String> = COLUMN_MAP
        .iter()
        .filter(|(source, _)| !headers.iter().any(|h| h == source))
        .map(|(source, _)| source.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MappingError::MissingColumns(missing))
    }
}

/// Project one source row onto the canonical schema.
///
/// The vegan flag is left unset (`false`); classification happens after
/// mapping. Unlisted source columns are dropped, rows are never filtered.
pub fn map_row(row: &Value) -> FoodRecord {
    FoodRecord {
        name: string_cell(row, "Name"),
        category: string_cell(row, "Category"),
        calories: number_cell(row, "Calories"),
        protein: number_cell(row, "Protein"),
        fat: number_cell(row, "Fat"),
        carbs: number_cell(row, "Carbs"),
        fiber: number_cell(row, "Fiber"),
        sugar: number_cell(row, "Sugar"),
        added_sugar: number_cell(row, "AddedSugar"),
        whole_grains: number_cell(row, "WholeGrains"),
        saturated_fat: number_cell(row, "SaturatedFat"),
        monounsaturated_fat: number_cell(row, "MonounsaturatedFat"),
        polyunsaturated_fat: number_cell(row, "PolyunsaturatedFat"),
        cholesterol: number_cell(row, "Cholesterol"),
        vitamin_d: number_cell(row, "VitaminD"),
        vitamin_b12: number_cell(row, "VitaminB12"),
        iron: number_cell(row, "Iron"),
        zinc: number_cell(row, "Zinc"),
        calcium: number_cell(row, "Calcium"),
        omega3: number_cell(row, "Omega3"),
        omega6: number_cell(row, "Omega6"),
        is_vegan: false,
    }
}

/// Source column for a canonical field name.
pub fn source_column(canonical: &str) -> &'static str {
    COLUMN_MAP
        .iter()
        .find(|(_, c)| *c == canonical)
        .map(|(s, _)| *s)
        .expect("canonical field is listed in COLUMN_MAP")
}

fn string_cell(row: &Value, canonical: &str) -> String {
    coerce_string(row.get(source_column(canonical)))
}

fn number_cell(row: &Value, canonical: &str) -> Option<f64> {
    coerce_number(row.get(source_column(canonical)))
}

/// Lenient string coercion: null and non-text become empty/stringified,
/// never an error.
pub fn coerce_string(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Lenient numeric coercion: anything that does not parse becomes `None`,
/// treated downstream as "no information".
pub fn coerce_number(cell: Option<&Value>) -> Option<f64> {
    match cell? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Parse a decimal cell, accepting the Swedish decimal comma.
fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| trimmed.replace(',', ".").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_headers() -> Vec<String> {
        COLUMN_MAP.iter().map(|(s, _)| s.to_string()).collect()
    }

    #[test]
    fn test_validate_headers_accepts_full_set() {
        assert!(validate_headers(&full_headers()).is_ok());
    }

    #[test]
    fn test_validate_headers_ignores_extra_columns() {
        let mut headers = full_headers();
        headers.push("Salt (g)".to_string());
        assert!(validate_headers(&headers).is_ok());
    }

    #[test]
    fn test_validate_headers_reports_all_missing() {
        let headers: Vec<String> = full_headers()
            .into_iter()
            .filter(|h| h != "Livsmedelsnamn" && h != "Kolesterol (mg)")
            .collect();

        let MappingError::MissingColumns(missing) = validate_headers(&headers).unwrap_err();
        assert_eq!(missing, vec!["Livsmedelsnamn", "Kolesterol (mg)"]);
    }

    #[test]
    fn test_map_row_projects_and_renames() {
        let row = json!({
            "Livsmedelsnamn": "Äpple",
            "Gruppering": "Frukt och bär",
            "Energi (kcal)": 52.0,
            "Kolesterol (mg)": 0.0,
            "Salt (g)": 0.1,
        });

        let record = map_row(&row);
        assert_eq!(record.name, "Äpple");
        assert_eq!(record.category, "Frukt och bär");
        assert_eq!(record.calories, Some(52.0));
        assert_eq!(record.cholesterol, Some(0.0));
        // Unmapped columns are dropped, unlisted nutrients are None.
        assert_eq!(record.protein, None);
        assert!(!record.is_vegan);
    }

    #[test]
    fn test_numeric_strings_parse() {
        let row = json!({ "Energi (kcal)": "52.3" });
        assert_eq!(map_row(&row).calories, Some(52.3));
    }

    #[test]
    fn test_decimal_comma_parses() {
        let row = json!({ "Energi (kcal)": "52,3" });
        assert_eq!(map_row(&row).calories, Some(52.3));
    }

    #[test]
    fn test_unparseable_numeric_cell_is_none() {
        for junk in ["spår", "<0.1", "n/a"] {
            let row = json!({ "Kolesterol (mg)": junk });
            assert_eq!(map_row(&row).cholesterol, None, "cell {junk:?}");
        }
    }

    #[test]
    fn test_null_name_becomes_empty_string() {
        let row = json!({ "Livsmedelsnamn": null });
        assert_eq!(map_row(&row).name, "");
    }

    #[test]
    fn test_missing_cells_recover() {
        let record = map_row(&json!({}));
        assert_eq!(record.name, "");
        assert_eq!(record.category, "");
        assert_eq!(record.calories, None);
    }

    #[test]
    fn test_source_column_lookup() {
        assert_eq!(source_column("Omega3"), "Linolensyra C18:3 (g)");
        assert_eq!(source_column("Name"), "Livsmedelsnamn");
    }
}
