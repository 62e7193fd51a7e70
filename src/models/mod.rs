//! Domain models for the cleaning pipeline.
//!
//! [`FoodRecord`] is the canonical output row: name, category, the nutrient
//! columns kept from the source export, and the derived vegan flag. Struct
//! field order is the output column order, and the serde renaming produces
//! the canonical header names (`Name`, `Category`, ..., `IsVegan`).

use serde::{Deserialize, Serialize};

/// A cleaned food item in the canonical schema.
///
/// Nutrient fields are `None` when the source cell was absent or not
/// parseable as a number; `None` serializes as an empty CSV field.
/// `is_vegan` is derived, never read from the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FoodRecord {
    pub name: String,
    pub category: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub added_sugar: Option<f64>,
    pub whole_grains: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub monounsaturated_fat: Option<f64>,
    pub polyunsaturated_fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub vitamin_d: Option<f64>,
    pub vitamin_b12: Option<f64>,
    pub iron: Option<f64>,
    pub zinc: Option<f64>,
    pub calcium: Option<f64>,
    pub omega3: Option<f64>,
    pub omega6: Option<f64>,
    pub is_vegan: bool,
}

impl FoodRecord {
    /// Create a record with only name and category set.
    pub fn named(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Same record with a known cholesterol value.
    pub fn with_cholesterol(mut self, mg: f64) -> Self {
        self.cholesterol = Some(mg);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_names_and_order() {
        let record = FoodRecord::named("Äpple", "Frukt");

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(&record).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "Name,Category,Calories,Protein,Fat,Carbs,Fiber,Sugar,AddedSugar,\
             WholeGrains,SaturatedFat,MonounsaturatedFat,PolyunsaturatedFat,\
             Cholesterol,VitaminD,VitaminB12,Iron,Zinc,Calcium,Omega3,Omega6,IsVegan"
        );
    }

    #[test]
    fn test_missing_nutrients_serialize_empty() {
        let record = FoodRecord::named("Äpple", "Frukt").with_cholesterol(2.5);

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(&record).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let data = out.lines().nth(1).unwrap();
        // Empty fields for every None nutrient, the known value in place,
        // and the canonical boolean token at the end.
        assert_eq!(data, "Äpple,Frukt,,,,,,,,,,,,2.5,,,,,,,,false");
    }

    #[test]
    fn test_json_roundtrip() {
        let record = FoodRecord::named("Tofu", "Baljväxter");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"IsVegan\":false"));
        let back: FoodRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
