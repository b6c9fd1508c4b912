//! Dietary filter flags.

use serde::{Deserialize, Serialize};

/// One of the five dietary checkboxes on the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryFlag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
}

impl DietaryFlag {
    /// All flags in form order.
    pub const ALL: [DietaryFlag; 5] = [
        DietaryFlag::Vegetarian,
        DietaryFlag::Vegan,
        DietaryFlag::GlutenFree,
        DietaryFlag::DairyFree,
        DietaryFlag::NutFree,
    ];

    /// Key used in the JSON request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            DietaryFlag::Vegetarian => "vegetarian",
            DietaryFlag::Vegan => "vegan",
            DietaryFlag::GlutenFree => "gluten_free",
            DietaryFlag::DairyFree => "dairy_free",
            DietaryFlag::NutFree => "nut_free",
        }
    }

    /// Id of the checkbox element that carries this flag.
    pub fn element_id(self) -> &'static str {
        match self {
            DietaryFlag::Vegetarian => "filterVegetarian",
            DietaryFlag::Vegan => "filterVegan",
            DietaryFlag::GlutenFree => "filterGlutenFree",
            DietaryFlag::DairyFree => "filterDairyFree",
            DietaryFlag::NutFree => "filterNutFree",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DietaryFlag::Vegetarian => "Vegetarian",
            DietaryFlag::Vegan => "Vegan",
            DietaryFlag::GlutenFree => "Gluten-free",
            DietaryFlag::DairyFree => "Dairy-free",
            DietaryFlag::NutFree => "Nut-free",
        }
    }

    /// Parse a wire name (`gluten_free`) or its dashed form (`gluten-free`).
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        DietaryFlag::ALL
            .into_iter()
            .find(|flag| flag.wire_name() == normalized)
    }
}

/// Dietary restrictions sent alongside the ingredient text.
///
/// Always serialised with all five keys present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryFilters {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(default)]
    pub nut_free: bool,
}

impl DietaryFilters {
    pub fn vegetarian(mut self, on: bool) -> Self {
        self.vegetarian = on;
        self
    }

    pub fn vegan(mut self, on: bool) -> Self {
        self.vegan = on;
        self
    }

    pub fn gluten_free(mut self, on: bool) -> Self {
        self.gluten_free = on;
        self
    }

    pub fn dairy_free(mut self, on: bool) -> Self {
        self.dairy_free = on;
        self
    }

    pub fn nut_free(mut self, on: bool) -> Self {
        self.nut_free = on;
        self
    }

    pub fn get(&self, flag: DietaryFlag) -> bool {
        match flag {
            DietaryFlag::Vegetarian => self.vegetarian,
            DietaryFlag::Vegan => self.vegan,
            DietaryFlag::GlutenFree => self.gluten_free,
            DietaryFlag::DairyFree => self.dairy_free,
            DietaryFlag::NutFree => self.nut_free,
        }
    }

    pub fn set(&mut self, flag: DietaryFlag, on: bool) {
        let slot = match flag {
            DietaryFlag::Vegetarian => &mut self.vegetarian,
            DietaryFlag::Vegan => &mut self.vegan,
            DietaryFlag::GlutenFree => &mut self.gluten_free,
            DietaryFlag::DairyFree => &mut self.dairy_free,
            DietaryFlag::NutFree => &mut self.nut_free,
        };
        *slot = on;
    }

    /// Flags that are switched on, in form order.
    pub fn active(&self) -> Vec<DietaryFlag> {
        DietaryFlag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_five_keys() {
        let filters = DietaryFilters::default().vegan(true).nut_free(true);
        let value = serde_json::to_value(filters).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "vegetarian": false,
                "vegan": true,
                "gluten_free": false,
                "dairy_free": false,
                "nut_free": true,
            })
        );
    }

    #[test]
    fn test_active_flags_in_form_order() {
        let mut filters = DietaryFilters::default();
        filters.set(DietaryFlag::NutFree, true);
        filters.set(DietaryFlag::Vegetarian, true);
        assert_eq!(
            filters.active(),
            vec![DietaryFlag::Vegetarian, DietaryFlag::NutFree]
        );
    }

    #[test]
    fn test_flag_from_name() {
        assert_eq!(DietaryFlag::from_name("gluten-free"), Some(DietaryFlag::GlutenFree));
        assert_eq!(DietaryFlag::from_name("DAIRY_FREE"), Some(DietaryFlag::DairyFree));
        assert_eq!(DietaryFlag::from_name("keto"), None);
    }
}
