//! Monthly cost-of-living comparison across cities for one lifestyle tier.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::FormState;

pub const FIELD_TIER: &str = "tier";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Standard,
    Comfort,
    Luxury,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Comfort, Self::Luxury];

    /// Lenient parse used at the form boundary; anything unknown is `Standard`.
    #[must_use]
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "comfort" => Self::Comfort,
            "luxury" => Self::Luxury,
            _ => Self::Standard,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Comfort => "comfort",
            Self::Luxury => "luxury",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

/// Monthly spend per category, in 万円, for each tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityProfile {
    pub name: String,
    pub standard: IndexMap<String, f64>,
    pub comfort: IndexMap<String, f64>,
    pub luxury: IndexMap<String, f64>,
}

impl CityProfile {
    #[must_use]
    pub const fn tier(&self, tier: Tier) -> &IndexMap<String, f64> {
        match tier {
            Tier::Standard => &self.standard,
            Tier::Comfort => &self.comfort,
            Tier::Luxury => &self.luxury,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostTables {
    pub categories: Vec<Category>,
    /// City id to profile, in display order
    pub cities: IndexMap<String, CityProfile>,
}

const CATEGORY_KEYS: [(&str, &str); 8] = [
    ("housing", "Housing"),
    ("food", "Food"),
    ("transport", "Transport"),
    ("utilities", "Utilities"),
    ("education", "Education"),
    ("healthcare", "Healthcare"),
    ("entertainment", "Entertainment"),
    ("other", "Other"),
];

fn tier_values(values: [f64; 8]) -> IndexMap<String, f64> {
    CATEGORY_KEYS
        .iter()
        .zip(values)
        .map(|((key, _), v)| ((*key).to_string(), v))
        .collect()
}

fn city(name: &str, standard: [f64; 8], comfort: [f64; 8], luxury: [f64; 8]) -> CityProfile {
    CityProfile {
        name: name.to_string(),
        standard: tier_values(standard),
        comfort: tier_values(comfort),
        luxury: tier_values(luxury),
    }
}

impl Default for CostTables {
    fn default() -> Self {
        let categories = CATEGORY_KEYS
            .iter()
            .map(|(key, label)| Category {
                key: (*key).to_string(),
                label: (*label).to_string(),
            })
            .collect();

        let mut cities = IndexMap::new();
        cities.insert(
            "tokyo".to_string(),
            city(
                "Tokyo",
                [12.0, 6.0, 1.5, 2.0, 3.0, 1.5, 3.0, 2.0],
                [20.0, 9.0, 2.5, 2.5, 8.0, 2.0, 5.0, 3.0],
                [40.0, 15.0, 5.0, 3.5, 20.0, 4.0, 10.0, 6.0],
            ),
        );
        cities.insert(
            "dubai".to_string(),
            city(
                "Dubai",
                [15.0, 6.0, 2.0, 2.5, 5.0, 2.0, 3.0, 2.0],
                [28.0, 9.0, 3.5, 3.5, 15.0, 3.0, 6.0, 3.0],
                [60.0, 15.0, 8.0, 5.0, 30.0, 6.0, 15.0, 6.0],
            ),
        );
        cities.insert(
            "riyadh".to_string(),
            city(
                "Riyadh",
                [8.0, 5.0, 2.0, 1.5, 4.0, 1.5, 2.0, 1.5],
                [15.0, 7.5, 3.0, 2.5, 12.0, 2.5, 4.0, 2.5],
                [32.0, 12.0, 6.0, 4.0, 25.0, 5.0, 8.0, 5.0],
            ),
        );

        Self { categories, cities }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostInput {
    pub tier: Tier,
}

impl CostInput {
    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        Self {
            tier: Tier::from_form(form.text(FIELD_TIER)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCost {
    pub id: String,
    pub name: String,
    /// Values in category order; a category missing from the table reads as 0
    pub categories: Vec<f64>,
    pub monthly_total: f64,
    pub annual_total: f64,
    /// Monthly total relative to the first city, in percent
    pub relative_to_first_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComparison {
    pub tier: Tier,
    pub categories: Vec<Category>,
    pub cities: Vec<CityCost>,
    /// Index into `cities`
    pub cheapest: Option<usize>,
    /// Index into `cities`
    pub most_expensive: Option<usize>,
    pub monthly_difference: f64,
    pub annual_difference: f64,
}

impl CostComparison {
    #[must_use]
    pub fn cheapest_city(&self) -> Option<&CityCost> {
        self.cheapest.and_then(|i| self.cities.get(i))
    }

    #[must_use]
    pub fn most_expensive_city(&self) -> Option<&CityCost> {
        self.most_expensive.and_then(|i| self.cities.get(i))
    }
}

/// Compare every city in `tables` at the requested tier.
#[must_use]
pub fn compare(input: &CostInput, tables: &CostTables) -> CostComparison {
    let mut cities: Vec<CityCost> = tables
        .cities
        .iter()
        .map(|(id, profile)| {
            let values = profile.tier(input.tier);
            let categories: Vec<f64> = tables
                .categories
                .iter()
                .map(|c| values.get(&c.key).copied().unwrap_or(0.0))
                .collect();
            let monthly_total: f64 = categories.iter().sum();
            CityCost {
                id: id.clone(),
                name: profile.name.clone(),
                categories,
                monthly_total,
                annual_total: monthly_total * 12.0,
                relative_to_first_pct: 0.0,
            }
        })
        .collect();

    if let Some(first) = cities.first().map(|c| c.monthly_total)
        && first > 0.0
    {
        for c in &mut cities {
            c.relative_to_first_pct = (c.monthly_total - first) / first * 100.0;
        }
    }

    // Strict comparisons keep the first city in declaration order on ties.
    let mut cheapest: Option<usize> = None;
    let mut most_expensive: Option<usize> = None;
    for (i, c) in cities.iter().enumerate() {
        if cheapest.is_none_or(|j| c.monthly_total < cities[j].monthly_total) {
            cheapest = Some(i);
        }
        if most_expensive.is_none_or(|j| c.monthly_total > cities[j].monthly_total) {
            most_expensive = Some(i);
        }
    }

    let monthly_difference = match (cheapest, most_expensive) {
        (Some(lo), Some(hi)) => cities[hi].monthly_total - cities[lo].monthly_total,
        _ => 0.0,
    };

    tracing::debug!(
        tier = input.tier.as_str(),
        cities = cities.len(),
        monthly_difference,
        "cost comparison computed"
    );

    CostComparison {
        tier: input.tier,
        categories: tables.categories.clone(),
        cities,
        cheapest,
        most_expensive,
        monthly_difference,
        annual_difference: monthly_difference * 12.0,
    }
}

#[cfg(test)]
#[path = "cost_tests.rs"]
mod tests;
