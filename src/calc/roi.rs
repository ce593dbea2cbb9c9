//! Real-estate return on investment with a simple (non-compounding rent)
//! multi-year projection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RelocSimError, Result};
use crate::input::FormState;

pub const FIELD_PRICE: &str = "price";
pub const FIELD_GROSS_YIELD: &str = "gross_yield";
pub const FIELD_MANAGEMENT_FEE: &str = "management_fee";
pub const FIELD_VACANCY: &str = "vacancy";
pub const FIELD_PURCHASE_COST: &str = "purchase_cost";
pub const FIELD_APPRECIATION: &str = "appreciation";

/// Every form field the ROI calculator reads, in display order.
pub const FIELDS: &[&str] = &[
    FIELD_PRICE,
    FIELD_GROSS_YIELD,
    FIELD_MANAGEMENT_FEE,
    FIELD_VACANCY,
    FIELD_PURCHASE_COST,
    FIELD_APPRECIATION,
];

/// Purchase price in 万円; every other field is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub price: f64,
    pub gross_yield: f64,
    pub management_fee: f64,
    pub vacancy: f64,
    pub purchase_cost: f64,
    pub appreciation: f64,
}

impl RoiInput {
    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        Self {
            price: form.number(FIELD_PRICE),
            gross_yield: form.number(FIELD_GROSS_YIELD),
            management_fee: form.number(FIELD_MANAGEMENT_FEE),
            vacancy: form.number(FIELD_VACANCY),
            purchase_cost: form.number(FIELD_PURCHASE_COST),
            appreciation: form.number(FIELD_APPRECIATION),
        }
    }

    /// The input as raw form fields, for seeding a form from a preset.
    #[must_use]
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::new();
        for (key, value) in [
            (FIELD_PRICE, self.price),
            (FIELD_GROSS_YIELD, self.gross_yield),
            (FIELD_MANAGEMENT_FEE, self.management_fee),
            (FIELD_VACANCY, self.vacancy),
            (FIELD_PURCHASE_COST, self.purchase_cost),
            (FIELD_APPRECIATION, self.appreciation),
        ] {
            form.set(key, &value.to_string());
        }
        form
    }
}

/// A named set of form defaults, e.g. a typical Dubai Marina apartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiPreset {
    pub label: String,
    #[serde(flatten)]
    pub input: RoiInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    /// Last projection year; the projection covers `0..=horizon_years`
    pub horizon_years: u32,
    pub presets: IndexMap<String, RoiPreset>,
}

impl Default for RoiConfig {
    fn default() -> Self {
        let mut presets = IndexMap::new();
        presets.insert(
            "dubai-marina".to_string(),
            RoiPreset {
                label: "Dubai Marina 1BR".to_string(),
                input: RoiInput {
                    price: 5_000.0,
                    gross_yield: 6.5,
                    management_fee: 3.0,
                    vacancy: 5.0,
                    purchase_cost: 7.0,
                    appreciation: 3.0,
                },
            },
        );
        presets.insert(
            "tokyo-condo".to_string(),
            RoiPreset {
                label: "Tokyo central condo".to_string(),
                input: RoiInput {
                    price: 5_000.0,
                    gross_yield: 3.5,
                    management_fee: 5.0,
                    vacancy: 3.0,
                    purchase_cost: 7.0,
                    appreciation: 1.0,
                },
            },
        );
        Self {
            horizon_years: 10,
            presets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub property_value: f64,
    pub cumulative_rent: f64,
    pub total_asset: f64,
    /// `total_asset - total_investment`
    pub gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiResult {
    pub input: RoiInput,
    pub gross_rent: f64,
    pub effective_rent: f64,
    pub management_cost: f64,
    pub noi: f64,
    pub purchase_costs: f64,
    pub total_investment: f64,
    pub cap_rate: f64,
    pub annual_roi: f64,
    pub monthly_cash_flow: f64,
    /// Years of NOI needed to recover the total investment
    pub payback_years: Option<f64>,
    /// First projection year with a non-negative gain
    pub break_even_year: Option<u32>,
    pub projection: Vec<ProjectionYear>,
}

/// # Errors
/// Returns `NonPositiveInput` when `price <= 0`; nothing is computed.
pub fn calculate(input: &RoiInput, horizon_years: u32) -> Result<RoiResult> {
    if input.price.is_nan() || input.price <= 0.0 {
        return Err(RelocSimError::NonPositiveInput {
            field: FIELD_PRICE,
            value: input.price,
        });
    }

    let price = input.price;
    let gross_rent = price * input.gross_yield / 100.0;
    let effective_rent = gross_rent * (1.0 - input.vacancy / 100.0);
    let management_cost = effective_rent * input.management_fee / 100.0;
    let noi = effective_rent - management_cost;
    let purchase_costs = price * input.purchase_cost / 100.0;
    let total_investment = price + purchase_costs;
    let cap_rate = noi / price * 100.0;
    let annual_roi = if total_investment > 0.0 {
        noi / total_investment * 100.0
    } else {
        0.0
    };

    let growth = 1.0 + input.appreciation / 100.0;
    let projection: Vec<ProjectionYear> = (0..=horizon_years)
        .map(|year| {
            #[allow(clippy::cast_possible_wrap)] // horizon is validated far below i32::MAX
            let property_value = price * growth.powi(year as i32);
            let cumulative_rent = noi * f64::from(year);
            ProjectionYear {
                year,
                property_value,
                cumulative_rent,
                total_asset: property_value + cumulative_rent,
                // Same as total_asset - total_investment, ordered so year 0
                // lands exactly on -purchase_costs.
                gain: (property_value - price) + cumulative_rent - purchase_costs,
            }
        })
        .collect();

    let break_even_year = projection.iter().find(|p| p.gain >= 0.0).map(|p| p.year);
    let payback_years = (noi > 0.0).then(|| total_investment / noi);

    tracing::debug!(noi, cap_rate, annual_roi, ?break_even_year, "roi computed");

    Ok(RoiResult {
        input: *input,
        gross_rent,
        effective_rent,
        management_cost,
        noi,
        purchase_costs,
        total_investment,
        cap_rate,
        annual_roi,
        monthly_cash_flow: noi / 12.0,
        payback_years,
        break_even_year,
        projection,
    })
}

#[cfg(test)]
#[path = "roi_tests.rs"]
mod tests;
