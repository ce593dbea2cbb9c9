//! Tax comparison: a progressive reference jurisdiction against flat-rate
//! comparators that only tax business income.
//!
//! All amounts are in 万円 per year.

use serde::{Deserialize, Serialize};

use crate::error::{RelocSimError, Result};
use crate::input::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    #[default]
    Salary,
    Business,
}

impl EmploymentType {
    /// Lenient parse used at the form boundary; anything unknown is `Salary`.
    #[must_use]
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "business" => Self::Business,
            _ => Self::Salary,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Business => "business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyStatus {
    #[default]
    Single,
    Married,
    Family,
}

impl FamilyStatus {
    /// Lenient parse used at the form boundary; anything unknown is `Single`.
    #[must_use]
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "married" => Self::Married,
            "family" => Self::Family,
            _ => Self::Single,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Family => "family",
        }
    }
}

/// One row of the progressive bracket table.
///
/// `tax = taxable * rate - deduction` for incomes up to `up_to` (inclusive).
/// The last bracket has no `up_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<f64>,
    pub rate: f64,
    #[serde(default)]
    pub deduction: f64,
}

/// One band of the salary-income deduction: `rate * income + offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryDeductionBand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<f64>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyDeductions {
    pub single: f64,
    pub married: f64,
    pub family: f64,
}

impl Default for FamilyDeductions {
    fn default() -> Self {
        Self {
            single: 0.0,
            married: 38.0,
            family: 38.0,
        }
    }
}

impl FamilyDeductions {
    #[must_use]
    pub const fn for_status(&self, status: FamilyStatus) -> f64 {
        match status {
            FamilyStatus::Single => self.single,
            FamilyStatus::Married => self.married,
            FamilyStatus::Family => self.family,
        }
    }
}

/// A jurisdiction with no personal income tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparator {
    pub id: String,
    pub name: String,
    /// Flat rate applied to business income
    pub corporate_rate: f64,
    /// Business income below this amount is exempt; `None` taxes the full income
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt_threshold: Option<f64>,
}

/// Reference tables for one tax year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxTables {
    pub tax_year: u16,
    pub effective_date: String,
    pub reference_id: String,
    pub reference_name: String,
    pub basic_deduction: f64,
    pub surtax_rate: f64,
    pub resident_rate: f64,
    /// Flat approximation of social insurance on gross income, uncapped
    pub social_rate: f64,
    pub family_deduction: FamilyDeductions,
    pub salary_deduction: Vec<SalaryDeductionBand>,
    pub brackets: Vec<TaxBracket>,
    pub comparators: Vec<Comparator>,
}

impl Default for TaxTables {
    fn default() -> Self {
        let band = |up_to: Option<f64>, rate: f64, offset: f64| SalaryDeductionBand {
            up_to,
            rate,
            offset,
        };
        let bracket = |up_to: Option<f64>, rate: f64, deduction: f64| TaxBracket {
            up_to,
            rate,
            deduction,
        };

        Self {
            tax_year: 2024,
            effective_date: "2024-01-01".to_string(),
            reference_id: "japan".to_string(),
            reference_name: "Japan".to_string(),
            basic_deduction: 48.0,
            surtax_rate: 0.021,
            resident_rate: 0.10,
            social_rate: 0.15,
            family_deduction: FamilyDeductions::default(),
            salary_deduction: vec![
                band(Some(162.5), 0.0, 55.0),
                band(Some(180.0), 0.4, -10.0),
                band(Some(360.0), 0.3, 8.0),
                band(Some(660.0), 0.2, 44.0),
                band(Some(1_000.0), 0.1, 110.0),
                band(None, 0.0, 210.0),
            ],
            brackets: vec![
                bracket(Some(195.0), 0.05, 0.0),
                bracket(Some(330.0), 0.10, 9.75),
                bracket(Some(695.0), 0.20, 42.75),
                bracket(Some(900.0), 0.23, 63.6),
                bracket(Some(1_800.0), 0.33, 153.6),
                bracket(Some(4_000.0), 0.40, 279.6),
                bracket(None, 0.45, 479.6),
            ],
            comparators: vec![
                Comparator {
                    id: "uae".to_string(),
                    name: "UAE".to_string(),
                    corporate_rate: 0.09,
                    exempt_threshold: Some(1_500.0),
                },
                Comparator {
                    id: "saudi".to_string(),
                    name: "Saudi Arabia".to_string(),
                    corporate_rate: 0.20,
                    exempt_threshold: None,
                },
            ],
        }
    }
}

pub const FIELD_INCOME: &str = "income";
pub const FIELD_EMPLOYMENT: &str = "employment";
pub const FIELD_FAMILY: &str = "family";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxInput {
    pub income: f64,
    pub employment: EmploymentType,
    pub family: FamilyStatus,
}

impl TaxInput {
    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        Self {
            income: form.number(FIELD_INCOME),
            employment: EmploymentType::from_form(form.text(FIELD_EMPLOYMENT)),
            family: FamilyStatus::from_form(form.text(FIELD_FAMILY)),
        }
    }
}

/// Line items for one jurisdiction; every item is `>= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TaxBreakdown {
    pub income_tax: f64,
    pub surtax: f64,
    pub resident: f64,
    pub social: f64,
    pub corp_tax: f64,
    pub total: f64,
}

impl TaxBreakdown {
    fn from_items(income_tax: f64, surtax: f64, resident: f64, social: f64, corp_tax: f64) -> Self {
        let income_tax = income_tax.max(0.0);
        let surtax = surtax.max(0.0);
        let resident = resident.max(0.0);
        let social = social.max(0.0);
        let corp_tax = corp_tax.max(0.0);
        Self {
            income_tax,
            surtax,
            resident,
            social,
            corp_tax,
            total: income_tax + surtax + resident + social + corp_tax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JurisdictionResult {
    pub id: String,
    pub name: String,
    pub breakdown: TaxBreakdown,
    pub net_income: f64,
    /// Total burden as a percentage of gross income
    pub effective_rate: f64,
    /// `reference.total - self.total`; `None` for the reference itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxComparison {
    pub input: TaxInput,
    pub salary_deduction: f64,
    pub family_deduction: f64,
    pub taxable_income: f64,
    pub reference: JurisdictionResult,
    pub comparators: Vec<JurisdictionResult>,
    /// Index into `comparators` of the largest saving
    pub best: Option<usize>,
}

impl TaxComparison {
    #[must_use]
    pub fn best_comparator(&self) -> Option<&JurisdictionResult> {
        self.best.and_then(|i| self.comparators.get(i))
    }
}

/// Piecewise salary-income deduction; incomes past the last limit use the last band.
#[must_use]
pub fn salary_income_deduction(income: f64, bands: &[SalaryDeductionBand]) -> f64 {
    bands
        .iter()
        .find(|b| b.up_to.is_none_or(|limit| income <= limit))
        .or_else(|| bands.last())
        .map_or(0.0, |b| b.rate.mul_add(income, b.offset))
        .max(0.0)
}

/// Find the bracket that applies to `taxable`: the first whose limit is `>= taxable`.
#[must_use]
pub fn find_bracket(taxable: f64, brackets: &[TaxBracket]) -> Option<&TaxBracket> {
    brackets
        .iter()
        .find(|b| b.up_to.is_none_or(|limit| taxable <= limit))
        .or_else(|| brackets.last())
}

/// Raw bracket tax `taxable * rate - deduction`. May be negative just above zero;
/// callers clamp.
#[must_use]
pub fn bracket_tax(taxable: f64, brackets: &[TaxBracket]) -> f64 {
    find_bracket(taxable, brackets).map_or(0.0, |b| taxable.mul_add(b.rate, -b.deduction))
}

fn effective_rate(total: f64, income: f64) -> f64 {
    if income > 0.0 { total / income * 100.0 } else { 0.0 }
}

fn comparator_result(
    comparator: &Comparator,
    input: &TaxInput,
    reference_total: f64,
) -> JurisdictionResult {
    let corp_tax = match input.employment {
        EmploymentType::Business => {
            let taxable = (input.income - comparator.exempt_threshold.unwrap_or(0.0)).max(0.0);
            taxable * comparator.corporate_rate
        }
        EmploymentType::Salary => 0.0,
    };
    let breakdown = TaxBreakdown::from_items(0.0, 0.0, 0.0, 0.0, corp_tax);

    JurisdictionResult {
        id: comparator.id.clone(),
        name: comparator.name.clone(),
        net_income: input.income - breakdown.total,
        effective_rate: effective_rate(breakdown.total, input.income),
        savings: Some(reference_total - breakdown.total),
        breakdown,
    }
}

/// Compare the reference jurisdiction against every comparator.
///
/// # Errors
/// Returns `NonPositiveInput` when `income <= 0`; nothing is computed.
pub fn compare(input: &TaxInput, tables: &TaxTables) -> Result<TaxComparison> {
    if input.income.is_nan() || input.income <= 0.0 {
        return Err(RelocSimError::NonPositiveInput {
            field: FIELD_INCOME,
            value: input.income,
        });
    }

    let salary_deduction = match input.employment {
        EmploymentType::Salary => salary_income_deduction(input.income, &tables.salary_deduction),
        EmploymentType::Business => 0.0,
    };
    let family_deduction = tables.family_deduction.for_status(input.family);
    let taxable_income =
        (input.income - salary_deduction - tables.basic_deduction - family_deduction).max(0.0);

    let income_tax = bracket_tax(taxable_income, &tables.brackets).max(0.0);
    let breakdown = TaxBreakdown::from_items(
        income_tax,
        income_tax * tables.surtax_rate,
        taxable_income * tables.resident_rate,
        input.income * tables.social_rate,
        0.0,
    );
    tracing::debug!(
        taxable_income,
        salary_deduction,
        income_tax,
        total = breakdown.total,
        "reference jurisdiction computed"
    );

    let reference = JurisdictionResult {
        id: tables.reference_id.clone(),
        name: tables.reference_name.clone(),
        net_income: input.income - breakdown.total,
        effective_rate: effective_rate(breakdown.total, input.income),
        savings: None,
        breakdown,
    };

    let comparators: Vec<_> = tables
        .comparators
        .iter()
        .map(|c| comparator_result(c, input, reference.breakdown.total))
        .collect();

    // Strictly greater keeps the earlier comparator on ties.
    let mut best: Option<(usize, f64)> = None;
    for (i, result) in comparators.iter().enumerate() {
        let savings = result.savings.unwrap_or(0.0);
        if best.is_none_or(|(_, top)| savings > top) {
            best = Some((i, savings));
        }
    }

    Ok(TaxComparison {
        input: *input,
        salary_deduction,
        family_deduction,
        taxable_income,
        reference,
        comparators,
        best: best.map(|(i, _)| i),
    })
}

#[cfg(test)]
#[path = "tax_tests.rs"]
mod tests;
