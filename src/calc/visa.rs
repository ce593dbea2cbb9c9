//! Residency-visa eligibility: each program is a list of criteria and a
//! minimum number that must pass.

use serde::{Deserialize, Serialize};

use crate::input::FormState;

pub const FIELD_ASSETS: &str = "assets";
pub const FIELD_INCOME: &str = "income";
pub const FIELD_INVESTMENT: &str = "investment";
pub const FIELD_JOB: &str = "job";
pub const FIELD_EDUCATION: &str = "education";

/// Amounts are in 万円; `income` is annual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub assets: f64,
    pub income: f64,
    pub investment: f64,
    pub job: String,
    pub education: String,
}

impl ApplicantProfile {
    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        Self {
            assets: form.number(FIELD_ASSETS),
            income: form.number(FIELD_INCOME),
            investment: form.number(FIELD_INVESTMENT),
            job: form.text(FIELD_JOB).trim().to_ascii_lowercase(),
            education: form.text(FIELD_EDUCATION).trim().to_ascii_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    Assets,
    Income,
    Investment,
}

impl AmountField {
    #[must_use]
    pub const fn read(self, profile: &ApplicantProfile) -> f64 {
        match self {
            Self::Assets => profile.assets,
            Self::Income => profile.income,
            Self::Investment => profile.investment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceField {
    Job,
    Education,
}

impl ChoiceField {
    #[must_use]
    pub fn read(self, profile: &ApplicantProfile) -> &str {
        match self {
            Self::Job => &profile.job,
            Self::Education => &profile.education,
        }
    }
}

/// A single eligibility check against the applicant profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Requirements the profile cannot express (age, clean record); always passes
    Always,
    AtLeast { field: AmountField, min: f64 },
    OneOf { field: ChoiceField, values: Vec<String> },
}

impl Predicate {
    #[must_use]
    pub fn evaluate(&self, profile: &ApplicantProfile) -> bool {
        match self {
            Self::Always => true,
            Self::AtLeast { field, min } => field.read(profile) >= *min,
            Self::OneOf { field, values } => {
                let actual = field.read(profile);
                values.iter().any(|v| v.eq_ignore_ascii_case(actual))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub label: String,
    pub rule: Predicate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaProgram {
    pub id: String,
    pub name: String,
    pub country: String,
    pub duration: String,
    pub criteria: Vec<Criterion>,
    pub min_pass: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisaTables {
    pub programs: Vec<VisaProgram>,
}

fn criterion(label: &str, rule: Predicate) -> Criterion {
    Criterion {
        label: label.to_string(),
        rule,
    }
}

fn at_least(field: AmountField, min: f64) -> Predicate {
    Predicate::AtLeast { field, min }
}

fn one_of(field: ChoiceField, values: &[&str]) -> Predicate {
    Predicate::OneOf {
        field,
        values: values.iter().map(|v| (*v).to_string()).collect(),
    }
}

fn program(
    id: &str,
    name: &str,
    country: &str,
    duration: &str,
    criteria: Vec<Criterion>,
    min_pass: usize,
) -> VisaProgram {
    VisaProgram {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        duration: duration.to_string(),
        criteria,
        min_pass,
    }
}

impl Default for VisaTables {
    fn default() -> Self {
        use AmountField::{Assets, Income, Investment};
        use ChoiceField::{Education, Job};

        Self {
            programs: vec![
                program(
                    "uae-golden-investor",
                    "UAE Golden Visa (Investor)",
                    "UAE",
                    "10 years",
                    vec![
                        criterion("Property investment of 8,000万円 or more", at_least(Investment, 8_000.0)),
                        criterion("Total assets of 10,000万円 or more", at_least(Assets, 10_000.0)),
                        criterion("Valid passport", Predicate::Always),
                        criterion("Health insurance coverage", Predicate::Always),
                    ],
                    3,
                ),
                program(
                    "uae-golden-professional",
                    "UAE Golden Visa (Skilled Professional)",
                    "UAE",
                    "10 years",
                    vec![
                        criterion(
                            "Qualifying profession",
                            one_of(Job, &["executive", "engineer", "doctor", "scientist"]),
                        ),
                        criterion("Bachelor's degree or higher", one_of(Education, &["bachelor", "master", "phd"])),
                        criterion("Annual income of 1,440万円 or more", at_least(Income, 1_440.0)),
                        criterion("Valid employment contract", Predicate::Always),
                    ],
                    4,
                ),
                program(
                    "uae-golden-entrepreneur",
                    "UAE Golden Visa (Entrepreneur)",
                    "UAE",
                    "5 years",
                    vec![
                        criterion("Business owner or founder", one_of(Job, &["entrepreneur"])),
                        criterion("Business investment of 2,000万円 or more", at_least(Investment, 2_000.0)),
                        criterion("Total assets of 2,000万円 or more", at_least(Assets, 2_000.0)),
                        criterion("Approved business plan", Predicate::Always),
                    ],
                    3,
                ),
                program(
                    "saudi-premium-permanent",
                    "Saudi Premium Residency (Permanent)",
                    "Saudi Arabia",
                    "Permanent",
                    vec![
                        criterion("Total assets of 3,200万円 or more", at_least(Assets, 3_200.0)),
                        criterion("Annual income of 800万円 or more", at_least(Income, 800.0)),
                        criterion("Valid passport", Predicate::Always),
                        criterion("Clean criminal record", Predicate::Always),
                    ],
                    3,
                ),
                program(
                    "saudi-premium-renewable",
                    "Saudi Premium Residency (Renewable)",
                    "Saudi Arabia",
                    "1 year, renewable",
                    vec![
                        criterion("Total assets of 400万円 or more", at_least(Assets, 400.0)),
                        criterion("Annual income of 400万円 or more", at_least(Income, 400.0)),
                        criterion("Valid passport", Predicate::Always),
                    ],
                    2,
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionStatus {
    pub label: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramResult {
    pub id: String,
    pub name: String,
    pub country: String,
    pub duration: String,
    pub criteria: Vec<CriterionStatus>,
    pub pass_count: usize,
    pub min_pass: usize,
    pub eligible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisaAssessment {
    pub profile: ApplicantProfile,
    pub programs: Vec<ProgramResult>,
}

impl VisaAssessment {
    pub fn eligible(&self) -> impl Iterator<Item = &ProgramResult> {
        self.programs.iter().filter(|p| p.eligible)
    }

    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }
}

#[must_use]
pub fn evaluate_program(program: &VisaProgram, profile: &ApplicantProfile) -> ProgramResult {
    let criteria: Vec<CriterionStatus> = program
        .criteria
        .iter()
        .map(|c| CriterionStatus {
            label: c.label.clone(),
            passed: c.rule.evaluate(profile),
        })
        .collect();
    let pass_count = criteria.iter().filter(|c| c.passed).count();

    ProgramResult {
        id: program.id.clone(),
        name: program.name.clone(),
        country: program.country.clone(),
        duration: program.duration.clone(),
        criteria,
        pass_count,
        min_pass: program.min_pass,
        eligible: pass_count >= program.min_pass,
    }
}

/// Evaluate every program in declaration order.
#[must_use]
pub fn assess(profile: &ApplicantProfile, tables: &VisaTables) -> VisaAssessment {
    let programs: Vec<ProgramResult> = tables
        .programs
        .iter()
        .map(|p| evaluate_program(p, profile))
        .collect();

    tracing::debug!(
        programs = programs.len(),
        eligible = programs.iter().filter(|p| p.eligible).count(),
        "visa assessment computed"
    );

    VisaAssessment {
        profile: profile.clone(),
        programs,
    }
}

#[cfg(test)]
#[path = "visa_tests.rs"]
mod tests;
