//! Pure calculators. Each takes a typed input plus its reference tables and
//! returns a result struct; none of them touch I/O.

pub mod cost;
pub mod roi;
pub mod tax;
pub mod visa;

pub use cost::{CostComparison, CostInput, CostTables, Tier};
pub use roi::{RoiConfig, RoiInput, RoiPreset, RoiResult};
pub use tax::{TaxComparison, TaxInput, TaxTables};
pub use visa::{ApplicantProfile, VisaAssessment, VisaTables};
