//! Tests for the tax comparison calculator.

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn salary_single(income: f64) -> TaxInput {
    TaxInput {
        income,
        employment: EmploymentType::Salary,
        family: FamilyStatus::Single,
    }
}

mod salary_deduction_tests {
    use super::*;

    #[test]
    fn flat_band_for_low_income() {
        let tables = TaxTables::default();
        assert!(close(salary_income_deduction(100.0, &tables.salary_deduction), 55.0));
    }

    #[test]
    fn rate_band_for_1000() {
        let tables = TaxTables::default();
        assert!(close(salary_income_deduction(1_000.0, &tables.salary_deduction), 210.0));
    }

    #[test]
    fn saturates_for_high_income() {
        let tables = TaxTables::default();
        assert!(close(salary_income_deduction(5_000.0, &tables.salary_deduction), 210.0));
    }

    #[test]
    fn bands_are_continuous() {
        let tables = TaxTables::default();
        for band in &tables.salary_deduction {
            let Some(limit) = band.up_to else { continue };
            let below = salary_income_deduction(limit, &tables.salary_deduction);
            let above = salary_income_deduction(limit + 1e-9, &tables.salary_deduction);
            assert!((below - above).abs() < 1e-6, "discontinuity at {limit}");
        }
    }

    #[test]
    fn empty_bands_deduct_nothing() {
        assert!(close(salary_income_deduction(1_000.0, &[]), 0.0));
    }
}

mod bracket_tests {
    use super::*;

    #[test]
    fn brackets_are_continuous_at_every_boundary() {
        let tables = TaxTables::default();
        for pair in tables.brackets.windows(2) {
            let limit = pair[0].up_to.unwrap();
            let lower = limit.mul_add(pair[0].rate, -pair[0].deduction);
            let upper = limit.mul_add(pair[1].rate, -pair[1].deduction);
            assert!((lower - upper).abs() < 1e-9, "discontinuity at {limit}");
        }
    }

    #[test]
    fn limit_is_inclusive() {
        let tables = TaxTables::default();
        let bracket = find_bracket(900.0, &tables.brackets).unwrap();
        assert!(close(bracket.rate, 0.23));
    }

    #[test]
    fn just_above_limit_moves_up() {
        let tables = TaxTables::default();
        let bracket = find_bracket(900.01, &tables.brackets).unwrap();
        assert!(close(bracket.rate, 0.33));
    }

    #[test]
    fn top_bracket_is_unbounded() {
        let tables = TaxTables::default();
        let bracket = find_bracket(100_000.0, &tables.brackets).unwrap();
        assert!(close(bracket.rate, 0.45));
    }

    #[test]
    fn negative_raw_tax_is_possible() {
        let brackets = vec![TaxBracket {
            up_to: None,
            rate: 0.1,
            deduction: 5.0,
        }];
        assert!(bracket_tax(10.0, &brackets) < 0.0);
    }
}

mod compare_tests {
    use super::*;

    #[test]
    fn worked_example_income_1000_salary_single() {
        let result = compare(&salary_single(1_000.0), &TaxTables::default()).unwrap();

        assert!(close(result.salary_deduction, 210.0));
        assert!(close(result.taxable_income, 742.0));
        assert!(close(result.reference.breakdown.income_tax, 107.06));
        assert!(close(result.reference.breakdown.surtax, 107.06 * 0.021));
        assert!(close(result.reference.breakdown.resident, 74.2));
        assert!(close(result.reference.breakdown.social, 150.0));
        assert!(close(
            result.reference.breakdown.total,
            107.06 + 107.06 * 0.021 + 74.2 + 150.0
        ));
    }

    #[test]
    fn salary_comparators_pay_nothing() {
        let result = compare(&salary_single(1_000.0), &TaxTables::default()).unwrap();

        for comparator in &result.comparators {
            assert!(close(comparator.breakdown.total, 0.0));
            assert!(close(comparator.net_income, 1_000.0));
            assert!(close(
                comparator.savings.unwrap(),
                result.reference.breakdown.total
            ));
        }
    }

    #[test]
    fn tie_prefers_first_comparator() {
        let result = compare(&salary_single(1_000.0), &TaxTables::default()).unwrap();
        assert_eq!(result.best, Some(0));
        assert_eq!(result.best_comparator().unwrap().id, "uae");
    }

    #[test]
    fn business_income_uses_exempt_threshold() {
        let input = TaxInput {
            income: 2_000.0,
            employment: EmploymentType::Business,
            family: FamilyStatus::Single,
        };
        let result = compare(&input, &TaxTables::default()).unwrap();

        assert!(close(result.salary_deduction, 0.0));
        assert!(close(result.comparators[0].breakdown.corp_tax, 45.0));
        assert!(close(result.comparators[1].breakdown.corp_tax, 400.0));
        assert_eq!(result.best, Some(0));
    }

    #[test]
    fn business_income_below_threshold_is_exempt() {
        let input = TaxInput {
            income: 1_000.0,
            employment: EmploymentType::Business,
            family: FamilyStatus::Single,
        };
        let result = compare(&input, &TaxTables::default()).unwrap();
        assert!(close(result.comparators[0].breakdown.corp_tax, 0.0));
    }

    #[test]
    fn larger_saving_wins_regardless_of_order() {
        let mut tables = TaxTables::default();
        tables.comparators.reverse();
        let input = TaxInput {
            income: 2_000.0,
            employment: EmploymentType::Business,
            family: FamilyStatus::Single,
        };
        let result = compare(&input, &tables).unwrap();
        assert_eq!(result.best_comparator().unwrap().id, "uae");
    }

    #[test]
    fn married_gets_family_deduction() {
        let input = TaxInput {
            family: FamilyStatus::Married,
            ..salary_single(1_000.0)
        };
        let result = compare(&input, &TaxTables::default()).unwrap();
        assert!(close(result.family_deduction, 38.0));
        assert!(close(result.taxable_income, 704.0));
    }

    #[test]
    fn low_income_clamps_taxable_to_zero() {
        let result = compare(&salary_single(90.0), &TaxTables::default()).unwrap();

        assert!(close(result.taxable_income, 0.0));
        assert!(close(result.reference.breakdown.income_tax, 0.0));
        assert!(close(result.reference.breakdown.resident, 0.0));
        assert!(close(result.reference.breakdown.social, 13.5));
    }

    #[test]
    fn negative_bracket_result_is_clamped() {
        let mut tables = TaxTables::default();
        tables.brackets = vec![TaxBracket {
            up_to: None,
            rate: 0.05,
            deduction: 10.0,
        }];
        let result = compare(&salary_single(200.0), &tables).unwrap();

        let b = result.reference.breakdown;
        assert!(b.income_tax >= 0.0);
        assert!(b.surtax >= 0.0);
        assert!(close(b.total, b.income_tax + b.surtax + b.resident + b.social));
    }

    #[test]
    fn non_positive_income_is_skipped() {
        let err = compare(&salary_single(0.0), &TaxTables::default()).unwrap_err();
        assert!(matches!(
            err,
            RelocSimError::NonPositiveInput { field: "income", .. }
        ));
        assert!(compare(&salary_single(-5.0), &TaxTables::default()).is_err());
        assert!(compare(&salary_single(f64::NAN), &TaxTables::default()).is_err());
    }

    #[test]
    fn effective_rate_is_percent_of_gross() {
        let result = compare(&salary_single(1_000.0), &TaxTables::default()).unwrap();
        assert!(close(
            result.reference.effective_rate,
            result.reference.breakdown.total / 10.0
        ));
    }
}

mod form_tests {
    use super::*;

    #[test]
    fn unknown_enum_values_fall_back() {
        assert_eq!(EmploymentType::from_form("freelance"), EmploymentType::Salary);
        assert_eq!(EmploymentType::from_form(" Business "), EmploymentType::Business);
        assert_eq!(FamilyStatus::from_form(""), FamilyStatus::Single);
        assert_eq!(FamilyStatus::from_form("family"), FamilyStatus::Family);
    }

    #[test]
    fn reads_fields_from_form() {
        let form = FormState::from_pairs(["income=1200", "employment=business", "family=married"])
            .unwrap();
        let input = TaxInput::from_form(&form);

        assert!(close(input.income, 1_200.0));
        assert_eq!(input.employment, EmploymentType::Business);
        assert_eq!(input.family, FamilyStatus::Married);
    }
}
