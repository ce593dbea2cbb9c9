//! Tests for number formatting.

use super::*;

mod format_number_tests {
    use super::*;

    #[test]
    fn small_numbers_have_no_separator() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_number(1_000.0), "1,000");
        assert_eq!(format_number(12_345.0), "12,345");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
    }

    #[test]
    fn rounds_to_nearest_integer() {
        assert_eq!(format_number(299.4875), "299");
        assert_eq!(format_number(1_999.5), "2,000");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_number(-350.0), "-350");
        assert_eq!(format_number(-1_500.0), "-1,500");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
    }
}

mod format_decimal_tests {
    use super::*;

    #[test]
    fn keeps_requested_decimals() {
        assert_eq!(format_decimal(1.5, 1), "1.5");
        assert_eq!(format_decimal(31.0, 1), "31.0");
        assert_eq!(format_decimal(1_234.56, 1), "1,234.6");
    }

    #[test]
    fn zero_digits_matches_format_number() {
        assert_eq!(format_decimal(1_999.5, 0), format_number(1_999.5));
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_decimal(-1_500.25, 2), "-1,500.25");
        assert_eq!(format_decimal(-0.04, 1), "0.0");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_decimal(f64::NAN, 1), "0");
    }

    #[test]
    fn manen_variant_appends_suffix() {
        assert_eq!(format_manen_decimal(37.5, 1), "37.5万円");
    }
}

mod format_manen_tests {
    use super::*;

    #[test]
    fn appends_unit_suffix() {
        assert_eq!(format_manen(5_350.0), "5,350万円");
        assert_eq!(format_manen(333.508), "334万円");
    }

    #[test]
    fn nan_renders_zero_manen() {
        assert_eq!(format_manen(f64::NAN), "0万円");
    }
}

mod format_percent_tests {
    use super::*;

    #[test]
    fn one_decimal() {
        assert_eq!(format_percent(5.597_9, 1), "5.6%");
    }

    #[test]
    fn custom_digits() {
        assert_eq!(format_percent(5.989_75, 2), "5.99%");
        assert_eq!(format_percent(12.0, 0), "12%");
    }

    #[test]
    fn nan_is_safe() {
        assert_eq!(format_percent(f64::NAN, 1), "0.0%");
    }
}

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text() {
        assert_eq!(html_escape("Tokyo 万円"), "Tokyo 万円");
    }
}
