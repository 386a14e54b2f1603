use crate::compiler::*;
use crate::error::PatternError;
use crate::parser::*;
use crate::types::*;

#[test]
fn test_simple_positive() {
    let result = parse_number_pattern("0.00").unwrap();
    assert_eq!(
        result.positive.core,
        vec![
            PatternToken::Digit(DigitKind::Required('0')),
            PatternToken::DecimalPoint,
            PatternToken::Digit(DigitKind::Required('0')),
            PatternToken::Digit(DigitKind::Required('0')),
        ]
    );
    assert!(result.negative.is_none());
    assert!(result.zero.is_none());
    assert!(result.text.is_none());
}

#[test]
fn test_all_sections() {
    let result = parse_number_pattern("#,##0.###;-#,##0.###;0;@").unwrap();
    assert_eq!(result.positive.source, "#,##0.###");
    let negative = result.negative.unwrap();
    assert_eq!(negative.prefix, vec![AffixPart::Text("-".to_string())]);
    assert_eq!(render_tokens(&negative.core), "#,##0.###");
    assert_eq!(result.zero.unwrap().source, "0");
    assert_eq!(result.text.unwrap().parts, vec![TextPart::Placeholder]);
}

#[test]
fn test_semicolon_inside_quotes_does_not_split() {
    let result = parse_number_pattern("0' ; '").unwrap();
    assert!(result.negative.is_none());
    assert_eq!(result.positive.suffix, vec![AffixPart::Text(" ; ".to_string())]);
}

#[test]
fn test_empty_pattern_uses_default() {
    let result = parse_number_pattern("").unwrap();
    assert_eq!(result.source, DEFAULT_PATTERN);
}

#[test]
fn test_unterminated_quote() {
    let err = parse_number_pattern("#0 'abc").unwrap_err();
    assert_eq!(
        err,
        PatternError::UnterminatedQuote {
            pattern: "#0 'abc".to_string(),
            position: 3,
        }
    );
}

#[test]
fn test_too_many_subpatterns() {
    let err = parse_number_pattern("0;-0;0;@;x").unwrap_err();
    assert!(matches!(err, PatternError::TooManySubpatterns { count: 5, .. }));
}

#[test]
fn test_compile_grouped_decimal() {
    let spec = compile("#,##0.##").unwrap();
    assert!(spec.grouping);
    assert!(!spec.exponent);
    assert!(!spec.significance);
    assert_eq!(spec.int_min, 1);
    assert_eq!(spec.int_max, None);
    assert_eq!(spec.frac_min, 0);
    assert_eq!(spec.frac_max, 2);
    assert_eq!(spec.group_primary, 3);
    assert_eq!(spec.group_secondary, 3);
    assert_eq!(spec.sig_min, 1);
    assert_eq!(spec.sig_max, None);
    assert_eq!(spec.scale, 1);
    assert_eq!(spec.pad, '0');
    assert_eq!(spec.pattern, "#,##0.##");
}

#[test]
fn test_compile_secondary_grouping() {
    let spec = compile("#,##,##0").unwrap();
    assert_eq!(spec.group_primary, 3);
    assert_eq!(spec.group_secondary, 2);

    let plain = compile("0000").unwrap();
    assert!(!plain.grouping);
    assert_eq!(plain.group_primary, 0);
    assert_eq!(plain.int_min, 4);
}

#[test]
fn test_compile_exponent() {
    let spec = compile("0.000E+00").unwrap();
    assert!(spec.exponent);
    assert!(spec.exp_plus);
    assert_eq!(spec.exp_min, 2);
    assert_eq!(spec.int_min, 1);
    assert_eq!(spec.int_max, Some(1));
    assert_eq!(spec.frac_min, 3);
    assert_eq!(spec.frac_max, 3);

    let engineering = compile("##0.##E0").unwrap();
    assert!(!engineering.exp_plus);
    assert_eq!(engineering.exp_min, 1);
    assert_eq!(engineering.int_min, 1);
    assert_eq!(engineering.int_max, Some(3));
}

#[test]
fn test_compile_significant_digits() {
    let spec = compile("@@##").unwrap();
    assert!(spec.significance);
    assert_eq!(spec.sig_min, 2);
    assert_eq!(spec.sig_max, Some(4));
    assert_eq!(spec.int_max, Some(4));

    let scientific = compile("@@#E0").unwrap();
    assert_eq!(scientific.int_min, 1);
    assert_eq!(scientific.int_max, Some(1));
    assert_eq!(scientific.frac_min, 2);
    assert_eq!(scientific.frac_max, 3);
}

#[test]
fn test_compile_empty_integer_run() {
    let spec = compile(".00").unwrap();
    assert_eq!(spec.int_min, 0);
    assert_eq!(spec.frac_min, 2);
}

#[test]
fn test_default_negative_branch() {
    for pattern in ["#,##0.##", "'$'#,##0.00", "#0 'kr'", "0.0E0", "@@@"] {
        let spec = compile(pattern).unwrap();
        assert_eq!(spec.prefix[1], format!("-{}", spec.prefix[0]), "{pattern}");
        assert_eq!(spec.suffix[1], spec.suffix[0], "{pattern}");
    }
}

#[test]
fn test_explicit_negative_branch() {
    let spec = compile("'$'#,##0.00;('$'#,##0.00)").unwrap();
    assert_eq!(spec.prefix, ["$".to_string(), "($".to_string()]);
    assert_eq!(spec.suffix, [String::new(), ")".to_string()]);
}

#[test]
fn test_literal_negative_subpattern_is_ignored() {
    let spec = compile("0;'neg'").unwrap();
    assert_eq!(spec.prefix[1], "-");
}

#[test]
fn test_percent_and_permille_scale() {
    assert_eq!(compile("#0%").unwrap().scale, 100);
    assert_eq!(compile("#0'%'").unwrap().scale, 1);
    assert_eq!(compile("#0‰").unwrap().scale, 1000);
    assert_eq!(compile("0;-0%").unwrap().scale, 100);
}

#[test]
fn test_zero_and_text_subpatterns_compile() {
    let spec = compile("#,##0.###;-#,##0.###;'nil';'<'@'>'").unwrap();
    let zero = spec.zero.as_deref().unwrap();
    assert!(zero.literal);
    assert_eq!(zero.prefix[0], "nil");
    assert_eq!(spec.format_text("abc"), "<abc>");
}

#[test]
fn test_malformed_integer_pattern() {
    let err = compile("#0#").unwrap_err();
    assert_eq!(
        err,
        PatternError::MalformedIntegerPattern {
            fragment: "#0#".to_string()
        }
    );
}

#[test]
fn test_malformed_fraction_pattern() {
    let err = compile("0.#0").unwrap_err();
    assert_eq!(
        err,
        PatternError::MalformedFractionPattern {
            fragment: "#0".to_string()
        }
    );
}

#[test]
fn test_exponent_with_grouping() {
    let err = compile("#,##0E0").unwrap_err();
    assert!(matches!(err, PatternError::ExponentWithGrouping { .. }));
}

#[test]
fn test_significance_with_decimal_point() {
    let err = compile("@@.#").unwrap_err();
    assert!(matches!(err, PatternError::SignificanceWithDecimalPoint { .. }));
}

#[test]
fn test_significance_with_literal_zero() {
    let err = compile("@@0").unwrap_err();
    assert!(matches!(err, PatternError::SignificanceWithLiteralZero { .. }));
}

#[test]
fn test_rules_are_checked_in_order() {
    // Both the integer rule and the significance rule are broken
    let err = compile("@0#").unwrap_err();
    assert!(matches!(err, PatternError::MalformedIntegerPattern { .. }));
}

#[test]
fn test_invalid_negative_core_is_rejected() {
    let err = compile("0;-#,##0E0").unwrap_err();
    assert!(matches!(err, PatternError::ExponentWithGrouping { .. }));

    let err = compile("0;#0#").unwrap_err();
    assert!(matches!(err, PatternError::MalformedIntegerPattern { .. }));
}
