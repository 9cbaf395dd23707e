use super::*;

/// Tests setting a price from well-formed decimal input.
///
/// Verifies that "9.99" is parsed and written to the matching role only.
///
/// Expected: Ok with the target role priced at 9.99 and the other role unchanged
#[test]
fn sets_price_from_decimal_input() {
    let mut roles = vec![role("r1", 0.0, true), role("r2", 5.0, false)];

    let result = set_role_price(&mut roles, "r1", "9.99");

    assert!(result.is_ok());
    assert_eq!(roles[0].price, 9.99);
    assert_eq!(roles[1], role("r2", 5.0, false));
}

/// Tests rejecting non-numeric price input.
///
/// Verifies that "abc" leaves the role exactly as it was and reports the
/// offending input.
///
/// Expected: Err(NotANumber) with the role unchanged
#[test]
fn leaves_role_unchanged_for_non_numeric_input() {
    let mut roles = vec![role("r1", 3.5, true)];

    let result = set_role_price(&mut roles, "r1", "abc");

    assert_eq!(result, Err(PriceError::NotANumber("abc".to_string())));
    assert_eq!(roles[0], role("r1", 3.5, true));
}

/// Tests rejecting empty and whitespace-only input.
///
/// Expected: Err(Empty) with the role unchanged
#[test]
fn rejects_empty_input() {
    let mut roles = vec![role("r1", 3.5, true)];

    assert_eq!(set_role_price(&mut roles, "r1", ""), Err(PriceError::Empty));
    assert_eq!(set_role_price(&mut roles, "r1", "   "), Err(PriceError::Empty));
    assert_eq!(roles[0].price, 3.5);
}

/// Tests rejecting negative and non-finite prices.
///
/// Verifies that values `f64` can parse but which are not valid prices are
/// treated as errors rather than stored.
///
/// Expected: Err for "-1", "inf" and "NaN", role unchanged
#[test]
fn rejects_negative_and_non_finite_prices() {
    let mut roles = vec![role("r1", 3.5, true)];

    assert_eq!(set_role_price(&mut roles, "r1", "-1"), Err(PriceError::Negative));
    assert!(matches!(
        set_role_price(&mut roles, "r1", "inf"),
        Err(PriceError::NotANumber(_))
    ));
    assert!(matches!(
        set_role_price(&mut roles, "r1", "NaN"),
        Err(PriceError::NotANumber(_))
    ));
    assert_eq!(roles[0].price, 3.5);
}

/// Tests that surrounding whitespace is tolerated.
///
/// Expected: Ok(12.0) for " 12 "
#[test]
fn trims_whitespace_before_parsing() {
    assert_eq!(parse_price(" 12 "), Ok(12.0));
    assert_eq!(parse_price("0"), Ok(0.0));
}

/// Tests a valid price for a role id that is not in the list.
///
/// Expected: Ok with no role modified
#[test]
fn ignores_unknown_role_id() {
    let mut roles = vec![role("r1", 1.0, false)];

    assert!(set_role_price(&mut roles, "missing", "4").is_ok());
    assert_eq!(roles[0].price, 1.0);
}
