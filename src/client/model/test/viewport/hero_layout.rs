use super::*;

/// Tests the two reference widths.
///
/// Expected: 1000 renders the small hero, 2000 the large hero
#[test]
fn selects_small_and_large_for_reference_widths() {
    assert_eq!(hero_layout(Some(1000.0)), Some(HeroLayout::Small));
    assert_eq!(hero_layout(Some(2000.0)), Some(HeroLayout::Large));
}

/// Tests widths around the compact boundary.
///
/// Verifies that 1200 itself is compact and the band above it is medium,
/// both of which render the small hero.
///
/// Expected: Compact at 1199 and 1200, Medium at 1201, Small hero for all
#[test]
fn compact_boundary_is_inclusive() {
    assert_eq!(Breakpoint::from_width(1199.0), Breakpoint::Compact);
    assert_eq!(Breakpoint::from_width(1200.0), Breakpoint::Compact);
    assert_eq!(Breakpoint::from_width(1201.0), Breakpoint::Medium);

    for width in [1199.0, 1200.0, 1201.0] {
        assert_eq!(hero_layout(Some(width)), Some(HeroLayout::Small));
    }
}

/// Tests widths around the medium boundary.
///
/// Expected: Medium and small hero at 1799 and 1800, Wide and large hero at 1801
#[test]
fn medium_boundary_is_inclusive() {
    assert_eq!(Breakpoint::from_width(1799.0), Breakpoint::Medium);
    assert_eq!(Breakpoint::from_width(1800.0), Breakpoint::Medium);
    assert_eq!(Breakpoint::from_width(1801.0), Breakpoint::Wide);

    assert_eq!(hero_layout(Some(1799.0)), Some(HeroLayout::Small));
    assert_eq!(hero_layout(Some(1800.0)), Some(HeroLayout::Small));
    assert_eq!(hero_layout(Some(1801.0)), Some(HeroLayout::Large));
}

/// Tests the unmeasured viewport.
///
/// Expected: None so no hero is rendered
#[test]
fn renders_nothing_before_width_is_known() {
    assert_eq!(hero_layout(None), None);
}
