use super::*;

/// Tests toggling a role on and back off.
///
/// Expected: enabled flips each call and other roles stay as they were
#[test]
fn flips_enabled_on_matching_role() {
    let mut roles = vec![role("r1", 1.0, false), role("r2", 2.0, true)];

    toggle_role(&mut roles, "r1");
    assert!(roles[0].enabled);
    assert!(roles[1].enabled);

    toggle_role(&mut roles, "r1");
    assert!(!roles[0].enabled);
    assert!(roles[1].enabled);
}

/// Tests toggling an id that is not present.
///
/// Expected: no role changes
#[test]
fn ignores_unknown_role_id() {
    let mut roles = vec![role("r1", 1.0, false)];

    toggle_role(&mut roles, "nope");

    assert_eq!(roles, vec![role("r1", 1.0, false)]);
}
