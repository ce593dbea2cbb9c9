use super::*;

#[test]
fn default_is_warn() {
    assert_eq!(default_directive(0, false), "warn");
}

#[test]
fn verbosity_raises_level() {
    assert_eq!(default_directive(1, false), "info");
    assert_eq!(default_directive(2, false), "debug");
    assert_eq!(default_directive(5, false), "debug");
}

#[test]
fn quiet_overrides_verbose() {
    assert_eq!(default_directive(0, true), "error");
    assert_eq!(default_directive(2, true), "error");
}

#[test]
fn init_twice_does_not_panic() {
    init(0, true);
    init(2, false);
}
