//! Tests for installing a seeded process-wide generator.
//!
//! Kept to a single test so nothing else in this binary draws from the
//! shared generator before it is installed.

use random_helpers_core::{
    HelperError, RngConfig, StdRngSource, install_shared_rng, random_bool, random_bool_with,
    random_int, random_int_with,
};

#[test]
fn test_installed_seed_makes_shared_helpers_reproducible() {
    let config = RngConfig::seeded(2026);
    install_shared_rng(config).unwrap();

    let mut expected = StdRngSource::from_config(&config);
    for _ in 0..16 {
        assert_eq!(
            random_int(-100, 100).unwrap(),
            random_int_with(&mut expected, -100, 100).unwrap()
        );
        assert_eq!(random_bool(), random_bool_with(&mut expected));
    }

    // A rejected range leaves both generators in step.
    assert!(random_int(1, 0).is_err());
    assert_eq!(
        random_int(0, 9).unwrap(),
        random_int_with(&mut expected, 0, 9).unwrap()
    );

    let err = install_shared_rng(RngConfig::seeded(1)).unwrap_err();
    assert!(matches!(err, HelperError::Config(_)));
}
