// Proptest configuration shared by the property suites.
//
// Env knobs:
// - PROPTEST_CASES: cases per property (default 64).

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}
