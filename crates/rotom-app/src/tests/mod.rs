mod stale_lookup_tests;
mod stub;
