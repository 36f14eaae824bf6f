//! Environment-driven profiles shared by CI workflows and local test runs.

pub mod property_test_profile;
