// Test helper utilities shared across test modules
mod test_helpers;

mod deck_tests;
