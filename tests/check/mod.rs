mod client_tests;
mod comparator_tests;
