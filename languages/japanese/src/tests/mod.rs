mod query_tests;
mod search_tests;
