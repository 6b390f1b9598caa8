mod find_latest_tests;
mod name_tests;
