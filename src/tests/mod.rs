mod config_tests;
mod field_tests;
mod utils;
