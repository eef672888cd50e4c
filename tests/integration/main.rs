//! Integration test harness. Each module drives the compiled binary.


mod cli_test;
mod discovery_test;
mod git_test;
mod save_test;
