//! Terminal output formatting
//!
//! Display utilities for search results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_goodbye, print_header, print_initialized, print_initializing,
    print_search_result, print_searching,
};
