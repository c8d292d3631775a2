pub mod parser;

pub use parser::{parse, parse_with_diagnostics, ParseError, TokenSlice};


// Integration tests are in the tests/ directory
