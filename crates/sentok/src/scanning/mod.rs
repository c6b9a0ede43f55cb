//! # Text Scanning

pub mod scan_config;
pub mod scanner;

pub use scan_config::ScanConfig;
pub use scanner::{ScanToken, Scanner, TokenKind, tokenize};
