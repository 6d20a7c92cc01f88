// FILE: src/engine/mod.rs
pub mod ocr;
pub mod scanner;
pub mod searcher;

pub use ocr::{TesseractExtractor, TextExtractor};
pub use scanner::{FileOutcome, ScanReport, Scanner};
pub use searcher::Searcher;
