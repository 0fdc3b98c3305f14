/// All logic for parsing datasets from their textual representation
pub mod import;

/// All logic for rendering datasets back into their textual representation
pub mod export;
