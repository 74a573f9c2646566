/// Application layer - use cases, DTOs and factories
///
/// Use cases load datasets through the `DatasetReader` port, run the
/// `bom_analysis` services and hand back response DTOs for formatting.
pub mod dto;
pub mod factories;
pub mod use_cases;
