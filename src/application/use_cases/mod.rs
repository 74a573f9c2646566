/// Use cases module containing application business logic orchestration
mod analyze_bom;
mod calculate_requirements;
mod dataset_loader;

pub use analyze_bom::AnalyzeBomUseCase;
pub use calculate_requirements::CalculateRequirementsUseCase;
