/// Result alias used across layers; errors carry `anyhow` context chains.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
