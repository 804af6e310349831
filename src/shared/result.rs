/// Crate-wide Result alias over `anyhow::Error`, so context can be attached
/// as errors propagate up to `main`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
