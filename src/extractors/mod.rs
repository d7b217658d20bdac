// src/extractors/mod.rs
pub mod pauta;
pub mod resolution;
pub mod session;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use pauta::{PautaExtractor, ProcessRecord};
#[allow(unused_imports)]
pub use resolution::{ResolutionExtractor, ResolutionRecord};
#[allow(unused_imports)]
pub use session::SessionLabelResolver;
