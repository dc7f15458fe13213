pub mod defaults;
pub mod netsel_config;
pub mod observability_config;
pub mod registry_config;
pub mod scoring_config;
pub mod selection_config;

pub use netsel_config::NetselConfig;
pub use observability_config::ObservabilityConfig;
pub use registry_config::{FaultPolicy, RegistryConfig};
pub use scoring_config::ScoringConfig;
pub use selection_config::SelectionConfig;
