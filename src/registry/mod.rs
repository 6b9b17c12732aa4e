pub mod errors;
pub mod impls;
pub mod template;
pub mod types;

pub use errors::{RegistryError, TemplateError};
pub use template::NameTemplate;
pub use types::{
    DomainProviderConfig, IntegrationTemplate, ProviderCredentials, ProviderRegistry, UsageConfig,
    UsageRegistry,
};
