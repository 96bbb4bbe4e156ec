use crate::api::{CustomizationApi, LocalStore};
use crate::error::{CustomizationError, Result};
use std::path::Path;
use std::sync::Arc;

/// API factory for creating a Customization API backend by name
pub struct ApiFactory;

impl ApiFactory {
    /// Create a backend instance based on the backend name
    ///
    /// # Arguments
    /// * `backend` - The name of the backend (memory, file)
    /// * `store_path` - JSON file used by the `file` backend
    ///
    /// # Errors
    /// * Returns `CustomizationError::ConfigError` if the backend name is unknown
    pub fn create(backend: &str, store_path: &Path) -> Result<Arc<dyn CustomizationApi>> {
        match backend.to_lowercase().as_str() {
            "memory" => Ok(Arc::new(LocalStore::new())),
            "file" => Ok(Arc::new(LocalStore::open(store_path)?)),
            _ => Err(CustomizationError::ConfigError(format!(
                "Unknown backend: {}\nSupported backends: {}",
                backend,
                Self::supported_backends().join(", ")
            ))),
        }
    }

    /// Get a list of all supported backend names
    pub fn supported_backends() -> Vec<&'static str> {
        vec!["memory", "file"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_memory_backend() {
        let api = ApiFactory::create("memory", Path::new("unused.json"));
        assert!(api.is_ok());
        assert_eq!(api.unwrap().name(), "memory");
    }

    #[test]
    fn test_case_insensitive() {
        assert!(ApiFactory::create("MeMoRy", Path::new("unused.json")).is_ok());
    }

    #[test]
    fn test_create_unknown_backend() {
        let api = ApiFactory::create("graphql", Path::new("unused.json"));
        assert!(matches!(api, Err(CustomizationError::ConfigError(_))));
    }

    #[test]
    fn test_unknown_backend_lists_supported() {
        let Err(err) = ApiFactory::create("graphql", Path::new("unused.json")) else {
            panic!("expected unknown backend error");
        };
        assert!(err.to_string().contains("memory, file"));
    }
}
