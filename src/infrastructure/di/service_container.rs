//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::MergeService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, Reporter};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Progress sink
    pub reporter: Arc<dyn Reporter>,
}

impl ServiceContainer {
    /// Create a new service container with the real filesystem.
    pub fn new(settings: Settings, reporter: Arc<dyn Reporter>) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), reporter)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            reporter,
        }
    }

    /// Merge service wired to this container's dependencies.
    pub fn merge_service(&self) -> MergeService {
        MergeService::new(
            self.fs.clone(),
            self.reporter.clone(),
            self.settings.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::NullReporter;

    #[test]
    fn given_custom_settings_when_merge_service_then_shares_them() {
        let settings = Settings {
            unify_sites: true,
            ..Settings::default()
        };
        let container = ServiceContainer::new(settings, Arc::new(NullReporter));
        let service = container.merge_service();
        assert!(container.settings.unify_sites);
        assert_eq!(Arc::strong_count(&container.settings), 2);
        drop(service);
        assert_eq!(Arc::strong_count(&container.settings), 1);
    }
}
