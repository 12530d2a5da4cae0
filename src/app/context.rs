use crate::app::Reporter;
use crate::ports::{PreferenceStore, TemplateCatalog};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PreferenceStore, T: TemplateCatalog> {
    preferences: P,
    templates: T,
    reporter: Reporter,
}

impl<P: PreferenceStore, T: TemplateCatalog> AppContext<P, T> {
    /// Create a new application context.
    pub fn new(preferences: P, templates: T, reporter: Reporter) -> Self {
        Self { preferences, templates, reporter }
    }

    /// Get a reference to the preference store.
    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Get a reference to the template catalog.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }
}
