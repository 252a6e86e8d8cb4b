//! Plugin registration.
//!
//! A [`PluginHost`] bundles a diagram registry with a set of add-on
//! plugins. The plugin map is owned by the host instance (never global),
//! fixed at construction, and immutable in membership afterward. The
//! lifecycle has two phases: every plugin is constructed and registered
//! first, then each gets its [`Plugin::configure`] call, so a plugin can
//! rely on the full set being present when it configures itself.
//!
//! Registration is the one place in this crate that fails hard: two
//! plugins sharing an id abort construction with
//! [`PluginError::DuplicateId`].

pub mod elements;

use std::{any::Any, rc::Rc};

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use flowpath_core::registry::ElementRegistry;

/// Errors raised while building a [`PluginHost`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// Two plugins declared the same id. The id is the lookup key, so the
    /// whole host is refused rather than silently keeping one of them.
    #[error("plugin loading failed: a plugin with id '{0}' is already registered")]
    DuplicateId(String),
}

/// An add-on registered with a [`PluginHost`].
///
/// The `Any` supertrait enables typed retrieval through
/// [`PluginHost::plugin_as`].
pub trait Plugin: Any {
    /// Stable identifier, unique within one host.
    fn plugin_id(&self) -> &str;

    /// Lifecycle hook, run once after every plugin of the host has been
    /// registered. Default does nothing.
    fn configure(&mut self) {}
}

/// Builds one plugin from the shared registry handle.
pub type PluginConstructor<R> = Box<dyn FnOnce(Rc<R>) -> Box<dyn Plugin>>;

/// A diagram registry together with its registered plugins.
///
/// # Examples
///
/// ```rust
/// use flowpath::plugins::elements::{ELEMENTS_PLUGIN_ID, ElementsPlugin};
/// use flowpath::plugins::{PluginConstructor, PluginHost};
/// use flowpath_core::model::DiagramModel;
///
/// let constructors: Vec<PluginConstructor<DiagramModel>> =
///     vec![Box::new(|registry| Box::new(ElementsPlugin::new(registry)))];
/// let host = PluginHost::new(DiagramModel::default(), constructors).unwrap();
///
/// assert!(host.plugin(ELEMENTS_PLUGIN_ID).is_some());
/// assert!(host.plugin("unknown").is_none());
/// ```
pub struct PluginHost<R: ElementRegistry> {
    registry: Rc<R>,
    plugins: IndexMap<String, Box<dyn Plugin>>,
}

impl<R: ElementRegistry> PluginHost<R> {
    /// Construct the host, registering and then configuring every plugin.
    ///
    /// Constructors run in order; each receives a handle to the shared
    /// registry. Once all plugins are registered, `configure` runs on each
    /// in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::DuplicateId`] as soon as a constructor
    /// produces a plugin whose id is already taken; no partially built
    /// host escapes.
    pub fn new(
        registry: R,
        constructors: impl IntoIterator<Item = PluginConstructor<R>>,
    ) -> Result<Self, PluginError> {
        let registry = Rc::new(registry);

        let mut plugins: IndexMap<String, Box<dyn Plugin>> = IndexMap::new();
        for constructor in constructors {
            let plugin = constructor(Rc::clone(&registry));
            let id = plugin.plugin_id().to_string();
            if plugins.contains_key(&id) {
                return Err(PluginError::DuplicateId(id));
            }
            debug!(plugin_id = id.as_str(); "Plugin registered");
            plugins.insert(id, plugin);
        }

        for plugin in plugins.values_mut() {
            plugin.configure();
        }
        debug!(plugins_count = plugins.len(); "Plugin host configured");

        Ok(Self { registry, plugins })
    }

    /// The shared diagram registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Look up a plugin by id.
    pub fn plugin(&self, id: &str) -> Option<&dyn Plugin> {
        self.plugins.get(id).map(|plugin| plugin.as_ref())
    }

    /// Look up a plugin by id and downcast it to its concrete type.
    ///
    /// Returns `None` when the id is unknown or the plugin is of a
    /// different type.
    pub fn plugin_as<T: Plugin>(&self, id: &str) -> Option<&T> {
        self.plugin(id)
            .and_then(|plugin| (plugin as &dyn Any).downcast_ref::<T>())
    }

    /// Registered plugin ids, in registration order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl<R: ElementRegistry + std::fmt::Debug> std::fmt::Debug for PluginHost<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginHost")
            .field("registry", &self.registry)
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use flowpath_core::model::DiagramModel;

    /// Records its lifecycle into a shared journal.
    struct JournalingPlugin {
        id: String,
        journal: Rc<RefCell<Vec<String>>>,
    }

    impl JournalingPlugin {
        fn constructor(
            id: &str,
            journal: &Rc<RefCell<Vec<String>>>,
        ) -> PluginConstructor<DiagramModel> {
            let id = id.to_string();
            let journal = Rc::clone(journal);
            Box::new(move |_registry| {
                journal.borrow_mut().push(format!("construct {id}"));
                Box::new(JournalingPlugin { id, journal })
            })
        }
    }

    impl Plugin for JournalingPlugin {
        fn plugin_id(&self) -> &str {
            &self.id
        }

        fn configure(&mut self) {
            self.journal.borrow_mut().push(format!("configure {}", self.id));
        }
    }

    #[test]
    fn test_configure_runs_after_all_registrations() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let constructors = vec![
            JournalingPlugin::constructor("first", &journal),
            JournalingPlugin::constructor("second", &journal),
        ];
        let host = PluginHost::new(DiagramModel::default(), constructors).unwrap();

        assert_eq!(
            *journal.borrow(),
            [
                "construct first",
                "construct second",
                "configure first",
                "configure second"
            ]
        );
        let ids: Vec<&str> = host.plugin_ids().collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_duplicate_id_fails_fast() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let constructors = vec![
            JournalingPlugin::constructor("dup", &journal),
            JournalingPlugin::constructor("dup", &journal),
        ];
        let error = PluginHost::new(DiagramModel::default(), constructors).unwrap_err();

        assert_eq!(error, PluginError::DuplicateId("dup".to_string()));
        assert_eq!(
            error.to_string(),
            "plugin loading failed: a plugin with id 'dup' is already registered"
        );
        // Construction stops before any configure call.
        assert_eq!(*journal.borrow(), ["construct dup", "construct dup"]);
    }

    #[test]
    fn test_typed_retrieval_downcasts() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let constructors = vec![JournalingPlugin::constructor("journal", &journal)];
        let host = PluginHost::new(DiagramModel::default(), constructors).unwrap();

        let plugin: &JournalingPlugin = host.plugin_as("journal").unwrap();
        assert_eq!(plugin.plugin_id(), "journal");
        assert!(host.plugin_as::<JournalingPlugin>("missing").is_none());
    }

    #[test]
    fn test_empty_host_is_valid() {
        let host = PluginHost::new(DiagramModel::default(), Vec::new()).unwrap();
        assert!(host.is_empty());
        assert_eq!(host.len(), 0);
        assert!(host.plugin("anything").is_none());
    }
}
