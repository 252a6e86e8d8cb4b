//! Name-based element lookup.
//!
//! BPMN names are not ids: they are optional and not unique. The searcher
//! therefore works by scan, kind by kind, and resolves ambiguity with
//! first-match-wins plus optional caller-supplied restrictions.

use std::fmt;

use log::trace;

use flowpath_core::{
    registry::ElementRegistry,
    semantic::{Element, ElementKind},
};

/// Disambiguation options for name lookup.
///
/// Without options, every kind is searched in the fixed
/// [`ElementKind::all`] order and the first name match wins.
///
/// # Examples
///
/// ```rust
/// use flowpath::search::SearchOptions;
/// use flowpath_core::semantic::ShapeKind;
///
/// let options = SearchOptions::new()
///     .kinds([ShapeKind::UserTask, ShapeKind::ServiceTask])
///     .filter(|element| element.id().starts_with("Task_"));
/// ```
#[derive(Default)]
pub struct SearchOptions {
    kinds: Option<Vec<ElementKind>>,
    filter: Option<Box<dyn Fn(&Element) -> bool>>,
}

impl SearchOptions {
    /// Options with no restrictions: all kinds, first match wins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to these kinds, in the given order.
    pub fn kinds<K>(mut self, kinds: impl IntoIterator<Item = K>) -> Self
    where
        K: Into<ElementKind>,
    {
        self.kinds = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only name matches accepted by this predicate.
    pub fn filter(mut self, filter: impl Fn(&Element) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    fn search_kinds(&self) -> Vec<ElementKind> {
        self.kinds
            .clone()
            .unwrap_or_else(|| ElementKind::all().collect())
    }

    fn accepts(&self, element: &Element) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(element))
    }
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("kinds", &self.kinds)
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

/// Finds elements by display name.
pub struct ElementsSearcher<'a, R: ElementRegistry> {
    registry: &'a R,
}

impl<'a, R: ElementRegistry> ElementsSearcher<'a, R> {
    /// Create a searcher over the given registry.
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Id of the first element whose name equals `name`.
    pub fn element_id_by_name(&self, name: &str) -> Option<String> {
        self.element_by_name(name).map(|element| element.id().to_string())
    }

    /// First element whose name equals `name`, searching every kind.
    pub fn element_by_name(&self, name: &str) -> Option<Element> {
        self.element_by_name_with(name, &SearchOptions::default())
    }

    /// First element whose name equals `name`, under the given options.
    ///
    /// Kinds are searched one registry query at a time, in option order
    /// (or [`ElementKind::all`] order when unrestricted); within a kind,
    /// candidates come back in registry order. The first candidate passing
    /// the options' filter wins. Elements without a name never match.
    pub fn element_by_name_with(&self, name: &str, options: &SearchOptions) -> Option<Element> {
        // Full scan on every call; one kind per registry query keeps each
        // result set small.
        for kind in options.search_kinds() {
            let candidate = self
                .registry
                .elements_by_kinds(&[kind])
                .into_iter()
                .filter(|element| element.name() == Some(name))
                .find(|element| options.accepts(element));
            if let Some(element) = candidate {
                trace!(name, id = element.id(); "Name matched");
                return Some(element);
            }
        }
        None
    }

    /// All elements whose name is one of `names`, kind-major order.
    ///
    /// The result length may differ from `names.len()`: unmatched names
    /// contribute nothing and duplicated names contribute every carrier.
    pub fn elements_by_names(&self, names: &[String]) -> Vec<Element> {
        let mut elements = Vec::new();
        for kind in ElementKind::all() {
            elements.extend(
                self.registry
                    .elements_by_kinds(&[kind])
                    .into_iter()
                    .filter(|element| {
                        element
                            .name()
                            .is_some_and(|name| names.iter().any(|wanted| wanted == name))
                    }),
            );
        }
        elements
    }
}
