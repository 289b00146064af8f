//! Pages and their component lists.

use crate::component::{ComponentId, ComponentInstance};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// SEO metadata attached to a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A page of the document: an ordered list of components plus routing
/// metadata.
///
/// The component list lives behind an `Arc` and is never mutated in place.
/// Every store mutation builds a new list and swaps the `Arc`, so readers
/// holding the previous list (rendering, properties panel, undo snapshots)
/// always see a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub components: Arc<Vec<ComponentInstance>>,
    pub route: String,
    #[serde(default)]
    pub is_home_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl Page {
    /// Create an empty page.
    pub fn new(id: impl Into<String>, name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            components: Arc::new(Vec::new()),
            route: route.into(),
            is_home_page: false,
            seo: None,
        }
    }

    /// The default home page a fresh document starts with.
    pub fn home() -> Self {
        Self {
            id: "page-1".into(),
            name: "Home".into(),
            components: Arc::new(Vec::new()),
            route: "/".into(),
            is_home_page: true,
            seo: Some(Seo {
                title: "Home Page".into(),
                description: "Welcome to our application".into(),
            }),
        }
    }

    /// Find a component by id.
    pub fn component(&self, id: &str) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Whether the page contains a component with the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.component(id).is_some()
    }

    /// Number of components on the page.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the page has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Replace the component list wholesale (copy-on-write swap).
    pub(crate) fn set_components(&mut self, components: Vec<ComponentInstance>) {
        self.components = Arc::new(components);
    }

    /// All component ids on the page, in order.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        self.components.iter().map(|c| c.id.clone()).collect()
    }
}
