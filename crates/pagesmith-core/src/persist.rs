//! Persisted document shape.
//!
//! Only durable data goes to disk: pages with their components, the current
//! page, and the API definitions. Transients (selection, clipboard, drag
//! state, undo history) never round-trip.

use crate::component::ComponentInstance;
use crate::page::{Page, Seo};
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A page as it appears on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedPage {
    pub id: String,
    pub name: String,
    pub components: Vec<ComponentInstance>,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub is_home_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

/// The full persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub pages: Vec<PersistedPage>,
    pub current_page_id: String,
    /// Denormalized for cheap display in document pickers.
    pub current_page_name: String,
    #[serde(default)]
    pub apis: BTreeMap<String, Value>,
}

impl PersistedState {
    /// Capture the durable part of a store.
    pub fn from_store(store: &DocumentStore) -> Self {
        Self {
            pages: store
                .pages()
                .iter()
                .map(|page| PersistedPage {
                    id: page.id.clone(),
                    name: page.name.clone(),
                    components: page.components.as_ref().clone(),
                    route: page.route.clone(),
                    is_home_page: page.is_home_page,
                    seo: page.seo.clone(),
                })
                .collect(),
            current_page_id: store.current_page_id().to_string(),
            current_page_name: store
                .current_page()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            apis: store.apis.clone(),
        }
    }

    /// Rebuild a store. Selection and clipboard start empty, settings at
    /// their defaults.
    pub fn into_store(self) -> DocumentStore {
        let pages = self
            .pages
            .into_iter()
            .map(|page| Page {
                id: page.id,
                name: page.name,
                components: Arc::new(page.components),
                route: page.route,
                is_home_page: page.is_home_page,
                seo: page.seo,
            })
            .collect();
        let mut store = DocumentStore::with_pages(pages, self.current_page_id);
        store.apis = self.apis;
        store
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
