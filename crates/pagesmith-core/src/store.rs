//! Document store: the single source of truth for pages and components.
//!
//! Every mutation goes through a named operation and replaces the affected
//! page's component list wholesale (the list sits behind an `Arc`, see
//! [`crate::page::Page`]). Readers never observe a partially applied
//! mutation, and undo snapshots are cheap because untouched pages keep
//! sharing their lists.
//!
//! Failure semantics: operating on a missing component or page mutates
//! nothing and signals nothing. The editing surface stays available; strict
//! feedback is deliberately not a goal here.

use crate::component::{ComponentId, ComponentInstance, ComponentPatch};
use crate::geometry::CanvasSettings;
use crate::page::Page;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Offset applied to duplicated components so the copy is visible.
const DUPLICATE_OFFSET: f64 = 20.0;

/// A snapshot of document state for undo/redo.
#[derive(Debug, Clone)]
struct DocumentSnapshot {
    pages: Vec<Page>,
    current_page_id: String,
}

/// Partial update merged into a [`Page`].
#[derive(Debug, Clone, Default)]
pub struct PagePatch {
    pub name: Option<String>,
    pub route: Option<String>,
    pub is_home_page: Option<bool>,
    pub seo: Option<crate::page::Seo>,
}

/// The document store.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pages: Vec<Page>,
    current_page_id: String,
    /// Snapshot of the selected component, weak by id: if the id no longer
    /// resolves the selection silently clears.
    selected: Option<ComponentInstance>,
    /// Single-slot clipboard. Copy/cut overwrite it, paste keeps it.
    clipboard: Option<ComponentInstance>,
    /// Zoom/grid settings read by every geometry computation.
    pub settings: CanvasSettings,
    /// API endpoint definitions, keyed by name. Execution is an external
    /// collaborator; the store only carries them through persistence.
    pub apis: BTreeMap<String, Value>,
    undo_stack: Vec<DocumentSnapshot>,
    redo_stack: Vec<DocumentSnapshot>,
    /// Last timestamp handed out for derived ids; kept strictly monotonic
    /// so ids stay unique even within one millisecond.
    last_timestamp: u64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create a store with the default home page.
    pub fn new() -> Self {
        let home = Page::home();
        let current_page_id = home.id.clone();
        Self {
            pages: vec![home],
            current_page_id,
            selected: None,
            clipboard: None,
            settings: CanvasSettings::default(),
            apis: BTreeMap::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            last_timestamp: 0,
        }
    }

    /// Create a store from an existing page list. The first page becomes
    /// current when `current_page_id` does not resolve.
    pub fn with_pages(pages: Vec<Page>, current_page_id: impl Into<String>) -> Self {
        let mut store = Self::new();
        let current_page_id = current_page_id.into();
        store.current_page_id = if pages.iter().any(|p| p.id == current_page_id) {
            current_page_id
        } else {
            pages.first().map(|p| p.id.clone()).unwrap_or_default()
        };
        store.pages = pages;
        store
    }

    // --- Read access -----------------------------------------------------

    /// All pages, in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Id of the page mutations apply to.
    pub fn current_page_id(&self) -> &str {
        &self.current_page_id
    }

    /// The page mutations apply to, if it resolves.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == self.current_page_id)
    }

    /// Find a page by id.
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Find a component on the current page.
    pub fn component(&self, id: &str) -> Option<&ComponentInstance> {
        self.current_page().and_then(|p| p.component(id))
    }

    /// Snapshot of the selected component (kept in sync with the store).
    pub fn selected_component(&self) -> Option<&ComponentInstance> {
        self.selected.as_ref()
    }

    /// Whether the clipboard holds a component.
    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    // --- Internal helpers ------------------------------------------------

    /// Rebuild the current page's component list through `f` and swap it in.
    /// No-op when no current page resolves.
    fn mutate_current_components<F>(&mut self, f: F)
    where
        F: FnOnce(&[ComponentInstance]) -> Vec<ComponentInstance>,
    {
        let current = &self.current_page_id;
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == *current) {
            let next = f(&page.components);
            page.set_components(next);
        }
    }

    /// Refresh the selection snapshot after a mutation touched `id`.
    fn refresh_selection(&mut self, id: &str) {
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = self.component(id).cloned();
        }
    }

    /// Next timestamp for derived ids, strictly monotonic.
    fn next_timestamp(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_timestamp = now.max(self.last_timestamp + 1);
        self.last_timestamp
    }

    // --- Component operations (current page) -----------------------------

    /// Append a component to the current page.
    pub fn add_component(&mut self, instance: ComponentInstance) {
        self.mutate_current_components(|components| {
            let mut next = components.to_vec();
            next.push(instance);
            next
        });
    }

    /// Merge a patch into the matching component. Also refreshes the
    /// selection snapshot so selection and store never diverge.
    pub fn update_component(&mut self, id: &str, patch: &ComponentPatch) {
        self.mutate_current_components(|components| {
            components
                .iter()
                .map(|c| {
                    if c.id == id {
                        let mut updated = c.clone();
                        patch.apply_to(&mut updated);
                        updated
                    } else {
                        c.clone()
                    }
                })
                .collect()
        });
        self.refresh_selection(id);
    }

    /// Remove a component from the current page. Clears the selection if it
    /// pointed at the removed id.
    pub fn delete_component(&mut self, id: &str) {
        self.mutate_current_components(|components| {
            components.iter().filter(|c| c.id != id).cloned().collect()
        });
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }

    /// Clone a component with a derived id, offset by +20/+20.
    pub fn duplicate_component(&mut self, id: &str) {
        let Some(original) = self.component(id).cloned() else {
            return;
        };
        let ts = self.next_timestamp();
        let copy = original.cloned_with_id(
            format!("{}-copy-{}", original.id, ts),
            DUPLICATE_OFFSET,
            DUPLICATE_OFFSET,
        );
        self.add_component(copy);
    }

    /// Set the display name. Writes both the `name` prop and the legacy
    /// `label` prop, which older widget renderers still read.
    pub fn rename_component(&mut self, id: &str, name: &str) {
        self.mutate_current_components(|components| {
            components
                .iter()
                .map(|c| {
                    if c.id == id {
                        let mut renamed = c.clone();
                        renamed.props.insert("name".into(), Value::String(name.into()));
                        renamed.props.insert("label".into(), Value::String(name.into()));
                        renamed
                    } else {
                        c.clone()
                    }
                })
                .collect()
        });
        self.refresh_selection(id);
    }

    /// Clear props and style back to empty maps, preserving geometry and id.
    pub fn reset_component_state(&mut self, id: &str) {
        self.mutate_current_components(|components| {
            components
                .iter()
                .map(|c| {
                    if c.id == id {
                        let mut reset = c.clone();
                        reset.props = serde_json::Map::new();
                        reset.style = serde_json::Map::new();
                        reset
                    } else {
                        c.clone()
                    }
                })
                .collect()
        });
        self.refresh_selection(id);
    }

    /// Move a component to an absolute canvas position.
    pub fn move_component(&mut self, id: &str, x: f64, y: f64) {
        self.update_component(id, &ComponentPatch::position(x, y));
    }

    /// Resize a component to an absolute size.
    pub fn resize_component(&mut self, id: &str, width: f64, height: f64) {
        self.update_component(id, &ComponentPatch::size(width, height));
    }

    // --- Selection & clipboard -------------------------------------------

    /// Set the current selection. `None` deselects (clicking empty canvas
    /// area must pass `None` through here).
    pub fn select_component(&mut self, instance: Option<ComponentInstance>) {
        self.selected = instance;
    }

    /// Snapshot a component into the clipboard without removing it.
    /// Missing id is a no-op; the clipboard keeps its previous content.
    pub fn copy_component(&mut self, id: &str) {
        if let Some(instance) = self.component(id).cloned() {
            self.clipboard = Some(instance);
        }
    }

    /// Snapshot a component into the clipboard and remove it from the page.
    /// Cutting does not select anything; it only clears the selection when
    /// the cut component was the selected one.
    pub fn cut_component(&mut self, id: &str) {
        if let Some(instance) = self.component(id).cloned() {
            self.clipboard = Some(instance);
            self.delete_component(id);
        }
    }

    /// Insert a new instance derived from the clipboard snapshot at the
    /// given point. The clipboard is retained so repeated paste works.
    /// Pasting does not change the selection.
    pub fn paste_component(&mut self, x: f64, y: f64) {
        let Some(copied) = self.clipboard.clone() else {
            return;
        };
        let ts = self.next_timestamp();
        let mut pasted = copied.clone();
        pasted.id = format!("{}-paste-{}", copied.id, ts);
        pasted.x = x;
        pasted.y = y;
        self.add_component(pasted);
    }

    // --- Canvas settings -------------------------------------------------

    /// Set the canvas zoom factor.
    pub fn set_canvas_scale(&mut self, scale: f64) {
        self.settings.set_canvas_scale(scale);
    }

    /// Update grid settings; fields left as `None` keep their value.
    pub fn update_grid_settings(&mut self, grid_size: Option<f64>, snap_to_grid: Option<bool>) {
        if let Some(grid_size) = grid_size {
            self.settings.set_grid_size(grid_size);
        }
        if let Some(snap) = snap_to_grid {
            self.settings.snap_to_grid = snap;
        }
    }

    // --- Page operations -------------------------------------------------

    /// Add a page (starting empty) and make it current.
    pub fn add_page(&mut self, mut page: Page) {
        page.set_components(Vec::new());
        self.current_page_id = page.id.clone();
        self.selected = None;
        self.pages.push(page);
    }

    /// Merge a patch into the matching page's metadata.
    pub fn update_page(&mut self, id: &str, patch: &PagePatch) {
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
            if let Some(name) = &patch.name {
                page.name = name.clone();
            }
            if let Some(route) = &patch.route {
                page.route = route.clone();
            }
            if let Some(is_home) = patch.is_home_page {
                page.is_home_page = is_home;
            }
            if let Some(seo) = &patch.seo {
                page.seo = Some(seo.clone());
            }
        }
    }

    /// Remove a page; its components go with it. When the current page is
    /// deleted, the first remaining page becomes current.
    pub fn delete_page(&mut self, id: &str) {
        let deleting_selected = self
            .selected
            .as_ref()
            .is_some_and(|s| self.page(id).is_some_and(|p| p.contains(&s.id)));
        self.pages.retain(|p| p.id != id);
        if self.current_page_id == id {
            self.current_page_id = self.pages.first().map(|p| p.id.clone()).unwrap_or_default();
        }
        if deleting_selected {
            self.selected = None;
        }
    }

    /// Clone a page under a derived id. Component ids are regenerated so
    /// no component ever belongs to two pages.
    pub fn duplicate_page(&mut self, id: &str) {
        let Some(original) = self.page(id).cloned() else {
            return;
        };
        let ts = self.next_timestamp();
        let mut copy = original.clone();
        copy.id = format!("{}-copy-{}", original.id, ts);
        copy.name = format!("{} Copy", original.name);
        copy.route = format!("{}-copy", original.route);
        copy.is_home_page = false;
        let components = original
            .components
            .iter()
            .map(|c| c.cloned_with_id(format!("{}-copy-{}", c.id, ts), 0.0, 0.0))
            .collect();
        copy.set_components(components);
        self.pages.push(copy);
    }

    /// Switch the current page. Selection is cleared; the clipboard
    /// survives page switches. Unknown ids are ignored.
    pub fn set_current_page(&mut self, id: &str) {
        if self.pages.iter().any(|p| p.id == id) {
            self.current_page_id = id.to_string();
            self.selected = None;
        }
    }

    // --- Undo / redo -----------------------------------------------------

    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            pages: self.pages.clone(),
            current_page_id: self.current_page_id.clone(),
        }
    }

    fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.pages = snapshot.pages;
        self.current_page_id = snapshot.current_page_id;
        // The selection snapshot may now point at a component that no
        // longer exists, or at a stale version of one; re-resolve it.
        if let Some(selected) = self.selected.take() {
            self.selected = self.component(&selected.id).cloned();
        }
    }

    /// Push the current state to the undo stack (call before a change).
    pub fn push_undo(&mut self) {
        self.undo_stack.push(self.snapshot());
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.undo_stack.pop() {
            let current = self.snapshot();
            self.redo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Redo the last undone change. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.redo_stack.pop() {
            let current = self.snapshot();
            self.undo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::WidgetKind;
    use serde_json::json;
    use std::collections::HashSet;

    fn button(x: f64, y: f64) -> ComponentInstance {
        ComponentInstance::new(WidgetKind::Button, x, y, 120.0, 40.0)
    }

    #[test]
    fn test_add_component_appends_to_current_page() {
        let mut store = DocumentStore::new();
        let instance = button(10.0, 10.0);
        let id = instance.id.clone();

        store.add_component(instance);

        assert_eq!(store.current_page().unwrap().len(), 1);
        assert!(store.component(&id).is_some());
    }

    #[test]
    fn test_add_component_without_current_page_is_noop() {
        let mut store = DocumentStore::with_pages(Vec::new(), "nowhere");
        store.add_component(button(0.0, 0.0));
        assert!(store.pages().is_empty());
    }

    #[test]
    fn test_update_refreshes_selection_snapshot() {
        let mut store = DocumentStore::new();
        let instance = button(10.0, 10.0);
        let id = instance.id.clone();
        store.add_component(instance.clone());
        store.select_component(Some(instance));

        store.update_component(&id, &ComponentPatch::position(200.0, 300.0));

        let selected = store.selected_component().unwrap();
        assert_eq!((selected.x, selected.y), (200.0, 300.0));
        assert_eq!(selected, store.component(&id).unwrap());
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = DocumentStore::new();
        store.add_component(button(10.0, 10.0));
        let before = store.current_page().unwrap().clone();

        store.update_component("missing", &ComponentPatch::position(1.0, 1.0));

        assert_eq!(store.current_page().unwrap(), &before);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance.clone());
        store.select_component(Some(instance));

        store.delete_component(&id);

        assert!(store.selected_component().is_none());
        assert!(store.component(&id).is_none());
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut store = DocumentStore::new();
        let kept = button(0.0, 0.0);
        let removed = button(50.0, 50.0);
        let removed_id = removed.id.clone();
        store.add_component(kept.clone());
        store.add_component(removed);
        store.select_component(Some(kept.clone()));

        store.delete_component(&removed_id);

        assert_eq!(store.selected_component(), Some(&kept));
    }

    #[test]
    fn test_duplicate_offsets_and_derives_id() {
        let mut store = DocumentStore::new();
        let instance = button(100.0, 100.0);
        let id = instance.id.clone();
        store.add_component(instance);

        store.duplicate_component(&id);

        let page = store.current_page().unwrap();
        assert_eq!(page.len(), 2);
        let copy = page.components.iter().find(|c| c.id != id).unwrap();
        assert!(copy.id.starts_with(&format!("{id}-copy-")));
        assert_eq!((copy.x, copy.y), (120.0, 120.0));
    }

    #[test]
    fn test_ids_stay_unique_across_add_duplicate_paste() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance);

        for _ in 0..5 {
            store.duplicate_component(&id);
        }
        store.copy_component(&id);
        for _ in 0..5 {
            store.paste_component(10.0, 10.0);
        }

        let ids: Vec<_> = store.current_page().unwrap().component_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 11);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_rename_sets_name_and_legacy_label() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance);

        store.rename_component(&id, "Submit");

        let component = store.component(&id).unwrap();
        assert_eq!(component.props.get("name"), Some(&json!("Submit")));
        assert_eq!(component.props.get("label"), Some(&json!("Submit")));
    }

    #[test]
    fn test_reset_preserves_geometry_and_id() {
        let mut store = DocumentStore::new();
        let mut instance = button(30.0, 40.0);
        instance.props.insert("text".into(), json!("hello"));
        instance.style.insert("color".into(), json!("#fff"));
        let id = instance.id.clone();
        store.add_component(instance);

        store.reset_component_state(&id);

        let component = store.component(&id).unwrap();
        assert!(component.props.is_empty());
        assert!(component.style.is_empty());
        assert_eq!((component.x, component.y), (30.0, 40.0));
        assert_eq!((component.width, component.height), (120.0, 40.0));
    }

    #[test]
    fn test_copy_paste_twice_leaves_original_untouched() {
        let mut store = DocumentStore::new();
        let instance = button(10.0, 10.0);
        let id = instance.id.clone();
        store.add_component(instance.clone());

        store.copy_component(&id);
        store.paste_component(200.0, 200.0);
        store.paste_component(200.0, 200.0);

        let page = store.current_page().unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(store.component(&id), Some(&instance));
        let pasted: Vec<_> = page.components.iter().filter(|c| c.id != id).collect();
        assert_eq!(pasted.len(), 2);
        assert_ne!(pasted[0].id, pasted[1].id);
        for p in pasted {
            assert_eq!((p.x, p.y), (200.0, 200.0));
        }
    }

    #[test]
    fn test_paste_with_empty_clipboard_is_noop() {
        let mut store = DocumentStore::new();
        store.paste_component(10.0, 10.0);
        assert!(store.current_page().unwrap().is_empty());
    }

    #[test]
    fn test_cut_clears_selection_but_does_not_select() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance.clone());
        store.select_component(Some(instance));

        store.cut_component(&id);

        assert!(store.selected_component().is_none());
        assert!(store.component(&id).is_none());
        assert!(store.has_clipboard());

        store.paste_component(5.0, 5.0);
        // Pasting restores the component under a new id, still unselected.
        assert_eq!(store.current_page().unwrap().len(), 1);
        assert!(store.selected_component().is_none());
    }

    #[test]
    fn test_copy_missing_id_keeps_clipboard() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance);
        store.copy_component(&id);

        store.copy_component("missing");

        assert!(store.has_clipboard());
        store.paste_component(1.0, 2.0);
        assert_eq!(store.current_page().unwrap().len(), 2);
    }

    #[test]
    fn test_mutations_do_not_touch_other_pages() {
        let mut store = DocumentStore::new();
        let on_first = button(0.0, 0.0);
        let first_id = on_first.id.clone();
        store.add_component(on_first);

        store.add_page(Page::new("page-2", "Second", "/second"));
        store.add_component(button(5.0, 5.0));
        store.delete_component(&first_id);
        store.update_component(&first_id, &ComponentPatch::position(999.0, 999.0));

        // Page 1 still holds its original component, untouched.
        let first_page = store.page("page-1").unwrap();
        assert_eq!(first_page.len(), 1);
        assert_eq!(first_page.component(&first_id).unwrap().x, 0.0);
    }

    #[test]
    fn test_page_switch_clears_selection() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        store.add_component(instance.clone());
        store.select_component(Some(instance));
        store.add_page(Page::new("page-2", "Second", "/second"));

        store.set_current_page("page-1");
        assert!(store.selected_component().is_none());

        store.set_current_page("missing");
        assert_eq!(store.current_page_id(), "page-1");
    }

    #[test]
    fn test_delete_current_page_falls_back_to_first() {
        let mut store = DocumentStore::new();
        store.add_page(Page::new("page-2", "Second", "/second"));
        assert_eq!(store.current_page_id(), "page-2");

        store.delete_page("page-2");
        assert_eq!(store.current_page_id(), "page-1");
        assert!(store.page("page-2").is_none());
    }

    #[test]
    fn test_duplicate_page_regenerates_component_ids() {
        let mut store = DocumentStore::new();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance);

        store.duplicate_page("page-1");

        let copy = store
            .pages()
            .iter()
            .find(|p| p.id.starts_with("page-1-copy-"))
            .unwrap();
        assert_eq!(copy.name, "Home Copy");
        assert_eq!(copy.route, "/-copy");
        assert!(!copy.is_home_page);
        assert_eq!(copy.len(), 1);
        assert_ne!(copy.components[0].id, id);
    }

    #[test]
    fn test_undo_restores_component_list() {
        let mut store = DocumentStore::new();
        store.push_undo();
        let instance = button(0.0, 0.0);
        let id = instance.id.clone();
        store.add_component(instance);

        assert!(store.can_undo());
        assert!(store.undo());
        assert!(store.current_page().unwrap().is_empty());

        assert!(store.can_redo());
        assert!(store.redo());
        assert!(store.component(&id).is_some());
    }

    #[test]
    fn test_new_change_clears_redo() {
        let mut store = DocumentStore::new();
        store.push_undo();
        store.add_component(button(0.0, 0.0));
        store.undo();
        assert!(store.can_redo());

        store.push_undo();
        store.add_component(button(5.0, 5.0));
        assert!(!store.can_redo());
    }

    #[test]
    fn test_undo_on_empty_stack() {
        let mut store = DocumentStore::new();
        assert!(!store.undo());
        assert!(!store.redo());
    }

    #[test]
    fn test_undo_drops_stale_selection() {
        let mut store = DocumentStore::new();
        store.push_undo();
        let instance = button(0.0, 0.0);
        store.add_component(instance.clone());
        store.select_component(Some(instance));

        store.undo();

        assert!(store.selected_component().is_none());
    }

    #[test]
    fn test_grid_settings_update() {
        let mut store = DocumentStore::new();
        store.update_grid_settings(Some(40.0), None);
        assert_eq!(store.settings.grid_size, 40.0);
        assert!(store.settings.snap_to_grid);

        store.update_grid_settings(None, Some(false));
        assert_eq!(store.settings.grid_size, 40.0);
        assert!(!store.settings.snap_to_grid);
    }
}
