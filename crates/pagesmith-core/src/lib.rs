//! Pagesmith Core Library
//!
//! Platform-agnostic document model and editing logic for the Pagesmith
//! visual page builder: pages of absolutely-positioned components, the
//! selection/clipboard model, drag and resize interactions with
//! frame-coalesced updates, drop placement, and persistence.

pub mod component;
pub mod events;
pub mod geometry;
pub mod interaction;
pub mod page;
pub mod path;
pub mod persist;
pub mod placement;
pub mod render;
pub mod storage;
pub mod store;

pub use component::{ComponentId, ComponentInstance, ComponentPatch, WidgetDefinition, WidgetKind};
pub use events::{ContextMenuHub, ContextMenuRequest, place_context_menu};
pub use geometry::{CanvasSettings, DEFAULT_GRID_SIZE, MIN_COMPONENT_SIZE, snap_axis, snap_point};
pub use interaction::{DragController, InteractionPhase, ResizeDirection};
pub use page::{Page, Seo};
pub use path::{PathError, PathSegment};
pub use persist::{PersistedPage, PersistedState};
pub use placement::{DropOutcome, DropPayload, resolve_drop};
pub use render::WidgetRenderer;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use store::DocumentStore;
