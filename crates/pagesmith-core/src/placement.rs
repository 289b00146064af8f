//! Drop/placement resolution.
//!
//! Converts a drop event — either a new widget dragged from the library or
//! an existing component dragged across the canvas — into a document
//! mutation. The pointer arrives in screen space; the canvas rectangle and
//! the zoom factor map it into canvas space.

use crate::component::{ComponentId, WidgetDefinition};
use crate::geometry::clamp_origin;
use crate::store::DocumentStore;
use kurbo::{Point, Rect};

/// What got dropped on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DropPayload {
    /// A widget definition dragged from the component library.
    NewWidget { definition: WidgetDefinition },
    /// An existing component released after a cross-canvas drag.
    Existing { component_id: ComponentId },
}

/// Outcome of a resolved drop, mostly for callers that want to react
/// (e.g. scroll the new component into view).
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// A new component was created and selected.
    Created { component_id: ComponentId },
    /// An existing component was moved; selection untouched.
    Moved { component_id: ComponentId },
}

/// Map a screen-space pointer offset into canvas space.
///
/// The drop point is recentered under the pointer by subtracting half the
/// widget size, then clamped to the canvas and snapped if enabled.
fn drop_position(
    store: &DocumentStore,
    client: Point,
    canvas_rect: Rect,
    half_size: (f64, f64),
) -> Point {
    let scale = store.settings.canvas_scale;
    let raw = Point::new(
        (client.x - canvas_rect.x0) / scale - half_size.0,
        (client.y - canvas_rect.y0) / scale - half_size.1,
    );
    let clamped = clamp_origin(raw);
    Point::new(
        store.settings.snap_if_enabled(clamped.x),
        store.settings.snap_if_enabled(clamped.y),
    )
}

/// Resolve a drop into a store mutation.
///
/// Returns `None` without mutating anything when the payload cannot be
/// placed: an unknown component id, or a new-widget definition missing its
/// default size (a caller-contract violation, logged and discarded).
pub fn resolve_drop(
    store: &mut DocumentStore,
    payload: DropPayload,
    client: Point,
    canvas_rect: Rect,
) -> Option<DropOutcome> {
    match payload {
        DropPayload::Existing { component_id } => {
            let component = store.component(&component_id)?;
            let half = (component.width / 2.0, component.height / 2.0);
            let position = drop_position(store, client, canvas_rect, half);
            store.move_component(&component_id, position.x, position.y);
            Some(DropOutcome::Moved { component_id })
        }
        DropPayload::NewWidget { definition } => {
            let Some(size) = definition.default_size else {
                log::debug!(
                    "discarding drop of {:?}: definition has no default size",
                    definition.kind
                );
                return None;
            };
            let half = (size.width / 2.0, size.height / 2.0);
            let position = drop_position(store, client, canvas_rect, half);
            // default_size is present, so instantiate cannot fail here.
            let instance = definition.instantiate(position.x, position.y)?;
            let component_id = instance.id.clone();
            store.add_component(instance.clone());
            store.select_component(Some(instance));
            Some(DropOutcome::Created { component_id })
        }
    }
}
