//! Renderer seam.
//!
//! The core never draws. A host supplies a [`WidgetRenderer`] that turns a
//! component instance into whatever its display layer understands; the only
//! way visual output feeds back into the document is through the named
//! store operations.

use crate::component::ComponentInstance;

/// Turns component instances into host-specific visual output.
///
/// Implementations must be pure in the component: the same instance and
/// preview flag always produce the same output, and rendering never mutates
/// document state.
pub trait WidgetRenderer {
    /// Host-specific visual representation.
    type Output;

    /// Render one component. `is_preview` distinguishes the library
    /// preview tile from the live canvas rendition.
    fn render(&self, instance: &ComponentInstance, is_preview: bool) -> Self::Output;
}
