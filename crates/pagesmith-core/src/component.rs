//! Component instances and widget definitions.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

/// Identifier of a component instance.
///
/// Freshly dropped components get a UUID; components derived from an
/// existing one carry a readable suffix (`"{orig}-copy-{ts}"`,
/// `"{orig}-paste-{ts}"`) so their origin stays visible in the layer list.
pub type ComponentId = String;

/// Closed set of widget tags the canvas knows how to place.
///
/// The rendering library owns what each tag looks like; the core only
/// carries the tag through the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Button,
    Input,
    Text,
    Image,
    Container,
    Table,
    Chart,
    Select,
    Checkbox,
    Radio,
    Form,
    Modal,
    Tabs,
    List,
    Datepicker,
    Switch,
    Slider,
    Progress,
    Card,
    Divider,
    Badge,
    Avatar,
    Tooltip,
    Alert,
    Breadcrumb,
    Pagination,
    Rating,
    Timeline,
    Calendar,
    Fileupload,
    Video,
    Audio,
    Map,
    Iframe,
    Code,
    Json,
    Markdown,
}

/// A widget placed on a page.
///
/// Position and size are canvas-space coordinates (top-left origin), never
/// pre-multiplied by the canvas zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Unique id, stable for the lifetime of the instance.
    pub id: ComponentId,
    /// Widget tag.
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Dynamic widget properties, keyed by dotted paths via [`crate::path`].
    pub props: Map<String, Value>,
    /// Dynamic style bag, same access rules as `props`.
    pub style: Map<String, Value>,
    /// Data bindings (expression strings), interpreted by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<HashMap<String, String>>,
    /// Event handler references, interpreted by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<HashMap<String, String>>,
}

impl ComponentInstance {
    /// Create an instance with a fresh UUID at the given position.
    pub fn new(kind: WidgetKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            x,
            y,
            width,
            height,
            props: Map::new(),
            style: Map::new(),
            bindings: None,
            events: None,
        }
    }

    /// Top-left corner as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding rectangle in canvas space.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Clone with a derived id and an offset, used by duplicate.
    pub(crate) fn cloned_with_id(&self, id: ComponentId, dx: f64, dy: f64) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.x += dx;
        copy.y += dy;
        copy
    }
}

/// Partial update merged into a [`ComponentInstance`].
///
/// Mirrors the merge semantics of a partial object update: only fields
/// that are present replace the instance's fields, everything else is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<HashMap<String, String>>,
}

impl ComponentPatch {
    /// Patch that only moves the component.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that only resizes the component.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Patch covering the full geometry, used by resize interactions that
    /// shift the origin while changing the size.
    pub fn geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Merge this patch into an instance.
    pub fn apply_to(&self, instance: &mut ComponentInstance) {
        if let Some(x) = self.x {
            instance.x = x;
        }
        if let Some(y) = self.y {
            instance.y = y;
        }
        if let Some(width) = self.width {
            instance.width = width;
        }
        if let Some(height) = self.height {
            instance.height = height;
        }
        if let Some(props) = &self.props {
            instance.props = props.clone();
        }
        if let Some(style) = &self.style {
            instance.style = style.clone();
        }
        if let Some(bindings) = &self.bindings {
            instance.bindings = Some(bindings.clone());
        }
        if let Some(events) = &self.events {
            instance.events = Some(events.clone());
        }
    }
}

/// Library entry describing how a widget is instantiated on drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefinition {
    pub kind: WidgetKind,
    /// Display name shown in the component library.
    pub name: String,
    /// Size a new instance starts with. A definition without a size cannot
    /// be dropped; the placement resolver treats that as a contract
    /// violation and aborts.
    pub default_size: Option<Size>,
    #[serde(default)]
    pub default_props: Map<String, Value>,
    #[serde(default)]
    pub default_style: Map<String, Value>,
}

impl WidgetDefinition {
    /// Create a definition with the given default size.
    pub fn new(kind: WidgetKind, name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            kind,
            name: name.into(),
            default_size: Some(Size::new(width, height)),
            default_props: Map::new(),
            default_style: Map::new(),
        }
    }

    /// Build a fresh instance from this definition at a canvas position.
    /// Returns `None` when the definition has no default size.
    pub fn instantiate(&self, x: f64, y: f64) -> Option<ComponentInstance> {
        let size = self.default_size?;
        let mut instance = ComponentInstance::new(self.kind, x, y, size.width, size.height);
        instance.props = self.default_props.clone();
        instance.style = self.default_style.clone();
        Some(instance)
    }
}
