//! The UI-schema element tree.
//!
//! A UI schema describes *how* data is laid out, separately from the JSON
//! Schema describing *what* the data is. Controls reference the data schema
//! through a schema-space scope (`#/properties/name`); layouts carry an
//! ordered list of child elements.
//!
//! The JSON encoding is the conventional one: the variant tag lives in a
//! `"type"` field, e.g. `{"type": "VerticalLayout", "elements": [...]}`.

use crate::path::{Path, scope_format};
use serde::{Deserialize, Serialize};

/// Free-form per-control options (e.g. `{"multi": true}`). Interpretation
/// is entirely up to the rendering layer.
pub type Options = serde_json::Map<String, serde_json::Value>;

/// One node of a UI-schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiSchemaElement {
    /// A single editable field bound to a schema fragment.
    Control {
        /// Schema-space scope of the controlled fragment.
        #[serde(with = "scope_format")]
        scope: Path,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Options::is_empty")]
        options: Options,
    },

    /// Children stacked top to bottom.
    VerticalLayout {
        #[serde(default)]
        elements: Vec<UiSchemaElement>,
    },

    /// Children placed side by side.
    HorizontalLayout {
        #[serde(default)]
        elements: Vec<UiSchemaElement>,
    },

    /// A titled box around its children.
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        elements: Vec<UiSchemaElement>,
    },

    /// Tabbed container; children are expected to be `Category` elements.
    Categorization {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        elements: Vec<UiSchemaElement>,
    },

    /// One tab of a `Categorization`.
    Category {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        elements: Vec<UiSchemaElement>,
    },

    /// Static text with no data binding.
    Label { text: String },
}

impl UiSchemaElement {
    /// Shorthand for an unlabeled control.
    #[must_use]
    pub fn control(scope: Path) -> Self {
        Self::Control {
            scope,
            label: None,
            options: Options::new(),
        }
    }

    /// Shorthand for a labeled control.
    #[must_use]
    pub fn labeled_control(scope: Path, label: impl Into<String>) -> Self {
        Self::Control {
            scope,
            label: Some(label.into()),
            options: Options::new(),
        }
    }

    /// Shorthand for a vertical layout.
    #[must_use]
    pub fn vertical(elements: Vec<UiSchemaElement>) -> Self {
        Self::VerticalLayout { elements }
    }

    /// Shorthand for a horizontal layout.
    #[must_use]
    pub fn horizontal(elements: Vec<UiSchemaElement>) -> Self {
        Self::HorizontalLayout { elements }
    }

    /// Shorthand for a labeled group.
    #[must_use]
    pub fn group(label: impl Into<String>, elements: Vec<UiSchemaElement>) -> Self {
        Self::Group {
            label: Some(label.into()),
            elements,
        }
    }

    /// The control's scope, when this element is a control.
    #[must_use]
    pub fn scope(&self) -> Option<&Path> {
        match self {
            Self::Control { scope, .. } => Some(scope),
            _ => None,
        }
    }

    /// The element's label, when it carries one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Control { label, .. }
            | Self::Group { label, .. }
            | Self::Categorization { label, .. }
            | Self::Category { label, .. } => label.as_deref(),
            Self::Label { text } => Some(text),
            Self::VerticalLayout { .. } | Self::HorizontalLayout { .. } => None,
        }
    }

    /// An option value by key, when this element is a control.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        match self {
            Self::Control { options, .. } => options.get(key),
            _ => None,
        }
    }

    /// Child elements of a layout; empty for controls and labels.
    #[must_use]
    pub fn elements(&self) -> &[UiSchemaElement] {
        match self {
            Self::VerticalLayout { elements }
            | Self::HorizontalLayout { elements }
            | Self::Group { elements, .. }
            | Self::Categorization { elements, .. }
            | Self::Category { elements, .. } => elements,
            Self::Control { .. } | Self::Label { .. } => &[],
        }
    }

    /// True for the layout variants (anything that owns child elements).
    #[must_use]
    pub fn is_layout(&self) -> bool {
        !matches!(self, Self::Control { .. } | Self::Label { .. })
    }
}
