pub mod defaults;

use crate::model::{LayoutType, NodeShape};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canvas-wide settings shared by the diagram builder and the layout helpers.
///
/// Every field has a default, so partial JSON documents deserialize cleanly. Use
/// [`CanvasConfig::with_overrides`] to layer user settings on top of an existing config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CanvasConfig {
    pub layout: LayoutType,
    pub node_width: f64,
    pub node_height: f64,
    pub node_shape: NodeShape,
    pub group_padding: f64,
    pub scope_separator: String,
    pub special_child_processors: Vec<String>,
    pub edge: EdgeRouteConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            layout: defaults::DEFAULT_LAYOUT,
            node_width: defaults::DEFAULT_NODE_WIDTH,
            node_height: defaults::DEFAULT_NODE_HEIGHT,
            node_shape: defaults::DEFAULT_NODE_SHAPE,
            group_padding: defaults::DEFAULT_GROUP_PADDING,
            scope_separator: defaults::DEFAULT_SCOPE_SEPARATOR.to_string(),
            special_child_processors: defaults::SPECIAL_CHILD_PROCESSORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            edge: EdgeRouteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EdgeRouteConfig {
    pub lead_in_default: f64,
    pub lead_in_branching: f64,
    pub tail_length: f64,
    pub arrow_size: f64,
    pub alignment_tolerance: f64,
    pub add_step_icon_size: f64,
    pub terminal_size: f64,
    pub label_clearance: f64,
}

impl Default for EdgeRouteConfig {
    fn default() -> Self {
        Self {
            lead_in_default: defaults::EDGE_LEAD_IN_DEFAULT,
            lead_in_branching: defaults::EDGE_LEAD_IN_BRANCHING,
            tail_length: defaults::EDGE_TAIL_LENGTH,
            arrow_size: defaults::EDGE_ARROW_SIZE,
            alignment_tolerance: defaults::EDGE_ALIGNMENT_TOLERANCE,
            add_step_icon_size: defaults::ADD_STEP_ICON_SIZE,
            terminal_size: defaults::EDGE_TERMINAL_SIZE,
            label_clearance: defaults::EDGE_LABEL_CLEARANCE,
        }
    }
}

impl CanvasConfig {
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::default().with_overrides(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Deep-merges `overrides` onto this config and re-validates the result.
    ///
    /// Objects merge key by key; any other value (including arrays) replaces the current one.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self> {
        if !overrides.is_object() {
            return Err(Error::InvalidConfig {
                message: format!("expected a JSON object, got {}", value_kind(overrides)),
            });
        }
        let mut base = serde_json::to_value(self).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })?;
        deep_merge_value(&mut base, overrides);
        serde_json::from_value(base).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
