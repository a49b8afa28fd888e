//! Serialized description of a whole canvas.
//!
//! ```yaml
//! layout: DagreHorizontal
//! config:
//!   nodeWidth: 120
//! flows:
//!   - id: route-1
//!     root: { id: route, processorName: route, group: true, steps: [...] }
//!   - id: route-2
//!     visible: false
//!     root: { id: from, processorName: from }
//! ```

use crate::Result;
use crate::canvas::Canvas;
use flowcanvas_core::{CanvasConfig, LayoutType, StepDefinition};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutType>,
    /// Overrides deep-merged onto the base config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default)]
    pub flows: Vec<FlowEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEntry {
    pub id: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    pub root: StepDefinition,
}

fn visible_by_default() -> bool {
    true
}

impl FlowsDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Builds a canvas with every flow of the document, applying the document's config
    /// overrides and layout on top of `base`.
    pub fn to_canvas(&self, base: &CanvasConfig) -> Result<Canvas> {
        let config = match &self.config {
            Some(overrides) => base.with_overrides(overrides)?,
            None => base.clone(),
        };
        let mut canvas = Canvas::new(config);
        if let Some(layout) = self.layout {
            canvas.set_layout(layout);
        }
        for flow in &self.flows {
            canvas.add_definition(flow.id.as_str(), &flow.root)?;
            if !flow.visible {
                canvas.set_visible(&flow.id, false)?;
            }
        }
        Ok(canvas)
    }
}
