//! Arena-backed processor tree implementing [`VisualizationNode`].

use crate::processors::ProcessorCatalog;
use crate::viz::{NodeData, VisualizationNode};
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Serialized form of one step and its nested steps.
///
/// ```json
/// { "id": "choice-1", "processorName": "choice", "group": true,
///   "steps": [ { "id": "when-1", "processorName": "when" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    pub id: String,
    #[serde(default)]
    pub processor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default)]
    pub group: bool,
    #[serde(default)]
    pub placeholder: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepDefinition>,
}

impl StepDefinition {
    pub fn new(id: impl Into<String>, processor_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            processor_name: processor_name.into(),
            component_name: None,
            group: false,
            placeholder: false,
            steps: Vec::new(),
        }
    }

    /// Marks the step as a branching container holding `steps`.
    pub fn with_steps(mut self, steps: Vec<StepDefinition>) -> Self {
        self.group = true;
        self.steps = steps;
        self
    }

    pub fn placeholder(mut self) -> Self {
        self.placeholder = true;
        self
    }
}

#[derive(Debug, Clone)]
struct VizEntry {
    id: String,
    data: NodeData,
    parent: Option<usize>,
    children: Vec<usize>,
    previous: Option<usize>,
    next: Option<usize>,
}

/// An immutable processor tree with parent, child and flow-order links.
///
/// Flow order links consecutive siblings of the same parent, except that branch markers
/// (see [`ProcessorCatalog`]) are never chained to their neighbours: each one starts a branch
/// of its own.
#[derive(Debug, Clone)]
pub struct VizTree {
    entries: Vec<VizEntry>,
    index: FxHashMap<String, usize>,
}

impl VizTree {
    pub fn from_definition(root: &StepDefinition, catalog: &ProcessorCatalog) -> Result<Self> {
        let mut tree = Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
        tree.insert(root, None)?;
        tree.link_siblings(catalog);
        Ok(tree)
    }

    pub fn from_json_str(text: &str, catalog: &ProcessorCatalog) -> Result<Self> {
        let root: StepDefinition = serde_json::from_str(text)?;
        Self::from_definition(&root, catalog)
    }

    pub fn from_yaml_str(text: &str, catalog: &ProcessorCatalog) -> Result<Self> {
        let root: StepDefinition = serde_yaml::from_str(text)?;
        Self::from_definition(&root, catalog)
    }

    fn insert(&mut self, def: &StepDefinition, parent: Option<usize>) -> Result<usize> {
        if def.id.is_empty() {
            let parent = parent.map_or_else(String::new, |p| self.entries[p].id.clone());
            return Err(Error::EmptyStepId { parent });
        }
        if self.index.contains_key(&def.id) {
            return Err(Error::DuplicateStepId { id: def.id.clone() });
        }

        let ix = self.entries.len();
        self.entries.push(VizEntry {
            id: def.id.clone(),
            data: NodeData {
                is_group: def.group,
                is_placeholder: def.placeholder,
                processor_name: def.processor_name.clone(),
                component_name: def.component_name.clone(),
            },
            parent,
            children: Vec::with_capacity(def.steps.len()),
            previous: None,
            next: None,
        });
        self.index.insert(def.id.clone(), ix);

        for step in &def.steps {
            let child = self.insert(step, Some(ix))?;
            self.entries[ix].children.push(child);
        }
        Ok(ix)
    }

    fn link_siblings(&mut self, catalog: &ProcessorCatalog) {
        for parent in 0..self.entries.len() {
            let children = self.entries[parent].children.clone();
            for pair in children.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if catalog.is_special(&self.entries[a].data.processor_name)
                    || catalog.is_special(&self.entries[b].data.processor_name)
                {
                    continue;
                }
                self.entries[a].next = Some(b);
                self.entries[b].previous = Some(a);
            }
        }
    }

    /// Points `from`'s flow successor at `to` (and `to`'s predecessor back at `from`).
    ///
    /// Lets callers model flow continuations that leave the parent, e.g. the step after a
    /// nested construct. Returns `false` if either id is unknown.
    pub fn set_next(&mut self, from: &str, to: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };
        if let Some(old) = self.entries[a].next.replace(b) {
            self.entries[old].previous = None;
        }
        if let Some(old) = self.entries[b].previous.replace(a) {
            self.entries[old].next = None;
        }
        self.entries[a].next = Some(b);
        true
    }

    pub fn root(&self) -> VizNodeRef<'_> {
        VizNodeRef { tree: self, ix: 0 }
    }

    pub fn node(&self, id: &str) -> Option<VizNodeRef<'_>> {
        self.index
            .get(id)
            .map(|&ix| VizNodeRef { tree: self, ix })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Borrowed handle onto a node of a [`VizTree`].
#[derive(Debug, Clone, Copy)]
pub struct VizNodeRef<'a> {
    tree: &'a VizTree,
    ix: usize,
}

impl<'a> VizNodeRef<'a> {
    fn entry(&self) -> &'a VizEntry {
        &self.tree.entries[self.ix]
    }

    fn at(&self, ix: usize) -> Self {
        Self { tree: self.tree, ix }
    }
}

impl PartialEq for VizNodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.ix == other.ix
    }
}

impl Eq for VizNodeRef<'_> {}

impl VisualizationNode for VizNodeRef<'_> {
    fn id(&self) -> &str {
        &self.entry().id
    }

    fn data(&self) -> &NodeData {
        &self.entry().data
    }

    fn children(&self) -> Vec<Self> {
        self.entry().children.iter().map(|&c| self.at(c)).collect()
    }

    fn parent_node(&self) -> Option<Self> {
        self.entry().parent.map(|p| self.at(p))
    }

    fn previous_node(&self) -> Option<Self> {
        self.entry().previous.map(|p| self.at(p))
    }

    fn next_node(&self) -> Option<Self> {
        self.entry().next.map(|n| self.at(n))
    }
}
