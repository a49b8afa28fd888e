//! Processor classification used to tell parallel branches from linear continuations.

use crate::config::CanvasConfig;
use crate::config::defaults::SPECIAL_CHILD_PROCESSORS;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// A named branch marker (`when`, `otherwise`, `doCatch`, ...): always its own branch.
    Special,
    /// Any other processor: continues the primary branch.
    Plain,
}

#[derive(Debug, Clone)]
pub struct ProcessorCatalog {
    special: FxHashSet<String>,
}

impl Default for ProcessorCatalog {
    fn default() -> Self {
        Self::new(SPECIAL_CHILD_PROCESSORS.iter().copied())
    }
}

impl ProcessorCatalog {
    pub fn new<I, S>(special_child_processors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            special: special_child_processors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.special_child_processors.iter().cloned())
    }

    pub fn branch_kind(&self, processor_name: &str) -> BranchKind {
        if self.special.contains(processor_name) {
            BranchKind::Special
        } else {
            BranchKind::Plain
        }
    }

    pub fn is_special(&self, processor_name: &str) -> bool {
        self.branch_kind(processor_name) == BranchKind::Special
    }
}
