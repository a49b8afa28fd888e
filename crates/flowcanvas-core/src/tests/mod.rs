use crate::*;

mod config;
mod scope;
mod tree;

pub(crate) fn step(id: &str, processor_name: &str) -> StepDefinition {
    StepDefinition::new(id, processor_name)
}

pub(crate) fn group(id: &str, processor_name: &str, steps: Vec<StepDefinition>) -> StepDefinition {
    StepDefinition::new(id, processor_name).with_steps(steps)
}

pub(crate) fn viz_tree(root: &StepDefinition) -> VizTree {
    VizTree::from_definition(root, &ProcessorCatalog::default()).unwrap()
}

pub(crate) fn edge_pairs(diagram: &CanvasNodesAndEdges) -> Vec<(&str, &str)> {
    diagram
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect()
}

/// `from -> choice { when: stepA, otherwise: stepB } -> stepC` inside a route group.
pub(crate) fn choice_route() -> StepDefinition {
    group(
        "route",
        "route",
        vec![
            step("from", "from"),
            group(
                "choice",
                "choice",
                vec![step("stepA", "when"), step("stepB", "otherwise")],
            ),
            step("stepC", "log"),
        ],
    )
}
