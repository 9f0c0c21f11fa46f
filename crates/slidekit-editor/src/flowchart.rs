//! Flow-chart editing.
//!
//! Nodes and arrows are separate sub-documents, but arrows reference
//! nodes by id, so removing a node also drops every arrow touching it.
//! Both arrays are written in the same user action.

use slidekit_model::subdoc::{bounds, FlowArrow, FlowNode, LegendItem};
use slidekit_store::ContentStore;

use crate::list_ops::{EditOutcome, SubdocEditor};

/// Content keys of the flow-chart sub-documents
pub const NODES_KEY: &str = "nodes";
pub const ARROWS_KEY: &str = "arrows";
pub const LEGEND_KEY: &str = "legend";

/// Editing session for one flow-chart page
pub struct FlowChartEditor {
    pub nodes: SubdocEditor<FlowNode>,
    pub arrows: SubdocEditor<FlowArrow>,
    pub legend: SubdocEditor<LegendItem>,
}

impl FlowChartEditor {
    pub fn open(store: &ContentStore, page_id: &str) -> Self {
        Self {
            nodes: SubdocEditor::open(store, page_id, NODES_KEY, bounds::FLOW_NODES),
            arrows: SubdocEditor::open(store, page_id, ARROWS_KEY, bounds::FLOW_ARROWS),
            legend: SubdocEditor::open(store, page_id, LEGEND_KEY, bounds::LEGEND_ITEMS),
        }
    }

    /// Add a node at a canvas position
    pub fn add_node(&mut self, store: &mut ContentStore, x: f32, y: f32) -> EditOutcome {
        self.nodes.add(store, FlowNode::at(x, y))
    }

    /// Remove a node and cascade-remove every arrow referencing it.
    ///
    /// The node removal is bounds-checked; the cascade is not - an
    /// arrow without both endpoints is never kept.
    pub fn remove_node(&mut self, store: &mut ContentStore, node_id: &str) -> EditOutcome {
        if !self.nodes.remove(store, node_id).is_applied() {
            return EditOutcome::Rejected;
        }
        let dropped = self.arrows.retain(store, |arrow| !arrow.references(node_id));
        if dropped > 0 {
            tracing::debug!(node_id, dropped, "cascade-removed arrows");
        }
        EditOutcome::Applied
    }

    /// Connect two existing nodes. Rejected if either endpoint is
    /// unknown or the arrow list is full.
    pub fn add_arrow(
        &mut self,
        store: &mut ContentStore,
        source_id: &str,
        target_id: &str,
    ) -> EditOutcome {
        let known = |id: &str| self.nodes.records().iter().any(|n| n.id == id);
        if !known(source_id) || !known(target_id) {
            return EditOutcome::Rejected;
        }
        self.arrows.add(store, FlowArrow::between(source_id, target_id))
    }

    pub fn remove_arrow(&mut self, store: &mut ContentStore, arrow_id: &str) -> EditOutcome {
        self.arrows.remove(store, arrow_id)
    }
}
