// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Trace recorder - makes algorithm state transitions observable.
//!
//! The recorder owns the current color of every node and edge plus a single
//! running aggregate (total weight, flow, color count, pair count). Every
//! recolor appends a deep-copied snapshot of the full state, so the consumer
//! can replay the whole run frame by frame. That costs O(V+E) per recorded
//! call, and trace memory grows as O(calls x (V+E)); the trace is replayed
//! by the consumer, not streamed.
//!
//! Constructed with `record = false` every mutator is a no-op. This lets one
//! algorithm call another internally without polluting the visible trace.

use crate::index::GraphIndex;
use algoviz_common::{EdgeId, NodeId};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Visual state of a node or edge at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepColor {
    Unprocessed,
    Processing,
    Processed,
    Discarded,
    Result,
}

/// Immutable snapshot of the full recorder state at one instant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    pub node_colors: FxHashMap<NodeId, StepColor>,
    pub edge_colors: FxHashMap<EdgeId, StepColor>,
    /// In-progress numeric annotation per edge (current flow, palette index).
    #[serde(default)]
    pub edge_annotations: FxHashMap<EdgeId, i64>,
    /// Running aggregate metric at this instant.
    pub total: Option<i64>,
}

/// Records per-node and per-edge state plus the running aggregate, appending
/// a full snapshot on every recolor.
pub struct TraceRecorder {
    record: bool,
    node_ids: Vec<NodeId>,
    node_colors: FxHashMap<NodeId, StepColor>,
    edge_colors: FxHashMap<EdgeId, StepColor>,
    edge_annotations: FxHashMap<EdgeId, i64>,
    edge_lookup: FxHashMap<(u32, u32), EdgeId>,
    total: Option<i64>,
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Pre-populates every node and edge as `Unprocessed`.
    pub fn new(index: &GraphIndex, record: bool) -> Self {
        let node_ids = index.node_ids().to_vec();
        let node_colors = node_ids
            .iter()
            .map(|id| (id.clone(), StepColor::Unprocessed))
            .collect();
        let edge_colors = index
            .edges()
            .iter()
            .map(|e| (e.id.clone(), StepColor::Unprocessed))
            .collect();

        Self {
            record,
            node_ids,
            node_colors,
            edge_colors,
            edge_annotations: FxHashMap::default(),
            edge_lookup: index.edge_lookup().clone(),
            total: None,
            steps: Vec::new(),
        }
    }

    /// A recorder whose mutators are all no-ops. Used for internal
    /// algorithm-to-algorithm calls.
    pub fn muted(index: &GraphIndex) -> Self {
        Self::new(index, false)
    }

    /// Whether mutations are being recorded.
    pub fn is_recording(&self) -> bool {
        self.record
    }

    /// Recolor a node and append a snapshot.
    pub fn color_node(&mut self, slot: u32, color: StepColor) {
        if !self.record {
            return;
        }
        let id = self.node_ids[slot as usize].clone();
        self.node_colors.insert(id, color);
        self.push_snapshot();
    }

    /// Recolor the edge between two slots and append a snapshot.
    ///
    /// If no edge exists for the pair the call is silently ignored (the
    /// snapshot is still appended) - speculative recoloring during bridge
    /// tests relies on this.
    pub fn color_edge(&mut self, from: u32, to: u32, color: StepColor) {
        if !self.record {
            return;
        }
        if let Some(id) = self.edge_lookup.get(&(from, to)) {
            self.edge_colors.insert(id.clone(), color);
        }
        self.push_snapshot();
    }

    /// Recolor an edge and attach an in-progress numeric annotation to it.
    pub fn color_edge_with_value(&mut self, from: u32, to: u32, color: StepColor, value: i64) {
        if !self.record {
            return;
        }
        if let Some(id) = self.edge_lookup.get(&(from, to)) {
            self.edge_colors.insert(id.clone(), color);
            self.edge_annotations.insert(id.clone(), value);
        }
        self.push_snapshot();
    }

    /// Update the running aggregate. Does not append a snapshot; the next
    /// recolor carries the new value.
    pub fn set_total(&mut self, total: i64) {
        if !self.record {
            return;
        }
        self.total = Some(total);
    }

    fn push_snapshot(&mut self) {
        self.steps.push(Step {
            node_colors: self.node_colors.clone(),
            edge_colors: self.edge_colors.clone(),
            edge_annotations: self.edge_annotations.clone(),
            total: self.total,
        });
    }

    /// Consume the recorder, yielding the ordered step sequence.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
