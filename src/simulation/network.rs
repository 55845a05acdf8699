// src/simulation/network.rs

use serde::Serialize;

use crate::model::{Dc, GeoPoint, Store};

pub type NodeIndex = usize;

/// The demand node always sits at index 0.
pub const DEMAND_NODE: NodeIndex = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Demand,
    DistributionCenter { dc_id: u32 },
    Store { store_id: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub distance_km: f64,
}

/// Undirected graph of the retail network.
///
/// Node layout: demand node, then one node per DC, then one node per store,
/// in generation order. Every store links to the demand node and to its
/// nearest DC when one exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    nodes: Vec<NodeKind>,
    edges: Vec<Edge>,
}

impl Network {
    /// A network holding only the demand node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeKind::Demand],
            edges: Vec::new(),
        }
    }

    pub fn build(dcs: &[Dc], stores: &[Store]) -> Self {
        let mut network = Self::new();

        let dc_nodes: Vec<NodeIndex> = dcs
            .iter()
            .map(|dc| network.add_node(NodeKind::DistributionCenter { dc_id: dc.id }))
            .collect();

        for store in stores {
            let node = network.add_node(NodeKind::Store { store_id: store.id });
            network.add_edge(node, DEMAND_NODE, 0.0);

            if let Some((dc_pos, distance_km)) = nearest_dc(store.location(), dcs) {
                network.add_edge(dc_nodes[dc_pos], node, distance_km);
            }
        }
        network
    }

    pub fn add_node(&mut self, kind: NodeKind) -> NodeIndex {
        self.nodes.push(kind);
        self.nodes.len() - 1
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, distance_km: f64) {
        self.edges.push(Edge { from, to, distance_km });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[NodeKind] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: NodeIndex) -> Option<NodeKind> {
        self.nodes.get(index).copied()
    }

    pub fn store_node(&self, store_id: u32) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|kind| *kind == NodeKind::Store { store_id })
    }

    pub fn dc_node(&self, dc_id: u32) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|kind| *kind == NodeKind::DistributionCenter { dc_id })
    }

    /// Nodes sharing an edge with `index`, in edge insertion order.
    pub fn neighbors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.from == index {
                    Some(e.to)
                } else if e.to == index {
                    Some(e.from)
                } else {
                    None
                }
            })
            .collect()
    }

    /// The DC node serving a store node, if any.
    pub fn supplier_of(&self, store_node: NodeIndex) -> Option<NodeIndex> {
        self.neighbors(store_node)
            .into_iter()
            .find(|&n| matches!(self.node(n), Some(NodeKind::DistributionCenter { .. })))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

/// Position in `dcs` of the closest DC and its distance.
fn nearest_dc(point: GeoPoint, dcs: &[Dc]) -> Option<(usize, f64)> {
    dcs.iter()
        .map(|dc| point.distance_km(&dc.location()))
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
