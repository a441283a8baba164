//! Menu graph assembly.
//!
//! Pages are concatenated in page order and indexed by menu id. Child ids are
//! kept exactly as declared; an edge is recorded in the petgraph store only
//! for references that resolve, so dangling ids never fail assembly.

use menugraph_fetcher::{Menu, PageEnvelope};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct MenuGraph {
    graph: StableDiGraph<Menu, ()>,
    index: HashMap<i64, NodeIndex>,
}

impl MenuGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a menu. A repeated id replaces the stored menu in its original
    /// slot, so iteration order is that of first appearance.
    fn insert(&mut self, menu: Menu) {
        match self.index.get(&menu.id) {
            Some(&idx) => {
                warn!("Duplicate menu id {} replaces earlier record", menu.id);
                self.graph[idx] = menu;
            }
            None => {
                let id = menu.id;
                let idx = self.graph.add_node(menu);
                self.index.insert(id, idx);
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<&Menu> {
        self.index.get(&id).map(|&idx| &self.graph[idx])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Menus in insertion order.
    pub fn menus(&self) -> impl Iterator<Item = &Menu> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Number of resolved child references, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Child references that did not resolve to a menu, duplicates included.
    /// Every declared child either became an edge or is counted here.
    pub fn dangling_count(&self) -> usize {
        self.graph
            .node_indices()
            .map(|idx| {
                let declared = self.graph[idx].child_ids.len();
                declared - self.graph.edges(idx).count()
            })
            .sum()
    }

    /// `(parent, child)` pairs whose child id is not in the graph.
    pub fn dangling_references(&self) -> Vec<(i64, i64)> {
        self.menus()
            .flat_map(|menu| {
                menu.child_ids
                    .iter()
                    .filter(|child| !self.contains(**child))
                    .map(move |child| (menu.id, *child))
            })
            .collect()
    }

    fn link_children(&mut self) {
        self.graph.clear_edges();

        let mut links = Vec::new();
        for source in self.graph.node_indices() {
            for child in &self.graph[source].child_ids {
                if let Some(&target) = self.index.get(child) {
                    links.push((source, target));
                }
            }
        }

        for (source, target) in links {
            self.graph.add_edge(source, target, ());
        }
    }
}

/// Merge every page into a single graph.
pub fn assemble<'a, I>(pages: I) -> MenuGraph
where
    I: IntoIterator<Item = &'a PageEnvelope>,
{
    let mut graph = MenuGraph::new();
    for page in pages {
        for menu in &page.menus {
            graph.insert(menu.clone());
        }
    }
    graph.link_children();

    let dangling = graph.dangling_count();
    if dangling > 0 {
        debug!("{} child references point at unknown menus", dangling);
    }
    debug!(
        "Assembled graph: {} menus, {} resolved references",
        graph.len(),
        graph.edge_count()
    );
    graph
}

impl FromIterator<Menu> for MenuGraph {
    fn from_iter<T: IntoIterator<Item = Menu>>(iter: T) -> Self {
        let mut graph = MenuGraph::new();
        for menu in iter {
            graph.insert(menu);
        }
        graph.link_children();
        graph
    }
}
