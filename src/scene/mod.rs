use slotmap::{SlotMap, new_key_type};
use std::ops::Index;

pub mod ext_repr;
pub mod shape;

pub use shape::{Outline, Shape};

new_key_type! {
    /// Unique key for each node in a [`SceneTree`]
    pub struct NodeKey;
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: Option<String>,
    /// Only used to look up ancestry, the tree owns all nodes
    pub parent: Option<NodeKey>,
    pub children: Vec<NodeKey>,
    /// Drawable outline, `None` for pure containers
    pub shape: Option<Shape>,
}

impl SceneNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaves carrying a shape are the only nodes tested for collisions
    pub fn is_collidable(&self) -> bool {
        self.children.is_empty() && self.shape.is_some()
    }
}

/// Hierarchy of groups and shapes, stored in an arena.
#[derive(Debug, Clone, Default)]
pub struct SceneTree {
    nodes: SlotMap<NodeKey, SceneNode>,
    roots: Vec<NodeKey>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under `parent`, or as a new root if `parent` is `None`.
    pub fn insert(
        &mut self,
        parent: Option<NodeKey>,
        id: Option<String>,
        shape: Option<Shape>,
    ) -> NodeKey {
        let key = self.nodes.insert(SceneNode {
            id,
            parent,
            children: vec![],
            shape,
        });
        match parent {
            Some(p) => self.nodes[p].children.push(key),
            None => self.roots.push(key),
        }
        key
    }

    pub fn add_group(&mut self, parent: Option<NodeKey>, id: Option<&str>) -> NodeKey {
        self.insert(parent, id.map(String::from), None)
    }

    pub fn add_shape(
        &mut self,
        parent: Option<NodeKey>,
        id: Option<&str>,
        shape: impl Into<Shape>,
    ) -> NodeKey {
        self.insert(parent, id.map(String::from), Some(shape.into()))
    }

    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn get(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `ancestor` is found while walking up the parent chain of `node`.
    pub fn is_ancestor(&self, ancestor: NodeKey, node: NodeKey) -> bool {
        let mut current = self.nodes[node].parent;
        while let Some(key) = current {
            if key == ancestor {
                return true;
            }
            current = self.nodes[key].parent;
        }
        false
    }

    /// Collidable leaves in depth-first order
    pub fn leaves(&self) -> Vec<NodeKey> {
        let mut leaves = vec![];
        let mut stack = self.roots.iter().rev().copied().collect::<Vec<_>>();
        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            if node.is_collidable() {
                leaves.push(key);
            }
            stack.extend(node.children.iter().rev());
        }
        leaves
    }

    pub fn find(&self, id: &str) -> Option<NodeKey> {
        self.nodes
            .iter()
            .find(|(_, n)| n.id.as_deref() == Some(id))
            .map(|(k, _)| k)
    }

    /// Depth of the deepest node, roots have depth 1
    pub fn depth(&self) -> usize {
        self.nodes
            .keys()
            .map(|k| {
                let mut depth = 1;
                let mut current = self.nodes[k].parent;
                while let Some(p) = current {
                    depth += 1;
                    current = self.nodes[p].parent;
                }
                depth
            })
            .max()
            .unwrap_or(0)
    }
}

impl Index<NodeKey> for SceneTree {
    type Output = SceneNode;

    fn index(&self, key: NodeKey) -> &Self::Output {
        &self.nodes[key]
    }
}
