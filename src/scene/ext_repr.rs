//! External (serializable) representation of a scene.

use crate::scene::{NodeKey, Outline, SceneTree, Shape};
use crate::util::assertions::tree_links_are_consistent;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtScene {
    pub name: String,
    pub nodes: Vec<ExtNode>,
}

/// A group (with children) or a shape (with an outline).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    /// Outer area reported by the renderer, computed from the outline if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExtNode>,
}

pub fn import(ext_scene: &ExtScene) -> SceneTree {
    let mut tree = SceneTree::new();
    for node in &ext_scene.nodes {
        import_node(&mut tree, None, node);
    }
    debug_assert!(tree_links_are_consistent(&tree));
    tree
}

fn import_node(tree: &mut SceneTree, parent: Option<NodeKey>, ext_node: &ExtNode) {
    let shape = ext_node.outline.clone().map(|outline| {
        let shape = Shape::new(outline);
        match ext_node.area {
            Some(area) => shape.with_outer_area(area),
            None => shape,
        }
    });
    let key = tree.insert(parent, ext_node.id.clone(), shape);
    for child in &ext_node.children {
        import_node(tree, Some(key), child);
    }
}

pub fn export(tree: &SceneTree, name: &str) -> ExtScene {
    ExtScene {
        name: name.to_string(),
        nodes: tree.roots().iter().map(|&k| export_node(tree, k)).collect(),
    }
}

fn export_node(tree: &SceneTree, key: NodeKey) -> ExtNode {
    let node = &tree[key];
    ExtNode {
        id: node.id.clone(),
        outline: node.shape.as_ref().map(|s| s.outline.clone()),
        area: node.shape.as_ref().map(|s| s.outer_area),
        children: node.children.iter().map(|&c| export_node(tree, c)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "name": "two circles",
        "nodes": [
            {
                "id": "group",
                "children": [
                    { "id": "big", "outline": { "type": "rect", "x": -100, "y": -100, "width": 200, "height": 200 } },
                    { "outline": { "type": "path", "points": [[0, 120], [50, 170], [0, 220], [-50, 170]], "closed": true }, "area": 5000 }
                ]
            },
            { "id": "line", "outline": { "type": "line", "start": [-300, 0], "end": [300, 0] } }
        ]
    }"#;

    #[test]
    fn import_builds_the_hierarchy() {
        let ext: ExtScene = serde_json::from_str(SCENE).unwrap();
        let tree = import(&ext);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots().len(), 2);

        let group = tree.find("group").unwrap();
        assert_eq!(tree[group].children.len(), 2);
        assert!(tree[group].shape.is_none());

        let anonymous = tree[group].children[1];
        assert_eq!(tree[anonymous].id, None);
        let shape = tree[anonymous].shape.as_ref().unwrap();
        assert_eq!(shape.outer_area, 5000.0);
        assert_eq!(shape.polygon.len(), 4);
        assert_eq!(shape.path.len(), 5);

        let big = tree.find("big").unwrap();
        assert_eq!(tree[big].shape.as_ref().unwrap().outer_area, 40000.0);
        assert!(tree.is_ancestor(group, big));
    }

    #[test]
    fn export_preserves_structure() {
        let ext: ExtScene = serde_json::from_str(SCENE).unwrap();
        let tree = import(&ext);
        let exported = export(&tree, "copy");
        assert_eq!(exported.nodes.len(), 2);
        assert_eq!(exported.nodes[0].children.len(), 2);

        let reimported = import(&exported);
        assert_eq!(reimported.len(), tree.len());
        assert_eq!(reimported.leaves().len(), 3);
    }
}
