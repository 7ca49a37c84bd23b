//! Inheritance tree document, reveal order and explanation lookup.

use std::fmt;

use generational_arena::Index;
use serde::{Deserialize, Serialize};

use crate::domain::arena::{NodeData, NodeKind, TreeArena};
use crate::domain::entities::{AboPhenotype, Genotype, RhSign};
use crate::domain::inheritance::ChildSet;

pub const ROOT_LABEL: &str = "Blood Type Inheritance";
pub const CHILD_GROUP_LABEL: &str = "Possible Children Types";

/// Reveal steps before this index carry no explanation (root and first parent).
const FIRST_EXPLAINED_STEP: usize = 2;

/// Educational note shown next to a revealed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Explanation {
    RecessiveO,
    DominantAntigen,
    RhDominant,
    RhNegativeOnly,
}

impl Explanation {
    /// Substring lookup on a node label, first match wins.
    ///
    /// Any label containing `O` resolves to [`Explanation::RecessiveO`], even
    /// when A or B also appear. Labels without a group letter or `+` fall
    /// through to [`Explanation::RhNegativeOnly`].
    pub fn for_label(label: &str) -> Self {
        if label.contains('O') {
            Explanation::RecessiveO
        } else if label.contains('A') || label.contains('B') {
            Explanation::DominantAntigen
        } else if label.contains('+') {
            Explanation::RhDominant
        } else {
            Explanation::RhNegativeOnly
        }
    }

    /// Every explanation that applies to a blood type, one per feature.
    pub fn for_genotype(genotype: Genotype) -> Vec<Self> {
        let abo = match genotype.abo {
            AboPhenotype::O => Explanation::RecessiveO,
            AboPhenotype::A | AboPhenotype::B | AboPhenotype::AB => Explanation::DominantAntigen,
        };
        let rh = match genotype.rh {
            RhSign::Positive => Explanation::RhDominant,
            RhSign::Negative => Explanation::RhNegativeOnly,
        };
        vec![abo, rh]
    }

    pub fn message(self) -> &'static str {
        match self {
            Explanation::RecessiveO => {
                "\"O\" is recessive, meaning it only appears if no dominant A or B is inherited."
            }
            Explanation::DominantAntigen => {
                "Blood types \"A\" and \"B\" are dominant, meaning they will be inherited if at least one parent carries them."
            }
            Explanation::RhDominant => {
                "Rh+ is dominant, meaning a child will inherit it if at least one parent has it."
            }
            Explanation::RhNegativeOnly => "\"Rh-\" is only inherited if both parents are Rh-.",
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether a label carries an A or B antigen (drawn in the antigen colour).
pub fn has_antigen(label: &str) -> bool {
    label.contains('A') || label.contains('B')
}

impl NodeKind {
    /// Blood type carried by parent and child nodes.
    pub fn genotype(self) -> Option<Genotype> {
        match self {
            NodeKind::Parent(genotype) | NodeKind::Child(genotype) => Some(genotype),
            NodeKind::Root | NodeKind::ChildGroup => None,
        }
    }
}

/// One node reveal in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub depth: usize,
    pub label: String,
    pub kind: NodeKind,
    /// Label of the node the connecting edge starts from
    pub parent_label: Option<String>,
    pub explanation: Option<Explanation>,
}

impl RevealStep {
    /// Blood type nodes go by their ABO group, headings by their text.
    pub fn has_antigen(&self) -> bool {
        match self.kind.genotype() {
            Some(genotype) => genotype.abo != AboPhenotype::O,
            None => has_antigen(&self.label),
        }
    }

    pub fn is_last_of(&self, total: usize) -> bool {
        self.index + 1 == total
    }
}

/// Serialisable `{name, children}` hierarchy, the shape hierarchical layout
/// renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyDocument>,
}

impl HierarchyDocument {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// Fully built inheritance tree for one pair of parents.
#[derive(Debug)]
pub struct PresentationTree {
    pub parent1: Genotype,
    pub parent2: Genotype,
    pub children: ChildSet,
    tree: TreeArena,
}

impl PresentationTree {
    pub fn new(parent1: Genotype, parent2: Genotype, children: ChildSet) -> Self {
        let mut tree = TreeArena::new();
        let root = tree.insert_node(
            NodeData {
                label: ROOT_LABEL.to_string(),
                kind: NodeKind::Root,
            },
            None,
        );
        for (position, parent) in [(1, parent1), (2, parent2)] {
            tree.insert_node(
                NodeData {
                    label: format!("Parent {}: {}", position, parent),
                    kind: NodeKind::Parent(parent),
                },
                Some(root),
            );
        }
        let group = tree.insert_node(
            NodeData {
                label: CHILD_GROUP_LABEL.to_string(),
                kind: NodeKind::ChildGroup,
            },
            Some(root),
        );
        for child in &children {
            tree.insert_node(
                NodeData {
                    label: child.to_string(),
                    kind: NodeKind::Child(*child),
                },
                Some(group),
            );
        }

        Self {
            parent1,
            parent2,
            children,
            tree,
        }
    }

    /// Nodes in breadth-first reveal order with their edge and explanation.
    pub fn reveal_steps(&self) -> Vec<RevealStep> {
        self.tree
            .iter_breadth_first()
            .enumerate()
            .map(|(index, (_, depth, node))| RevealStep {
                index,
                depth,
                label: node.data.label.clone(),
                kind: node.data.kind,
                parent_label: node.parent.and_then(|p| self.label_of(p)),
                explanation: (index >= FIRST_EXPLAINED_STEP)
                    .then(|| Explanation::for_label(&node.data.label)),
            })
            .collect()
    }

    fn label_of(&self, idx: Index) -> Option<String> {
        self.tree.get_node(idx).map(|n| n.data.label.clone())
    }

    pub fn to_document(&self) -> HierarchyDocument {
        self.tree
            .root()
            .map(|root| self.document_at(root))
            .unwrap_or_else(|| HierarchyDocument::leaf(ROOT_LABEL))
    }

    fn document_at(&self, idx: Index) -> HierarchyDocument {
        match self.tree.get_node(idx) {
            Some(node) => HierarchyDocument {
                name: node.data.label.clone(),
                children: node
                    .children
                    .iter()
                    .map(|&child| self.document_at(child))
                    .collect(),
            },
            None => HierarchyDocument::leaf(String::new()),
        }
    }

    pub fn render(&self) -> String {
        self.tree
            .to_termtree()
            .map(|t| t.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inheritance::resolve;

    fn g(s: &str) -> Genotype {
        s.parse().unwrap()
    }

    #[test]
    fn given_label_when_explaining_then_first_match_wins() {
        assert_eq!(Explanation::for_label("O-"), Explanation::RecessiveO);
        assert_eq!(Explanation::for_label("AB+"), Explanation::DominantAntigen);
        assert_eq!(Explanation::for_label("Parent 2: O+"), Explanation::RecessiveO);
        assert_eq!(Explanation::for_label("+"), Explanation::RhDominant);
        assert_eq!(
            Explanation::for_label(CHILD_GROUP_LABEL),
            Explanation::RhNegativeOnly
        );
    }

    #[test]
    fn given_genotype_when_feature_explanations_then_one_per_feature() {
        assert_eq!(
            Explanation::for_genotype(g("O+")),
            [Explanation::RecessiveO, Explanation::RhDominant]
        );
        assert_eq!(
            Explanation::for_genotype(g("AB-")),
            [Explanation::DominantAntigen, Explanation::RhNegativeOnly]
        );
    }

    #[test]
    fn given_resolution_when_building_tree_then_reveal_steps_are_breadth_first() {
        let (p1, p2) = (g("A-"), g("B-"));
        let tree = PresentationTree::new(p1, p2, resolve(p1, p2));
        let steps = tree.reveal_steps();

        let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                ROOT_LABEL,
                "Parent 1: A-",
                "Parent 2: B-",
                CHILD_GROUP_LABEL,
                "A-",
                "B-",
                "AB-",
                "O-"
            ]
        );
        assert_eq!(steps[0].parent_label, None);
        assert_eq!(steps[4].parent_label.as_deref(), Some(CHILD_GROUP_LABEL));
        assert_eq!(steps[4].depth, 2);
        assert!(steps[0].explanation.is_none());
        assert!(steps[1].explanation.is_none());
        assert_eq!(steps[2].explanation, Some(Explanation::DominantAntigen));
        assert_eq!(steps[7].explanation, Some(Explanation::RecessiveO));
    }

    #[test]
    fn given_tree_when_to_document_then_leaves_have_no_children_key() {
        let (p1, p2) = (g("O-"), g("O-"));
        let tree = PresentationTree::new(p1, p2, resolve(p1, p2));
        let json = serde_json::to_value(tree.to_document()).unwrap();

        assert_eq!(json["name"], ROOT_LABEL);
        assert_eq!(json["children"][0]["name"], "Parent 1: O-");
        assert!(json["children"][0].get("children").is_none());
        assert_eq!(json["children"][2]["children"][0]["name"], "O-");
    }

    #[test]
    fn given_tree_when_render_then_termtree_text() {
        let (p1, p2) = (g("AB+"), g("AB+"));
        let tree = PresentationTree::new(p1, p2, resolve(p1, p2));
        let text = tree.render();
        assert!(text.starts_with(ROOT_LABEL));
        assert_eq!(text.lines().count(), 7);
        assert!(has_antigen("AB+"));
        assert!(!has_antigen("O+"));
    }

    #[test]
    fn given_steps_when_colouring_then_blood_type_nodes_follow_abo_group() {
        let (p1, p2) = (g("A+"), g("O-"));
        let tree = PresentationTree::new(p1, p2, resolve(p1, p2));
        let steps = tree.reveal_steps();

        let antigen: Vec<bool> = steps.iter().map(RevealStep::has_antigen).collect();
        // root, parent A+, parent O-, group, A+, O+
        assert_eq!(antigen, [true, true, false, false, true, false]);
        assert_eq!(steps[1].kind.genotype(), Some(p1));
        assert_eq!(steps[3].kind.genotype(), None);
    }

    #[test]
    fn given_steps_when_checking_last_then_only_final_index_matches() {
        let (p1, p2) = (g("O+"), g("O+"));
        let tree = PresentationTree::new(p1, p2, resolve(p1, p2));
        let steps = tree.reveal_steps();

        let last: Vec<bool> = steps.iter().map(|s| s.is_last_of(steps.len())).collect();
        assert_eq!(last, [false, false, false, false, true]);
        assert!(steps.iter().enumerate().all(|(i, s)| s.index == i));
    }
}
