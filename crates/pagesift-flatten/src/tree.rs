use pagesift_directive::Segment;
use serde_json::Value as JsonValue;

/// One node of a [`DocumentTree`]: a borrowed document value plus the path
/// that reaches it from the root.
#[derive(Debug)]
pub struct TreeNode<'doc> {
    value: &'doc JsonValue,
    path: Vec<Segment>,
    children: Vec<TreeNode<'doc>>,
}

impl<'doc> TreeNode<'doc> {
    pub fn value(&self) -> &'doc JsonValue {
        self.value
    }

    /// Key/index segments from the document root to this node.
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    pub fn children(&self) -> &[TreeNode<'doc>] {
        &self.children
    }

    /// A node is a leaf iff its value is neither an object nor an array.
    pub fn is_leaf(&self) -> bool {
        !matches!(self.value, JsonValue::Object(_) | JsonValue::Array(_))
    }

    fn grow(value: &'doc JsonValue, path: Vec<Segment>, leaves: &mut Vec<Leaf<'doc>>) -> Self {
        let mut children = Vec::new();
        match value {
            JsonValue::Object(entries) => {
                for (key, child) in entries {
                    let mut child_path = path.clone();
                    child_path.push(Segment::Key(key.clone()));
                    children.push(TreeNode::grow(child, child_path, leaves));
                }
            }
            JsonValue::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    let mut child_path = path.clone();
                    child_path.push(Segment::Index(index));
                    children.push(TreeNode::grow(child, child_path, leaves));
                }
            }
            _ => leaves.push(Leaf {
                path: path.clone(),
                value,
            }),
        }
        TreeNode {
            value,
            path,
            children,
        }
    }
}

/// A leaf recorded during tree construction: the full path from the root
/// and the scalar it terminates in.
#[derive(Debug, Clone)]
pub struct Leaf<'doc> {
    path: Vec<Segment>,
    value: &'doc JsonValue,
}

impl<'doc> Leaf<'doc> {
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    pub fn value(&self) -> &'doc JsonValue {
        self.value
    }

    /// The leaf's own terminal segment. `None` only for a bare-scalar root
    /// document, which has no path at all.
    pub fn terminal(&self) -> Option<&Segment> {
        self.path.last()
    }
}

/// A one-pass tree over a borrowed document.
///
/// The tree owns its nodes for the duration of a flatten call and records
/// leaves in traversal order; nothing outlives the call.
#[derive(Debug)]
pub struct DocumentTree<'doc> {
    root: TreeNode<'doc>,
    leaves: Vec<Leaf<'doc>>,
}

impl<'doc> DocumentTree<'doc> {
    /// Build the tree top-down in a single depth-first pass. Object children
    /// append their key to the path; array children append their index.
    pub fn build(document: &'doc JsonValue) -> Self {
        let mut leaves = Vec::new();
        let root = TreeNode::grow(document, Vec::new(), &mut leaves);
        DocumentTree { root, leaves }
    }

    pub fn root(&self) -> &TreeNode<'doc> {
        &self.root
    }

    /// Leaves in traversal order.
    pub fn leaves(&self) -> &[Leaf<'doc>] {
        &self.leaves
    }
}
