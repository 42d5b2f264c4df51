// Arena-backed binary tree

/// Index of a node within its [`BinaryTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<V> {
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A binary tree whose nodes live in a single `Vec`
#[derive(Debug, Clone)]
pub struct BinaryTree<V> {
    nodes: Vec<Node<V>>,
    root: Option<NodeId>,
}

impl<V> BinaryTree<V> {
    pub fn new() -> Self {
        BinaryTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn with_root(value: V) -> Self {
        let mut tree = Self::new();
        tree.set_root(value);
        tree
    }

    fn alloc(&mut self, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        id
    }

    /// Add a new root node; any previous root becomes its left child
    pub fn set_root(&mut self, value: V) -> NodeId {
        let id = self.alloc(value);
        self.nodes[id.0].left = self.root;
        self.root = Some(id);
        id
    }

    /// Insert `value` as the left child of `parent`.
    ///
    /// If `parent` already has a left child, the new node takes its place and
    /// the old child becomes the new node's left child. Returns `None`, and
    /// leaves the tree unchanged, when `parent` is not a node of this tree.
    pub fn insert_left(&mut self, parent: NodeId, value: V) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        let displaced = self.nodes.get_mut(parent.0)?.left.replace(id);
        self.nodes.push(Node {
            value,
            left: displaced,
            right: None,
        });
        Some(id)
    }

    /// Insert `value` as the right child of `parent`, splicing like
    /// [`insert_left`](Self::insert_left)
    pub fn insert_right(&mut self, parent: NodeId, value: V) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        let displaced = self.nodes.get_mut(parent.0)?.right.replace(id);
        self.nodes.push(Node {
            value,
            left: None,
            right: displaced,
        });
        Some(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.nodes.get(id.0).map(|n| &n.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.right)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<V> Default for BinaryTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
