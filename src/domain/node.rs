/// Optional owned subtree.
pub type Link<V> = Option<Box<Node<V>>>;

/// Binary tree node owning at most two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    /// Payload stored at this position
    pub value: V,
    /// Left subtree, None if absent
    pub left: Link<V>,
    /// Right subtree, None if absent
    pub right: Link<V>,
}

impl<V> Node<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Node<V>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Node<V>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
