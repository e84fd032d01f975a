use super::node::NodeId;
use super::TermTree;
use crate::{Side, Term};

// Direction of an in-order walk, by degree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Traversal { 
    Ascending,
    #[default]
    Descending
}

// In-order iterator driven by an explicit stack.
pub struct Iter<'a, R> { 
    tree: &'a TermTree<R>,
    stack: Vec<NodeId>,
    first: Side
}

impl<'a, R> Iter<'a, R> { 
    pub(super) fn new(tree: &'a TermTree<R>, traversal: Traversal) -> Self { 
        let first = match traversal { 
            Traversal::Ascending  => tree.order.low_side(),
            Traversal::Descending => tree.order.high_side(),
        };
        let mut iter = Self { tree, stack: vec![], first };
        iter.push_spine(tree.root);
        iter
    }

    fn push_spine(&mut self, mut next: Option<NodeId>) { 
        let tree = self.tree;
        while let Some(i) = next { 
            self.stack.push(i);
            next = tree.node(i).child(self.first);
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a Term<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let i = self.stack.pop()?;
        let node = tree.node(i);
        self.push_spine(node.child(self.first.opposite()));
        Some(&node.term)
    }
}

// Pre-order iterator: node, left subtree, right subtree. 
pub struct PreIter<'a, R> { 
    tree: &'a TermTree<R>,
    stack: Vec<NodeId>
}

impl<'a, R> Iterator for PreIter<'a, R> {
    type Item = &'a Term<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let i = self.stack.pop()?;
        let node = tree.node(i);
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.term)
    }
}

impl<R> TermTree<R> { 
    pub fn iter(&self, traversal: Traversal) -> Iter<'_, R> { 
        Iter::new(self, traversal)
    }

    pub fn iter_preorder(&self) -> PreIter<'_, R> { 
        PreIter { tree: self, stack: self.root.into_iter().collect() }
    }
}

impl<'a, R> IntoIterator for &'a TermTree<R> {
    type Item = &'a Term<R>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Traversal::Descending)
    }
}
