use crate::{Side, Term};

pub(super) type NodeId = usize;

pub(super) struct Node<R> { 
    pub term: Term<R>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>
}

// A slot that refers to a node: the root slot, or a child slot of some node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Link { 
    Root,
    Child(NodeId, Side)
}

impl<R> Node<R> { 
    pub fn leaf(term: Term<R>) -> Self { 
        Self { term, left: None, right: None }
    }

    pub fn child(&self, side: Side) -> Option<NodeId> { 
        match side { 
            Side::Left  => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, target: Option<NodeId>) { 
        match side { 
            Side::Left  => self.left = target,
            Side::Right => self.right = target,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> { 
        self.left.into_iter().chain(self.right)
    }

    pub fn detach(&mut self) { 
        self.left = None;
        self.right = None;
    }
}
