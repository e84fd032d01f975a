mod node;
mod algo;
mod iter;

use log::trace;
use node::{Link, Node, NodeId};
use crate::{Coeff, Deg, DegOrder, Side, Term};

pub use iter::*;

// `TermTree` : a binary search tree of terms keyed by degree.
// 
// * at most one node per degree,
// * no node holds a zero coefficient, 
// * the empty tree is the zero polynomial.
// 
// Nodes live in an arena; released slots are reused.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InsertOutcome { 
    Inserted,
    Merged,
    Removed,
    Ignored,
}

pub struct TermTree<R> { 
    nodes: Vec<Node<R>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    order: DegOrder
}

impl<R> TermTree<R> { 
    pub fn new(order: DegOrder) -> Self { 
        Self { nodes: vec![], free: vec![], root: None, order }
    }

    pub fn order(&self) -> DegOrder { 
        self.order
    }

    pub fn len(&self) -> usize { 
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.root.is_none()
    }

    // release every node. 
    pub fn clear(&mut self) { 
        if !self.is_empty() { 
            trace!("release {} nodes.", self.len());
        }
        self.nodes.clear();
        self.free.clear();
        self.root = None;
    }

    pub fn height(&self) -> usize { 
        let Some(root) = self.root else { 
            return 0
        };

        let mut h = 0;
        let mut stack = vec![(root, 1)];

        while let Some((i, depth)) = stack.pop() { 
            h = h.max(depth);
            let node = &self.nodes[i];
            stack.extend(node.children().map(|j| (j, depth + 1)));
        }

        h
    }

    fn node(&self, i: NodeId) -> &Node<R> { 
        &self.nodes[i]
    }

    fn node_mut(&mut self, i: NodeId) -> &mut Node<R> { 
        &mut self.nodes[i]
    }

    fn get(&self, link: Link) -> Option<NodeId> { 
        match link { 
            Link::Root     => self.root,
            Link::Child(i, s) => self.node(i).child(s),
        }
    }

    fn set(&mut self, link: Link, target: Option<NodeId>) { 
        match link { 
            Link::Root     => self.root = target,
            Link::Child(i, s) => self.node_mut(i).set_child(s, target),
        }
    }

    fn alloc(&mut self, term: Term<R>) -> NodeId { 
        let node = Node::leaf(term);
        if let Some(i) = self.free.pop() { 
            self.nodes[i] = node;
            i
        } else { 
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    fn swap_terms(&mut self, i: NodeId, j: NodeId) { 
        assert_ne!(i, j);
        let (a, b) = if i < j { 
            let (x, y) = self.nodes.split_at_mut(j);
            (&mut x[i], &mut y[0])
        } else { 
            let (x, y) = self.nodes.split_at_mut(i);
            (&mut y[0], &mut x[j])
        };
        std::mem::swap(&mut a.term, &mut b.term);
    }

    fn release(&mut self, i: NodeId) { 
        self.node_mut(i).detach();
        self.free.push(i);

        if self.root.is_none() { 
            self.nodes.clear();
            self.free.clear();
        }
    }

    // the link pointing to the node of degree `d`, or to the empty slot where it would be placed.
    fn locate(&self, d: Deg) -> Link { 
        let mut link = Link::Root;
        while let Some(i) = self.get(link) { 
            let e = self.node(i).term.deg;
            if d == e { 
                break
            }
            link = Link::Child(i, self.order.side_of(d, e));
        }
        link
    }

    fn find(&self, d: Deg) -> Option<&Term<R>> { 
        let i = self.get(self.locate(d))?;
        Some(&self.node(i).term)
    }

    fn spine_end(&self, side: Side) -> Option<&Term<R>> { 
        let mut i = self.root?;
        while let Some(j) = self.node(i).child(side) { 
            i = j;
        }
        Some(&self.node(i).term)
    }

    pub fn contains(&self, d: Deg) -> bool { 
        self.find(d).is_some()
    }

    // the term of the highest degree. 
    pub fn max_term(&self) -> Option<&Term<R>> { 
        self.spine_end(self.order.high_side())
    }

    pub fn min_term(&self) -> Option<&Term<R>> { 
        self.spine_end(self.order.low_side())
    }

    // removes the node at `link`. 
    // A node with two children takes over the term of its in-order
    // predecessor (right-most node of its left subtree), which is removed instead.
    fn delete_at(&mut self, link: Link) { 
        let Some(i) = self.get(link) else { 
            return
        };

        let node = self.node(i);
        match (node.left, node.right) { 
            (None, None) => { 
                self.set(link, None);
                self.release(i);
            },
            (Some(c), None) | (None, Some(c)) => { 
                self.set(link, Some(c));
                self.release(i);
            },
            (Some(l), Some(_)) => { 
                let mut p_link = Link::Child(i, Side::Left);
                let mut p = l;
                while let Some(r) = self.node(p).right { 
                    p_link = Link::Child(p, Side::Right);
                    p = r;
                }

                trace!("replace x^{} by predecessor x^{}.", self.node(i).term.deg, self.node(p).term.deg);

                self.swap_terms(i, p);
                self.delete_at(p_link);
            }
        }
    }
}

impl<R> TermTree<R>
where R: Coeff { 
    pub fn coeff(&self, d: Deg) -> R { 
        self.find(d).map(|t| t.coeff.clone()).unwrap_or_else(R::zero)
    }

    // merges `term` into the node of the same degree, or adds a new leaf.
    pub fn insert(&mut self, term: Term<R>) -> InsertOutcome { 
        if term.is_zero() { 
            return InsertOutcome::Ignored
        }

        let link = self.locate(term.deg);
        let Some(i) = self.get(link) else { 
            let i = self.alloc(term);
            self.set(link, Some(i));
            return InsertOutcome::Inserted
        };

        let node = self.node_mut(i);
        node.term.coeff += &term.coeff;

        if node.term.coeff.is_zero() { 
            trace!("x^{} cancelled.", term.deg);
            self.delete_at(link);
            InsertOutcome::Removed
        } else { 
            InsertOutcome::Merged
        }
    }

    pub fn remove(&mut self, d: Deg) -> Option<R> { 
        let link = self.locate(d);
        let i = self.get(link)?;
        let c = self.node(i).term.coeff.clone();
        self.delete_at(link);
        Some(c)
    }
}

impl<R> Default for TermTree<R> {
    fn default() -> Self {
        Self::new(DegOrder::default())
    }
}

impl<R> Extend<Term<R>> for TermTree<R>
where R: Coeff {
    fn extend<T: IntoIterator<Item = Term<R>>>(&mut self, iter: T) {
        for t in iter { 
            self.insert(t);
        }
    }
}

impl<R> std::fmt::Debug for TermTree<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermTree")
            .field("order", &self.order)
            .field("terms", &self.iter(Traversal::Ascending).collect::<Vec<_>>())
            .finish()
    }
}
