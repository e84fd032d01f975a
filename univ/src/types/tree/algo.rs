use log::{debug, trace};
use super::node::{Link, NodeId};
use super::{TermTree, Traversal};
use crate::err::ensure_same_order;
use crate::{Coeff, PolyError, Side};

impl<R> TermTree<R>
where R: Coeff { 
    // value at a floating point `x`. 
    pub fn evaluate(&self, x: f64) -> f64 { 
        self.iter_preorder().map(|t| 
            t.coeff.as_f64() * x.powf(t.deg as f64)
        ).sum()
    }

    // exact value at `x` in the coefficient ring.
    pub fn eval(&self, x: &R) -> R { 
        self.iter_preorder().fold(R::zero(), |mut res, t| { 
            let v = t.coeff.clone() * num_traits::pow(x.clone(), t.deg);
            res += &v;
            res
        })
    }

    // adds every term of `src` into `self`. 
    pub fn merge_add(&mut self, src: &TermTree<R>) -> Result<(), PolyError> { 
        ensure_same_order!(self.order, src.order);

        debug!("merge {} terms into {} terms.", src.len(), self.len());

        for t in src.iter_preorder() { 
            self.insert(t.clone());
        }

        Ok(())
    }

    // (c, d) -> (cd, d - 1) for every node, dropping the constant term.
    // Shifting all degrees down by one keeps their relative order,
    // so the nodes stay where they are.
    pub fn differentiate(&mut self) { 
        if self.remove(0).is_some() { 
            trace!("constant term dropped.");
        }

        debug!("differentiate {} terms.", self.len());

        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() { 
            let node = self.node_mut(i);
            let t = &mut node.term;
            t.coeff = t.coeff.scale_by_deg(t.deg);
            t.deg -= 1;
            stack.extend(node.children());
        }
    }
}

// Pre-order deep copy into a fresh arena.
impl<R> Clone for TermTree<R>
where R: Clone {
    fn clone(&self) -> Self {
        let mut res = Self::new(self.order);
        res.nodes.reserve(self.len());

        let mut stack = self.root.into_iter().map(|i| (i, Link::Root)).collect::<Vec<_>>();

        while let Some((i, link)) = stack.pop() { 
            let node = self.node(i);
            let j = res.alloc(node.term.clone());
            res.set(link, Some(j));

            stack.extend(node.right.map(|r| (r, Link::Child(j, Side::Right))));
            stack.extend(node.left .map(|l| (l, Link::Child(j, Side::Left))));
        }

        res
    }
}

// Equal as polynomials: same order and same terms, regardless of shape.
impl<R> PartialEq for TermTree<R>
where R: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && 
        self.len() == other.len() && 
        self.iter(Traversal::Ascending).eq(other.iter(Traversal::Ascending))
    }
}

impl<R> Eq for TermTree<R>
where R: Eq {}
