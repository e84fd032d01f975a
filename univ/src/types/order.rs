use std::cmp::Ordering;
use crate::Deg;

// Placement policy of a `TermTree`, fixed when the tree is built. 
// Degrees `d` with `less(d, e)` go to the left of a node of degree `e`.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DegOrder { 
    #[default]
    #[display("ascending")]
    Ascending,
    #[display("descending")]
    Descending,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side { 
    Left, 
    Right
}

impl Side { 
    pub fn opposite(self) -> Side { 
        match self { 
            Side::Left  => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl DegOrder { 
    pub fn less(&self, a: Deg, b: Deg) -> bool { 
        match self { 
            DegOrder::Ascending  => a < b,
            DegOrder::Descending => a > b,
        }
    }

    pub fn cmp(&self, a: Deg, b: Deg) -> Ordering { 
        match self { 
            DegOrder::Ascending  => a.cmp(&b),
            DegOrder::Descending => b.cmp(&a),
        }
    }

    // side on which a degree `d` is placed below a node of degree `at`.
    pub fn side_of(&self, d: Deg, at: Deg) -> Side { 
        if self.less(d, at) { 
            Side::Left
        } else { 
            Side::Right
        }
    }

    // side holding the higher degrees. 
    pub fn high_side(&self) -> Side { 
        match self { 
            DegOrder::Ascending  => Side::Right,
            DegOrder::Descending => Side::Left,
        }
    }

    pub fn low_side(&self) -> Side { 
        self.high_side().opposite()
    }
}
