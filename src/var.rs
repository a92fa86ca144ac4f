use std::fmt;

/// A dense variable index handed out by a [`VariableMap`](crate::VariableMap).
///
/// Indices start at 1. Index 0 is reserved so that a signed index can encode a literal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub(crate) u32);

impl Var {
    /// The reserved slot. Never handed out by a map.
    pub const RESERVED: Self = Var(0);

    pub fn new(index: u32) -> Option<Self> {
        (index != 0).then(|| Var(index))
    }

    pub fn index(self) -> u32 {
        self.0
    }

    /// The DIMACS-style signed literal for this variable.
    pub fn signed(self, positive: bool) -> i32 {
        let i = self.0 as i32;
        if positive {
            i
        } else {
            -i
        }
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == Var::RESERVED {
            return write!(f, "_");
        }

        write!(f, "#{}", self.0)
    }
}
