use crate::basic_types::PVar;
use crate::basic_types::Value;

/// A dense handle for an e-node. Indices into [`crate::egraph::EGraph`]'s node table; never
/// meaningful across two different graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ENodeId(pub(super) u32);

/// The expression an e-node represents.
///
/// Only the three shapes the saturation core's slice queries care about are modelled: a theory
/// variable, an interpreted constant, and a slice of another e-node. A real congruence closure
/// over full bit-vector terms (concat, extract, arithmetic operators, ...) would have more
/// variants; they are not needed here since the adapter only ever asks "what variables, and what
/// constants, live in this class and the classes reachable from it by slicing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ENodeExpr {
    /// A theory (polynomial) variable.
    Var(PVar),
    /// An interpreted numeric constant of the given bit width.
    Const { value: Value, width: u32 },
    /// The `width`-bit slice of `base` starting at bit `offset`.
    Slice {
        base: ENodeId,
        offset: u32,
        width: u32,
    },
}

/// A single e-node: an expression together with its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ENode {
    pub(super) expr: ENodeExpr,
    pub(super) width: u32,
}

impl ENode {
    pub fn expr(&self) -> &ENodeExpr {
        &self.expr
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}
