//! Selector data model for row/column sub-matrix addressing
//!
//! A [`Selector`] is built by the expression layer (or programmatically)
//! per use-site and resolved against a concrete matrix shape into a
//! [`Plan`]. Resolved plans are cached per shape, so a selector reused
//! against an identically-shaped matrix skips recomputation while a
//! different shape is always planned from scratch.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Result;
use crate::normalize::{normalize, Plan};
use crate::traits::DenseMatrix;

/// Selection along a single matrix axis, using 1-based indices
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisSelector {
    /// Every index along the axis
    All,
    /// The axis was not given explicitly; resolved during normalization
    Unspecified,
    /// A single index; a negative value excludes the named index instead
    Element(i64),
    /// Inclusive range; the upper bound may be [`AxisSelector::TO_END`]
    Range(i64, i64),
    /// Explicit index list; an entirely negative list selects the complement
    IndexList(Vec<i64>),
}

impl AxisSelector {
    /// Sentinel upper bound meaning "to the end of the axis"
    pub const TO_END: i64 = i64::MAX;
}

/// The two-axis (or diagonal) form of a complete selection
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectorKind {
    /// Independent row and column axis selections
    Cells {
        rows: AxisSelector,
        cols: AxisSelector,
    },
    /// The main diagonal of the matrix; both axes collapse to this
    Diagonal,
}

/// A complete selection with a per-shape cache of resolved plans
///
/// Plans are pure functions of `(selector, shape)`, so caching is keyed by
/// the `(rows, cols)` pair the plan was computed for. Nothing is shared
/// between selector instances.
#[derive(Debug, Clone)]
pub struct Selector {
    kind: SelectorKind,
    plans: HashMap<(usize, usize), Plan>,
}

impl Selector {
    /// Selection from independent row and column axis selectors
    pub fn new(rows: AxisSelector, cols: AxisSelector) -> Self {
        Self {
            kind: SelectorKind::Cells { rows, cols },
            plans: HashMap::new(),
        }
    }

    /// The main diagonal
    pub fn diagonal() -> Self {
        Self {
            kind: SelectorKind::Diagonal,
            plans: HashMap::new(),
        }
    }

    /// Single-axis shorthand, as written `M[a:b]`
    ///
    /// The missing column axis resolves against the matrix shape during
    /// normalization; against a non-vector matrix this is ambiguous.
    pub fn single_axis(axis: AxisSelector) -> Self {
        Self::new(axis, AxisSelector::Unspecified)
    }

    /// A single cell, as written `M[i, j]`
    pub fn element(row: i64, col: i64) -> Self {
        Self::new(AxisSelector::Element(row), AxisSelector::Element(col))
    }

    /// Every cell of the matrix
    pub fn all() -> Self {
        Self::new(AxisSelector::All, AxisSelector::All)
    }

    /// The underlying selection form
    pub fn kind(&self) -> &SelectorKind {
        &self.kind
    }

    /// Resolve this selector against a concrete matrix shape
    ///
    /// The resolved plan is cached under `(rows, cols)`; resolving against
    /// a different shape computes a fresh plan rather than reusing one.
    pub fn plan(&mut self, rows: usize, cols: usize) -> Result<&Plan> {
        let shape = (rows, cols);
        if !self.plans.contains_key(&shape) {
            let plan = normalize(&self.kind, rows, cols)?;
            self.plans.insert(shape, plan);
        }
        Ok(&self.plans[&shape])
    }

    /// Resolve against any dense matrix implementation
    pub fn plan_for<M: DenseMatrix>(&mut self, matrix: &M) -> Result<&Plan> {
        self.plan(matrix.rows(), matrix.cols())
    }
}

impl From<SelectorKind> for Selector {
    fn from(kind: SelectorKind) -> Self {
        Self {
            kind,
            plans: HashMap::new(),
        }
    }
}
