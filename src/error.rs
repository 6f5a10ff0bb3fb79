//! detail types carried by the variants of [`Error`](crate::Error)

use crate::prelude::*;

#[derive(Display, Debug, Clone, PartialEq, Eq, Constructor)]
#[display(fmt = "element type `{type_name}` has no XDMF {missing}")]
pub struct UnsupportedType {
    pub type_name: String,
    /// which half of the mapping failed: `number type`, `precision`, or `element type`
    pub missing: &'static str,
}

#[derive(Display, Debug, Clone, PartialEq, Eq, Constructor)]
#[display(
    fmt = "{element_name} with {controlling_field}=\"{controlling_value}\" requires `{missing_field}`"
)]
pub struct InvalidAttributeCombination {
    pub element_name: &'static str,
    pub controlling_field: &'static str,
    pub controlling_value: &'static str,
    pub missing_field: &'static str,
}

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatch {
    #[display(
        fmt = "hyperslab start ({start}), stride ({stride}) and count ({count}) must each have one entry per dimension of the source (rank {rank})"
    )]
    HyperslabRank {
        start: usize,
        stride: usize,
        count: usize,
        rank: usize,
    },
    #[display(
        fmt = "hyperslab along axis {axis} (start {start}, stride {stride}, count {count}) does not fit a source of extent {extent}"
    )]
    HyperslabBounds {
        axis: usize,
        start: usize,
        stride: usize,
        count: usize,
        extent: usize,
    },
    #[display(fmt = "array backed data items need at least one dimension")]
    Scalar,
    #[display(fmt = "descriptor entry {value} does not fit in a 64 bit signed integer")]
    DescriptorOverflow { value: usize },
}

#[derive(Display, Debug, Clone, PartialEq, Eq, Constructor)]
#[display(fmt = "cannot infer an attribute type for an array of shape {shape:?}")]
pub struct UnsupportedAttributeShape {
    pub shape: Vec<usize>,
}

impl std::error::Error for UnsupportedType {}
impl std::error::Error for InvalidAttributeCombination {}
impl std::error::Error for ShapeMismatch {}
impl std::error::Error for UnsupportedAttributeShape {}
