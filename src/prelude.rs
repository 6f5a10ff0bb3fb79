//! Common traits and types that are useful for building `xdmf` documents
#![allow(unused_imports)]

pub use crate::attribs::{
    AttributeAttribs, AttributeType, Center, CollectionType, DataItemAttribs, Format,
    GeometryAttribs, GeometryType, GridAttribs, GridType, ItemType, Section, TimeAttribs, TimeType,
    TopologyAttribs, TopologyType,
};
pub use crate::dataset::{Dataset, DatasetRef};
pub use crate::element::Element;
pub use crate::types::{ElementType, NumberType, Numeric, Precision};
pub use crate::utils::AsciiToken;
pub use crate::write_xdmf::{Indent, WriteOptions};

pub(crate) use crate::error;
pub(crate) use crate::Error;

pub(crate) use derive_more::{Constructor, Display};

pub(crate) use std::io::Write;
pub(crate) use std::path::{Path, PathBuf};
