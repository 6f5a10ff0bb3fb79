//! Build XDMF metadata documents and write them as XML.
//!
//! An XDMF file describes a mesh or time series (grids, topology, geometry,
//! attributes and time) and points at the numeric payloads, which are stored
//! either inline as whitespace separated text or externally in an HDF5 file.
//!
//! Each element kind has a small attribute set (see [`attribs`]) that is turned
//! into a generic [`Element`] by one of the `create_*` functions. Data items are
//! built from `ndarray` arrays or from a [`Dataset`] reference:
//!
//! ```
//! use xdmf::prelude::*;
//! use ndarray::array;
//!
//! let mut root = xdmf::create_xdmf(Some("3.0"));
//! let mut domain = xdmf::create_domain(None);
//! let mut grid = xdmf::create_grid(&GridAttribs::default())?;
//!
//! let points = array![[0.0f64, 0.0, 0.0], [1.0, 0.0, 0.0]];
//! let topology = TopologyAttribs::new(TopologyType::Polyvertex, vec![2]).nodes_per_element(1);
//! grid.append_child(xdmf::create_topology(&topology)?);
//! grid.append_child(xdmf::create_geometry_from_array(&points, &GeometryAttribs::default())?);
//!
//! domain.append_child(grid);
//! root.append_child(domain);
//!
//! let xml = xdmf::to_xml_string(&root, &WriteOptions::compact())?;
//! assert!(xml.starts_with("<Xdmf Version=\"3.0\"><Domain><Grid GridType=\"Uniform\">"));
//! # Ok::<(), xdmf::Error>(())
//! ```

pub mod attribs;
mod create;
mod data_item;
mod dataset;
mod element;
pub mod error;
pub mod prelude;
mod types;
mod utils;
mod write_xdmf;

pub use attribs::{
    AttributeAttribs, AttributeType, Center, CollectionType, DataItemAttribs, Format,
    GeometryAttribs, GeometryType, GridAttribs, GridType, ItemType, Section, TimeAttribs, TimeType,
    TopologyAttribs, TopologyType,
};

pub use create::{
    create_attribute, create_attribute_from_array, create_data_item, create_domain,
    create_geometry, create_geometry_from_array, create_grid, create_time, create_topology,
    create_xdmf,
};
pub use data_item::{
    build_hyperslab_from_array, build_hyperslab_from_external, build_uniform_from_array,
    build_uniform_from_array_named, build_uniform_from_external,
};
pub use dataset::{Dataset, DatasetRef};
pub use element::{append_child, append_children, set_text, Element};
pub use types::{derive_number_type, derive_precision, ElementType, NumberType, Numeric, Precision};
pub use utils::{format_sequence, AsciiToken};
pub use write_xdmf::{to_xml_string, write, write_to, Indent, WriteOptions};

pub use ndarray;

pub use quick_xml::writer::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported element type: {0}")]
    UnsupportedType(#[from] error::UnsupportedType),
    #[error("Invalid attribute combination: {0}")]
    InvalidAttributeCombination(#[from] error::InvalidAttributeCombination),
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] error::ShapeMismatch),
    #[error("Unsupported attribute shape: {0}")]
    UnsupportedAttributeShape(#[from] error::UnsupportedAttributeShape),
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not write XML data: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
    #[error("Could not convert written XML to utf8: `{0}`")]
    Utf8(#[from] std::string::FromUtf8Error),
}
