//! # Element constructors
//!
//! Each function turns one attribute set into an [`Element`]. Optional fields
//! that are `None` produce no attribute at all, and fields that only apply to
//! some variants of another field are written only for those variants.

use crate::data_item;
use crate::prelude::*;
use crate::utils::format_sequence;

use ndarray::{ArrayBase, Data, Dimension};

/// The root `Xdmf` element
pub fn create_xdmf(version: Option<&str>) -> Element {
    let mut xdmf = Element::new("Xdmf");
    if let Some(version) = version {
        xdmf.set_attribute("Version", version);
    }
    xdmf
}

pub fn create_domain(name: Option<&str>) -> Element {
    let mut domain = Element::new("Domain");
    if let Some(name) = name {
        domain.set_attribute("Name", name);
    }
    domain
}

/// Create a `Grid` element.
///
/// `CollectionType` is written only for collection grids and `Section` only
/// for subset grids; either one missing for its grid type is an error.
pub fn create_grid(grid: &GridAttribs) -> Result<Element, Error> {
    let mut element = Element::with_attributes("Grid", [("GridType", grid.grid_type.as_str())]);

    if let Some(name) = &grid.name {
        element.set_attribute("Name", name.as_str());
    }

    match grid.grid_type {
        GridType::Collection => {
            let collection_type = grid.collection_type.ok_or_else(|| {
                error::InvalidAttributeCombination::new(
                    "Grid",
                    "GridType",
                    GridType::Collection.as_str(),
                    "CollectionType",
                )
            })?;
            element.set_attribute("CollectionType", collection_type.as_str());
        }
        GridType::Subset => {
            let section = grid.section.ok_or_else(|| {
                error::InvalidAttributeCombination::new(
                    "Grid",
                    "GridType",
                    GridType::Subset.as_str(),
                    "Section",
                )
            })?;
            element.set_attribute("Section", section.as_str());
        }
        GridType::Uniform | GridType::Tree => (),
    }

    Ok(element)
}

/// Create a `Time` element. A `Single` time must carry a value.
pub fn create_time(time: &TimeAttribs) -> Result<Element, Error> {
    let mut element = Element::with_attributes("Time", [("TimeType", time.time_type.as_str())]);

    if time.time_type == TimeType::Single {
        let value = time.value.ok_or_else(|| {
            error::InvalidAttributeCombination::new(
                "Time",
                "TimeType",
                TimeType::Single.as_str(),
                "Value",
            )
        })?;
        element.set_attribute("Value", format_sequence([value]));
    }

    Ok(element)
}

/// Create a `Topology` element.
///
/// `NodesPerElement` is required for the cell types with a variable node count
/// (`Polyvertex`, `Polyline`, `Polygon`) and is not written for any other.
pub fn create_topology(topology: &TopologyAttribs) -> Result<Element, Error> {
    let mut element = Element::with_attributes(
        "Topology",
        [
            ("TopologyType", topology.topology_type.as_str().to_string()),
            ("Dimensions", format_sequence(&topology.dimensions)),
        ],
    );

    if let Some(name) = &topology.name {
        element.set_attribute("Name", name.as_str());
    }

    if topology.topology_type.requires_nodes_per_element() {
        let nodes = topology.nodes_per_element.ok_or_else(|| {
            error::InvalidAttributeCombination::new(
                "Topology",
                "TopologyType",
                topology.topology_type.as_str(),
                "NodesPerElement",
            )
        })?;
        element.set_attribute("NodesPerElement", nodes.to_string());
    }

    // TODO: check `Order` against the node orderings XDMF defines per cell type
    // once a reader that honours it is available to test against
    if let Some(order) = &topology.order {
        element.set_attribute("Order", order.as_str());
    }

    Ok(element)
}

pub fn create_geometry(geometry: &GeometryAttribs) -> Element {
    Element::with_attributes(
        "Geometry",
        [("GeometryType", geometry.geometry_type.as_str())],
    )
}

pub fn create_attribute(attribute: &AttributeAttribs) -> Element {
    let mut element = Element::with_attributes(
        "Attribute",
        [
            ("AttributeType", attribute.attribute_type.as_str()),
            ("Center", attribute.center.as_str()),
        ],
    );

    if let Some(name) = &attribute.name {
        element.set_attribute("Name", name.as_str());
    }

    element
}

/// Create a `DataItem` element with no payload. `Precision` is written as the
/// width in bytes.
pub fn create_data_item(data_item: &DataItemAttribs) -> Element {
    let mut element = Element::with_attributes(
        "DataItem",
        [
            ("Dimensions", format_sequence(&data_item.dimensions)),
            ("ItemType", data_item.item_type.as_str().to_string()),
            ("NumberType", data_item.number_type.as_str().to_string()),
            ("Precision", data_item.precision.bytes().to_string()),
            ("Format", data_item.format.as_str().to_string()),
        ],
    );

    if let Some(name) = &data_item.name {
        element.set_attribute("Name", name.as_str());
    }

    element
}

/// Create an `Attribute` holding `array` inline.
///
/// The attribute type is inferred from the shape of the array, see
/// [`AttributeType::from_shape`].
pub fn create_attribute_from_array<S, D, T>(
    array: &ArrayBase<S, D>,
    name: &str,
    center: Center,
) -> Result<Element, Error>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Numeric,
{
    let attribute_type = AttributeType::from_shape(array.shape())
        .ok_or_else(|| error::UnsupportedAttributeShape::new(array.shape().to_vec()))?;

    let attribs = AttributeAttribs::new(attribute_type, center).name(name);

    let mut attribute = create_attribute(&attribs);
    attribute.append_child(data_item::build_uniform_from_array(array)?);

    Ok(attribute)
}

/// Create a `Geometry` holding the point coordinates in `array` inline.
pub fn create_geometry_from_array<S, D, T>(
    array: &ArrayBase<S, D>,
    geometry: &GeometryAttribs,
) -> Result<Element, Error>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Numeric,
{
    let mut element = create_geometry(geometry);
    element.append_child(data_item::build_uniform_from_array(array)?);
    Ok(element)
}
