use crate::types::{ElementType, NumberType, Precision};

symbolic_enum! {
    /// How a data item is composed
    #[derive(Default)]
    pub enum ItemType {
        #[default]
        Uniform => "Uniform",
        Collection => "Collection",
        Tree => "Tree",
        HyperSlab => "HyperSlab",
        Coordinates => "Coordinates",
        Function => "Function",
    }
}

symbolic_enum! {
    /// Where the values of a data item are stored
    #[derive(Default)]
    pub enum Format {
        /// inline as whitespace separated text
        #[default]
        XML => "XML",
        /// in an external HDF5 file
        HDF => "HDF",
    }
}

/// Options of a `DataItem` element
///
/// `dimensions` must match the shape of the values the item describes (for a
/// hyperslab, the shape of the selection).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataItemAttribs {
    pub dimensions: Vec<usize>,
    pub name: Option<String>,
    pub item_type: ItemType,
    pub number_type: NumberType,
    pub precision: Precision,
    pub format: Format,
}

impl DataItemAttribs {
    /// a `Uniform` item of the given shape and element type
    pub fn new(dimensions: Vec<usize>, element_type: ElementType, format: Format) -> Self {
        Self {
            dimensions,
            name: None,
            item_type: ItemType::Uniform,
            number_type: element_type.number_type(),
            precision: element_type.precision(),
            format,
        }
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = item_type;
        self
    }

    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }
}
