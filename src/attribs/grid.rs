symbolic_enum! {
    #[derive(Default)]
    pub enum GridType {
        #[default]
        Uniform => "Uniform",
        Collection => "Collection",
        Tree => "Tree",
        Subset => "Subset",
    }
}

symbolic_enum! {
    pub enum CollectionType {
        // XDMF spells it this way
        Spacial => "Spacial",
        Temporal => "Temporal",
    }
}

symbolic_enum! {
    pub enum Section {
        DataItem => "DataItem",
        All => "All",
    }
}

/// Options of a `Grid` element
///
/// `collection_type` is required for (and only written for) a `Collection`
/// grid, `section` likewise for a `Subset` grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridAttribs {
    pub grid_type: GridType,
    pub name: Option<String>,
    pub collection_type: Option<CollectionType>,
    pub section: Option<Section>,
}

impl GridAttribs {
    /// a grid holding a single mesh
    pub fn uniform() -> Self {
        Self::default()
    }

    /// a collection of grids, e.g. the steps of a time series
    pub fn collection(collection_type: CollectionType) -> Self {
        Self {
            grid_type: GridType::Collection,
            collection_type: Some(collection_type),
            ..Self::default()
        }
    }

    /// a subset of another grid
    pub fn subset(section: Section) -> Self {
        Self {
            grid_type: GridType::Subset,
            section: Some(section),
            ..Self::default()
        }
    }

    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }
}
