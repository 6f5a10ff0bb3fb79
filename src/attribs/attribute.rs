symbolic_enum! {
    /// What kind of value an attribute holds at each center
    #[derive(Default)]
    pub enum AttributeType {
        #[default]
        Scalar => "Scalar",
        Vector => "Vector",
        Tensor => "Tensor",
        Tensor6 => "Tensor6",
        Matrix => "Matrix",
        GlobalID => "GlobalID",
    }
}

impl AttributeType {
    /// Infer the attribute type from the shape of the array holding its values.
    ///
    /// The first axis runs over the centers, so a rank 1 array is a scalar
    /// field, rank 2 a vector field, and rank 3 a tensor field when the
    /// trailing axes are `3 x 3` or a matrix field otherwise. `Tensor6` and
    /// `GlobalID` cannot be told apart from the shape alone and return `None`.
    pub fn from_shape(shape: &[usize]) -> Option<Self> {
        match shape {
            [_] => Some(Self::Scalar),
            [_, _] => Some(Self::Vector),
            [_, 3, 3] => Some(Self::Tensor),
            [_, _, _] => Some(Self::Matrix),
            _ => None,
        }
    }
}

symbolic_enum! {
    /// Where the values of an attribute are located on the grid
    #[derive(Default)]
    pub enum Center {
        #[default]
        Node => "Node",
        Cell => "Cell",
        Grid => "Grid",
        Face => "Face",
        Edge => "Edge",
        Other => "Other",
    }
}

/// Options of an `Attribute` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeAttribs {
    pub name: Option<String>,
    pub attribute_type: AttributeType,
    pub center: Center,
}

impl AttributeAttribs {
    pub fn new(attribute_type: AttributeType, center: Center) -> Self {
        Self {
            name: None,
            attribute_type,
            center,
        }
    }

    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }
}
