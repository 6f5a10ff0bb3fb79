symbolic_enum! {
    /// Layout of the point coordinates held by a `Geometry`
    #[derive(Default)]
    #[allow(non_camel_case_types)]
    pub enum GeometryType {
        /// interlaced x, y, z triplets
        #[default]
        XYZ => "XYZ",
        XY => "XY",
        /// three separate arrays
        X_Y_Z => "X_Y_Z",
        VxVyVz => "VxVyVz",
        Origin_DxDyDz => "Origin_DxDyDz",
        Origin_DxDy => "Origin_DxDy",
    }
}

/// Options of a `Geometry` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryAttribs {
    pub geometry_type: GeometryType,
}

impl GeometryAttribs {
    pub fn new(geometry_type: GeometryType) -> Self {
        Self { geometry_type }
    }
}
