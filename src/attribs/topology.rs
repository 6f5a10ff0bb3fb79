symbolic_enum! {
    /// Cell type of a topology
    pub enum TopologyType {
        Polyvertex => "Polyvertex",
        Polyline => "Polyline",
        Polygon => "Polygon",
        Triangle => "Triangle",
        Quadrilateral => "Quadrilateral",
        Tetrahedron => "Tetrahedron",
        Pyramid => "Pyramid",
        Wedge => "Wedge",
        Hexahedron => "Hexahedron",
        Edge3 => "Edge_3",
        Triangle6 => "Triangle_6",
        Quadrilateral8 => "Quadrilateral_8",
        Tetrahedron10 => "Tetrahedron_10",
        Pyramid13 => "Pyramid_13",
        Wedge15 => "Wedge_15",
        Hexahedron20 => "Hexahedron_20",
        Mixed => "Mixed",
        SMesh2D => "2DSMesh",
        RectMesh2D => "2DRectMesh",
        CoRectMesh2D => "2DCoRectMesh",
        SMesh3D => "3DSMesh",
        RectMesh3D => "3DRectMesh",
        CoRectMesh3D => "3DCoRectMesh",
    }
}

impl TopologyType {
    /// cell types with a variable node count, which must state `NodesPerElement`
    pub fn requires_nodes_per_element(&self) -> bool {
        matches!(self, Self::Polyvertex | Self::Polygon | Self::Polyline)
    }
}

/// Options of a `Topology` element
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyAttribs {
    pub topology_type: TopologyType,
    pub dimensions: Vec<usize>,
    pub name: Option<String>,
    pub nodes_per_element: Option<usize>,
    /// passed through to the `Order` attribute unchanged
    pub order: Option<String>,
}

impl TopologyAttribs {
    pub fn new(topology_type: TopologyType, dimensions: Vec<usize>) -> Self {
        Self {
            topology_type,
            dimensions,
            name: None,
            nodes_per_element: None,
            order: None,
        }
    }

    pub fn nodes_per_element(mut self, nodes: usize) -> Self {
        self.nodes_per_element = Some(nodes);
        self
    }

    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn order<T: Into<String>>(mut self, order: T) -> Self {
        self.order = Some(order.into());
        self
    }
}
