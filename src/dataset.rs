//! References to arrays stored in an external HDF5 file
//!
//! `xdmf` never reads the HDF5 file itself. A data item that points at an
//! external array only needs the array's shape, element type, the path of the
//! file holding it and the array's path inside that file.

use crate::prelude::*;

/// Everything a data item needs to know about an externally stored array
pub trait Dataset {
    fn shape(&self) -> &[usize];

    fn element_type(&self) -> ElementType;

    /// path of the HDF5 file containing the array
    fn file_path(&self) -> &Path;

    /// path of the array inside the file, e.g. `/fields/pressure`
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A plain description of an array stored in an HDF5 file.
///
/// ```
/// use xdmf::{DatasetRef, ElementType};
///
/// let pressure = DatasetRef::new("run.h5", vec![100, 100], ElementType::Float64)
///     .with_name("/fields/pressure");
/// # let _ = pressure;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRef {
    pub file_path: PathBuf,
    pub name: Option<String>,
    pub shape: Vec<usize>,
    pub element_type: ElementType,
}

impl DatasetRef {
    pub fn new<P: Into<PathBuf>>(file_path: P, shape: Vec<usize>, element_type: ElementType) -> Self {
        Self {
            file_path: file_path.into(),
            name: None,
            shape,
            element_type,
        }
    }

    /// construct from the element type name an HDF5 tool reports, such as `"float32"`
    pub fn from_type_name<P: Into<PathBuf>>(
        file_path: P,
        shape: Vec<usize>,
        type_name: &str,
    ) -> Result<Self, Error> {
        let element_type = ElementType::from_name(type_name)?;
        Ok(Self::new(file_path, shape, element_type))
    }

    pub fn with_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Dataset for DatasetRef {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn element_type(&self) -> ElementType {
        self.element_type
    }

    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
