//! # Data items
//!
//! A data item describes one numeric array: its shape, element type, and where
//! the values live. Two kinds are built here:
//!
//! * `Uniform` items hold a whole array, either inline as text (`Format="XML"`)
//!   or as a reference to an array in an HDF5 file (`Format="HDF"`).
//! * `HyperSlab` items select a strided region of another array. They are
//!   written as a container with exactly two children, a descriptor holding
//!   the `start`, `stride` and `count` rows followed by the referenced array.
//!   Readers rely on that order.
//!
//! ```
//! use xdmf::{DatasetRef, ElementType};
//!
//! let velocity = DatasetRef::new("run.h5", vec![1000, 3], ElementType::Float32)
//!     .with_name("/velocity");
//!
//! // every other point, all three components
//! let slab = xdmf::build_hyperslab_from_external(&velocity, &[0, 0], &[2, 1], &[500, 3])?;
//!
//! assert_eq!(slab.attribute("ItemType"), Some("HyperSlab"));
//! assert_eq!(slab.children()[0].text(), Some("0 0 2 1 500 3"));
//! assert_eq!(slab.children()[1].text(), Some("run.h5"));
//! # Ok::<(), xdmf::Error>(())
//! ```

use crate::create::create_data_item;
use crate::prelude::*;
use crate::utils::format_sequence;

use ndarray::{Array2, ArrayBase, Data, Dimension};
use tracing::trace;

/// Build an inline `Uniform` data item holding the values of `array` in row
/// major order.
pub fn build_uniform_from_array<S, D, T>(array: &ArrayBase<S, D>) -> Result<Element, Error>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Numeric,
{
    uniform_from_array(array, None)
}

/// Same as [`build_uniform_from_array`], with a `Name` attribute
pub fn build_uniform_from_array_named<S, D, T>(
    array: &ArrayBase<S, D>,
    name: &str,
) -> Result<Element, Error>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Numeric,
{
    uniform_from_array(array, Some(name))
}

fn uniform_from_array<S, D, T>(
    array: &ArrayBase<S, D>,
    name: Option<&str>,
) -> Result<Element, Error>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Numeric,
{
    let shape = array_shape(array.shape())?;

    let mut attribs = DataItemAttribs::new(shape, T::ELEMENT_TYPE, Format::XML);
    attribs.name = name.map(str::to_string);

    let mut data_item = create_data_item(&attribs);
    // `iter` walks the array in logical order regardless of its memory layout
    data_item.set_text(format_sequence(array.iter()));

    Ok(data_item)
}

/// Build a `Uniform` data item that points at an array stored in an HDF5 file.
///
/// The payload text is the path of the file and the array's path inside the
/// file becomes the item's `Name`.
pub fn build_uniform_from_external<T: Dataset + ?Sized>(dataset: &T) -> Result<Element, Error> {
    let shape = array_shape(dataset.shape())?;

    let mut attribs = DataItemAttribs::new(shape, dataset.element_type(), Format::HDF);
    attribs.name = dataset.name().map(str::to_string);

    let file_path = dataset.file_path().to_string_lossy().into_owned();
    trace!(file = %file_path, name = ?attribs.name, "referencing external dataset");

    let mut data_item = create_data_item(&attribs);
    data_item.set_text(file_path);

    Ok(data_item)
}

/// Build a `HyperSlab` selecting `count` elements along each axis of an
/// external array, beginning at `start` and stepping by `stride`.
///
/// `start`, `stride` and `count` need one entry per dimension of the dataset
/// and the selection must lie inside it.
pub fn build_hyperslab_from_external<T: Dataset + ?Sized>(
    dataset: &T,
    start: &[usize],
    stride: &[usize],
    count: &[usize],
) -> Result<Element, Error> {
    let payload = build_uniform_from_external(dataset)?;
    compose_hyperslab(
        dataset.shape(),
        dataset.element_type(),
        payload,
        start,
        stride,
        count,
    )
}

/// Build a `HyperSlab` over an inline array.
///
/// This writes the entire array into the document and then selects part of
/// it, so it is rarely what you want; slicing pays off when the values live
/// in an external file (see [`build_hyperslab_from_external`]).
pub fn build_hyperslab_from_array<S, D, T>(
    array: &ArrayBase<S, D>,
    start: &[usize],
    stride: &[usize],
    count: &[usize],
) -> Result<Element, Error>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Numeric,
{
    let payload = build_uniform_from_array(array)?;
    compose_hyperslab(array.shape(), T::ELEMENT_TYPE, payload, start, stride, count)
}

fn compose_hyperslab(
    source_shape: &[usize],
    element_type: ElementType,
    payload: Element,
    start: &[usize],
    stride: &[usize],
    count: &[usize],
) -> Result<Element, Error> {
    check_selection(source_shape, start, stride, count)?;

    // the container takes its element type from the referenced values, not
    // from the descriptor
    let attribs = DataItemAttribs::new(count.to_vec(), element_type, Format::XML)
        .item_type(ItemType::HyperSlab);
    let mut hyperslab = create_data_item(&attribs);

    let descriptor = build_uniform_from_array(&descriptor_array(start, stride, count)?)?;

    trace!(
        start = %format_sequence(start),
        stride = %format_sequence(stride),
        count = %format_sequence(count),
        "composed hyperslab"
    );

    hyperslab.append_children([descriptor, payload]);

    Ok(hyperslab)
}

fn check_selection(
    source_shape: &[usize],
    start: &[usize],
    stride: &[usize],
    count: &[usize],
) -> Result<(), error::ShapeMismatch> {
    let rank = source_shape.len();

    if start.len() != rank || stride.len() != rank || count.len() != rank {
        return Err(error::ShapeMismatch::HyperslabRank {
            start: start.len(),
            stride: stride.len(),
            count: count.len(),
            rank,
        });
    }

    for axis in 0..rank {
        let (start, stride, count) = (start[axis], stride[axis], count[axis]);
        let extent = source_shape[axis];

        if count == 0 {
            continue;
        }

        let last = (count - 1)
            .checked_mul(stride)
            .and_then(|offset| offset.checked_add(start));

        let fits = stride > 0 && matches!(last, Some(last) if last < extent);

        if !fits {
            return Err(error::ShapeMismatch::HyperslabBounds {
                axis,
                start,
                stride,
                count,
                extent,
            });
        }
    }

    Ok(())
}

/// the 3 x N descriptor array with rows `start`, `stride`, `count`
fn descriptor_array(
    start: &[usize],
    stride: &[usize],
    count: &[usize],
) -> Result<Array2<i64>, error::ShapeMismatch> {
    let rank = start.len();
    let mut values = Vec::with_capacity(3 * rank);

    for &value in start.iter().chain(stride).chain(count) {
        let value = num_traits::cast::<usize, i64>(value)
            .ok_or(error::ShapeMismatch::DescriptorOverflow { value })?;
        values.push(value);
    }

    Array2::from_shape_vec((3, rank), values)
        .map_err(|_| error::ShapeMismatch::HyperslabRank {
            start: start.len(),
            stride: stride.len(),
            count: count.len(),
            rank,
        })
}

fn array_shape(shape: &[usize]) -> Result<Vec<usize>, error::ShapeMismatch> {
    if shape.is_empty() {
        return Err(error::ShapeMismatch::Scalar);
    }
    Ok(shape.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array, Array2, Axis};

    fn source() -> DatasetRef {
        DatasetRef::new("field.h5", vec![10, 10], ElementType::Float64).with_name("/field")
    }

    #[test]
    fn uniform_from_integer_array() {
        let data = array![[1i32, 2], [3, 4]];
        let item = build_uniform_from_array(&data).unwrap();

        assert_eq!(item.tag(), "DataItem");
        assert_eq!(item.attribute("Dimensions"), Some("2 2"));
        assert_eq!(item.attribute("ItemType"), Some("Uniform"));
        assert_eq!(item.attribute("NumberType"), Some("Int"));
        assert_eq!(item.attribute("Precision"), Some("4"));
        assert_eq!(item.attribute("Format"), Some("XML"));
        assert_eq!(item.attribute("Name"), None);
        assert_eq!(item.text(), Some("1 2 3 4"));
    }

    #[test]
    fn uniform_payload_round_trips() {
        let data = array![[0.5f64, -1.25, 3.0], [1e-9, 2.0e10, 7.0]];
        let item = build_uniform_from_array_named(&data, "coords").unwrap();

        assert_eq!(item.attribute("Name"), Some("coords"));
        assert_eq!(item.attribute("Precision"), Some("8"));

        let parsed: Vec<f64> = item
            .text()
            .unwrap()
            .split(' ')
            .map(|token| token.parse().unwrap())
            .collect();
        assert_eq!(parsed, data.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn uniform_follows_logical_order() {
        // a transposed view is not contiguous in row major order
        let data = array![[1u8, 2, 3], [4, 5, 6]];
        let transposed = data.view().reversed_axes();
        let item = build_uniform_from_array(&transposed).unwrap();

        assert_eq!(item.attribute("Dimensions"), Some("3 2"));
        assert_eq!(item.attribute("NumberType"), Some("UInt"));
        assert_eq!(item.attribute("Precision"), Some("1"));
        assert_eq!(item.text(), Some("1 4 2 5 3 6"));
    }

    #[test]
    fn scalar_array_rejected() {
        let err = build_uniform_from_array(&arr0(1.0f32)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(error::ShapeMismatch::Scalar)));
    }

    #[test]
    fn uniform_from_external() {
        let item = build_uniform_from_external(&source()).unwrap();

        assert_eq!(item.attribute("Dimensions"), Some("10 10"));
        assert_eq!(item.attribute("Format"), Some("HDF"));
        assert_eq!(item.attribute("NumberType"), Some("Float"));
        assert_eq!(item.attribute("Precision"), Some("8"));
        assert_eq!(item.attribute("Name"), Some("/field"));
        assert_eq!(item.text(), Some("field.h5"));
    }

    #[test]
    fn hyperslab_from_external() {
        let slab = build_hyperslab_from_external(&source(), &[0, 0], &[1, 1], &[2, 3]).unwrap();

        assert_eq!(slab.attribute("Dimensions"), Some("2 3"));
        assert_eq!(slab.attribute("ItemType"), Some("HyperSlab"));
        assert_eq!(slab.attribute("Format"), Some("XML"));
        assert_eq!(slab.attribute("NumberType"), Some("Float"));
        assert_eq!(slab.attribute("Precision"), Some("8"));
        assert_eq!(slab.text(), None);

        let children = slab.children();
        assert_eq!(children.len(), 2);

        let descriptor = &children[0];
        assert_eq!(descriptor.attribute("Dimensions"), Some("3 2"));
        assert_eq!(descriptor.attribute("NumberType"), Some("Int"));
        assert_eq!(descriptor.attribute("Precision"), Some("8"));
        assert_eq!(descriptor.attribute("Format"), Some("XML"));
        assert_eq!(descriptor.text(), Some("0 0 1 1 2 3"));

        let payload = &children[1];
        assert_eq!(payload.attribute("Format"), Some("HDF"));
        assert_eq!(payload.text(), Some("field.h5"));
    }

    #[test]
    fn hyperslab_from_array() {
        let data = Array2::<u16>::from_shape_fn((4, 4), |(i, j)| (i * 4 + j) as u16);
        let slab = build_hyperslab_from_array(&data, &[1, 0], &[2, 2], &[2, 2]).unwrap();

        assert_eq!(slab.attribute("NumberType"), Some("UInt"));
        assert_eq!(slab.attribute("Precision"), Some("2"));
        assert_eq!(slab.children()[0].text(), Some("1 0 2 2 2 2"));
        assert_eq!(slab.children()[1].attribute("Format"), Some("XML"));
        assert_eq!(
            slab.children()[1].text().map(|t| t.split(' ').count()),
            Some(data.len_of(Axis(0)) * data.len_of(Axis(1)))
        );
    }

    #[test]
    fn hyperslab_rank_mismatch() {
        let err = build_hyperslab_from_external(&source(), &[0], &[1, 1], &[2, 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch(error::ShapeMismatch::HyperslabRank { rank: 2, start: 1, .. })
        ));

        let err = build_hyperslab_from_external(&source(), &[0, 0, 0], &[1, 1, 1], &[1, 1, 1])
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn hyperslab_out_of_bounds() {
        // last selected index along axis 1 would be 2 + 4 * 2 = 10
        let err = build_hyperslab_from_external(&source(), &[0, 2], &[1, 2], &[2, 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch(error::ShapeMismatch::HyperslabBounds { axis: 1, .. })
        ));

        let err = build_hyperslab_from_external(&source(), &[0, 0], &[0, 1], &[2, 2]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch(error::ShapeMismatch::HyperslabBounds { axis: 0, .. })
        ));
    }

    #[test]
    fn hyperslab_touching_the_edge() {
        let slab = build_hyperslab_from_external(&source(), &[9, 1], &[1, 3], &[1, 3]).unwrap();
        assert_eq!(slab.attribute("Dimensions"), Some("1 3"));
    }
}
