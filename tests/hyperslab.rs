mod common;

use common::{child_tags, parse_document};
use xdmf::prelude::*;

fn pressure() -> DatasetRef {
    DatasetRef::from_type_name("results/run.h5", vec![10, 10], "float32")
        .unwrap()
        .with_name("/pressure")
}

#[test]
fn hyperslab_document() {
    let slab = xdmf::build_hyperslab_from_external(&pressure(), &[0, 0], &[1, 1], &[2, 3]).unwrap();

    let mut attribute =
        xdmf::create_attribute(&AttributeAttribs::new(AttributeType::Scalar, Center::Cell).name("p"));
    attribute.append_child(slab);

    let xml = xdmf::to_xml_string(&attribute, &WriteOptions::default()).unwrap();
    let parsed = parse_document(&xml);

    let container = &parsed.children()[0];
    assert_eq!(container.attribute("ItemType"), Some("HyperSlab"));
    assert_eq!(container.attribute("Dimensions"), Some("2 3"));
    assert_eq!(container.attribute("NumberType"), Some("Float"));
    assert_eq!(container.attribute("Precision"), Some("4"));
    assert_eq!(child_tags(container), ["DataItem", "DataItem"]);

    let descriptor = &container.children()[0];
    assert_eq!(descriptor.attribute("Format"), Some("XML"));
    assert_eq!(descriptor.attribute("Dimensions"), Some("3 2"));
    assert_eq!(descriptor.text(), Some("0 0 1 1 2 3"));

    let payload = &container.children()[1];
    assert_eq!(payload.attribute("Format"), Some("HDF"));
    assert_eq!(payload.attribute("Dimensions"), Some("10 10"));
    assert_eq!(payload.attribute("Name"), Some("/pressure"));
    assert_eq!(payload.text(), Some("results/run.h5"));
}

#[test]
fn custom_dataset_source() {
    // any type describing an external array can back a data item
    struct Slice {
        path: std::path::PathBuf,
    }

    impl Dataset for Slice {
        fn shape(&self) -> &[usize] {
            &[64, 64, 8]
        }

        fn element_type(&self) -> ElementType {
            ElementType::Int64
        }

        fn file_path(&self) -> &std::path::Path {
            &self.path
        }
    }

    let source = Slice {
        path: "ids.h5".into(),
    };

    let slab =
        xdmf::build_hyperslab_from_external(&source, &[0, 0, 7], &[1, 1, 1], &[64, 64, 1]).unwrap();
    assert_eq!(slab.attribute("NumberType"), Some("Int"));
    assert_eq!(slab.attribute("Precision"), Some("8"));
    assert_eq!(slab.children()[0].text(), Some("0 0 7 1 1 1 64 64 1"));
    assert_eq!(slab.children()[1].attribute("Name"), None);
}

#[test]
fn mismatched_selection() {
    let err = xdmf::build_hyperslab_from_external(&pressure(), &[0, 0], &[1, 1], &[2]).unwrap_err();
    assert!(matches!(err, xdmf::Error::ShapeMismatch(_)));

    let err =
        xdmf::build_hyperslab_from_external(&pressure(), &[5, 0], &[3, 1], &[3, 10]).unwrap_err();
    assert!(matches!(err, xdmf::Error::ShapeMismatch(_)));
}
