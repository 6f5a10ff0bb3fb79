//! # Type mapping
//!
//! XDMF describes the element type of a data item with two attributes:
//! `NumberType` (the kind of number) and `Precision` (its width in bytes).
//! [`ElementType`] is the single classification both are read from.

use crate::prelude::*;
use crate::utils::AsciiToken;

/// The `NumberType` attribute of a data item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberType {
    #[default]
    Float,
    Int,
    UInt,
    Char,
    UChar,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "Float",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Char => "Char",
            Self::UChar => "UChar",
        }
    }
}

impl std::fmt::Display for NumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `Precision` attribute of a data item. Unlike the other enumerations this
/// is written as its byte width rather than its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    Byte,
    Half,
    #[default]
    Single,
    Double,
}

impl Precision {
    /// width of a single element in bytes
    pub fn bytes(&self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Single => 4,
            Self::Double => 8,
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// Every numeric element type a data item can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Float16,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Char,
    UChar,
}

impl ElementType {
    pub fn number_type(&self) -> NumberType {
        match self {
            Self::Float16 | Self::Float32 | Self::Float64 => NumberType::Float,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => NumberType::Int,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64 => NumberType::UInt,
            Self::Char => NumberType::Char,
            Self::UChar => NumberType::UChar,
        }
    }

    pub fn precision(&self) -> Precision {
        match self {
            Self::Int8 | Self::UInt8 | Self::Char | Self::UChar => Precision::Byte,
            Self::Float16 | Self::Int16 | Self::UInt16 => Precision::Half,
            Self::Float32 | Self::Int32 | Self::UInt32 => Precision::Single,
            Self::Float64 | Self::Int64 | Self::UInt64 => Precision::Double,
        }
    }

    /// Classify an element type from a descriptor name such as `"float32"`,
    /// `"int64"` or `"uint8"` (the names HDF5 and numpy tools report).
    ///
    /// ```
    /// use xdmf::ElementType;
    ///
    /// assert_eq!(ElementType::from_name("uint32").unwrap(), ElementType::UInt32);
    /// assert!(ElementType::from_name("float8").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let number_type = derive_number_type(name)?;
        let precision = derive_precision(name)?;

        let element_type = match (number_type, precision) {
            (NumberType::Float, Precision::Half) => Self::Float16,
            (NumberType::Float, Precision::Single) => Self::Float32,
            (NumberType::Float, Precision::Double) => Self::Float64,
            (NumberType::Int, Precision::Byte) => Self::Int8,
            (NumberType::Int, Precision::Half) => Self::Int16,
            (NumberType::Int, Precision::Single) => Self::Int32,
            (NumberType::Int, Precision::Double) => Self::Int64,
            (NumberType::UInt, Precision::Byte) => Self::UInt8,
            (NumberType::UInt, Precision::Half) => Self::UInt16,
            (NumberType::UInt, Precision::Single) => Self::UInt32,
            (NumberType::UInt, Precision::Double) => Self::UInt64,
            (NumberType::Char, Precision::Byte) => Self::Char,
            (NumberType::UChar, Precision::Byte) => Self::UChar,
            _ => {
                return Err(error::UnsupportedType::new(name.to_string(), "element type").into())
            }
        };

        Ok(element_type)
    }
}

/// Map an element type name to its `NumberType` by prefix.
///
/// `uint` is checked before `int` so that unsigned names are never classified
/// as signed.
pub fn derive_number_type(name: &str) -> Result<NumberType, Error> {
    let number_type = if name.starts_with("uint") {
        NumberType::UInt
    } else if name.starts_with("int") {
        NumberType::Int
    } else if name.starts_with("float") {
        NumberType::Float
    } else if name.starts_with("uchar") {
        NumberType::UChar
    } else if name.starts_with("char") {
        NumberType::Char
    } else {
        return Err(error::UnsupportedType::new(name.to_string(), "number type").into());
    };

    Ok(number_type)
}

/// Map an element type name to its `Precision` from the bit width at the end of
/// the name.
pub fn derive_precision(name: &str) -> Result<Precision, Error> {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let bits = &name[stem.len()..];

    let precision = match bits {
        "8" => Precision::Byte,
        "16" => Precision::Half,
        "32" => Precision::Single,
        "64" => Precision::Double,
        _ => return Err(error::UnsupportedType::new(name.to_string(), "precision").into()),
    };

    Ok(precision)
}

/// Rust primitives that can be written to a data item.
pub trait Numeric: AsciiToken + Copy + num_traits::Num + 'static {
    const ELEMENT_TYPE: ElementType;
}

macro_rules! numeric {
    ($($prim:ty => $element_type:ident),* $(,)?) => {
        $(
            impl Numeric for $prim {
                const ELEMENT_TYPE: ElementType = ElementType::$element_type;
            }
        )*
    };
}

numeric!(
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
);
