//! # Attribute sets
//!
//! One small value type per XDMF element. Each holds the options that element
//! recognises, with the same defaults the XDMF readers assume, and is turned
//! into an [`Element`](crate::Element) by the matching `create_*` function.
//!
//! Enumerated options are written to the document by their XDMF name, see
//! [`TopologyType::as_str`] for the names that are not valid Rust identifiers.

/// Declare an enumeration whose variants are written to the document by name.
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),*
        }

        impl $name {
            /// the name written to the XDMF document
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod attribute;
mod data_item;
mod geometry;
mod grid;
mod time;
mod topology;

pub use attribute::{AttributeAttribs, AttributeType, Center};
pub use data_item::{DataItemAttribs, Format, ItemType};
pub use geometry::{GeometryAttribs, GeometryType};
pub use grid::{CollectionType, GridAttribs, GridType, Section};
pub use time::{TimeAttribs, TimeType};
pub use topology::{TopologyAttribs, TopologyType};
