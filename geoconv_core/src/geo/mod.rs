#![allow(clippy::module_inception)]

mod collection;
mod document;
mod feature;
mod geometry;
mod identifier;
mod properties;
mod types;
mod value;

pub use collection::*;
pub use document::*;
pub use feature::*;
pub use geometry::*;
pub use identifier::*;
pub use properties::*;
pub use types::*;
pub use value::*;
