pub mod builder;
pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;

pub use builder::MeshBuilder;
pub use error::{PolyweldError, Result};
pub use mesh::{Color, Dimension, IndexedFace, PolyMesh};
