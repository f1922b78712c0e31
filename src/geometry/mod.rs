pub mod compose;
pub mod curve;
pub mod polygon_2d;
pub mod surface;

pub use compose::{BrepGeometry, Geometry, GeometryGroup, ManifoldGeometry};
pub use curve::{ArcCurve, Curve, LineCurve};
pub use polygon_2d::Polygon2d;
pub use surface::{CylinderSurface, PlaneSurface, Surface};
