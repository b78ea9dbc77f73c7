pub mod point;
pub mod shapes;
pub mod intersect;

pub use point::{Point3, Vector3};
pub use shapes::{Circle, Cylinder, Plane, Ray, Sphere};
pub use intersect::{distance_between, intersection_point, intersects, vector_between};
