//! Ray picking helpers.
//!
//! Touch input arrives as a world-space [`Ray`] already unprojected by the
//! camera. These functions answer "did the ray pass through this bounding
//! sphere" and "where does the ray cross this plane".

use super::point::{Point3, Vector3};
use super::shapes::{Plane, Ray, Sphere};

/// Vector from `from` to `to`.
pub fn vector_between(from: Point3, to: Point3) -> Vector3 {
    Vector3::new(to.x - from.x, to.y - from.y, to.z - from.z)
}

/// Shortest distance from `point` to the infinite line through `ray`.
///
/// Uses the triangle-area identity: the cross product of the vectors from
/// the two ray points to `point` has twice the triangle's area, and dividing
/// by the base length gives the height. Returns `None` for a zero-length
/// ray vector, which defines no line.
pub fn distance_between(point: Point3, ray: &Ray) -> Option<f32> {
    let base = ray.vector.length();
    if base == 0.0 {
        return None;
    }

    let p1_to_point = vector_between(ray.point, point);
    let p2_to_point = vector_between(ray.point.translate(ray.vector), point);

    let area_of_triangle_times_two = p1_to_point.cross(p2_to_point).length();
    Some(area_of_triangle_times_two / base)
}

/// Whether `ray` passes strictly inside `sphere`. A tangent ray is a miss,
/// and so is a degenerate (zero-length) ray.
pub fn intersects(sphere: &Sphere, ray: &Ray) -> bool {
    distance_between(sphere.center, ray).is_some_and(|d| d < sphere.radius)
}

/// Point where `ray` crosses `plane`.
///
/// Solves `t = dot(plane.point - ray.point, n) / dot(ray.vector, n)`.
/// Returns `None` when the ray runs parallel to the plane or the result
/// isn't finite. The parallel test is relative to the lengths of the ray
/// vector and the normal, so short rays still hit.
pub fn intersection_point(ray: &Ray, plane: &Plane) -> Option<Point3> {
    let denominator = ray.vector.dot(plane.normal);
    let scale = ray.vector.length() * plane.normal.length();
    if denominator.abs() <= f32::EPSILON * scale {
        log::warn!("ray {:?} is parallel to plane {:?}", ray, plane);
        return None;
    }

    let ray_to_plane = vector_between(ray.point, plane.point);
    let t = ray_to_plane.dot(plane.normal) / denominator;
    let hit = ray.at(t);

    if hit.x.is_finite() && hit.y.is_finite() && hit.z.is_finite() {
        Some(hit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::ORIGIN, 1.0)
    }

    #[test]
    fn ray_through_center_hits() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(intersects(&unit_sphere(), &ray));
    }

    #[test]
    fn ray_far_away_misses() {
        let ray = Ray::new(Point3::new(5.0, 5.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(!intersects(&unit_sphere(), &ray));
    }

    #[test]
    fn tangent_ray_misses() {
        let ray = Ray::new(Point3::new(1.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(distance_between(Point3::ORIGIN, &ray), Some(1.0));
        assert!(!intersects(&unit_sphere(), &ray));
    }

    #[test]
    fn distance_ignores_ray_vector_length() {
        let short = Ray::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let long = Ray::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(10.0, 0.0, 0.0));
        let d1 = distance_between(Point3::ORIGIN, &short).unwrap();
        let d2 = distance_between(Point3::ORIGIN, &long).unwrap();
        assert!((d1 - 2.0).abs() < 1e-6);
        assert!((d2 - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_length_ray_has_no_distance() {
        let ray = Ray::new(Point3::ORIGIN, Vector3::ZERO);
        assert_eq!(distance_between(Point3::new(1.0, 0.0, 0.0), &ray), None);
        assert!(!intersects(&unit_sphere(), &ray));
    }

    #[test]
    fn ray_down_onto_ground_plane() {
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let plane = Plane::new(Point3::ORIGIN, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(intersection_point(&ray, &plane), Some(Point3::ORIGIN));
    }

    #[test]
    fn slanted_ray_with_non_unit_normal() {
        let ray = Ray::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(1.0, -1.0, 0.5));
        let plane = Plane::new(Point3::ORIGIN, Vector3::new(0.0, 3.0, 0.0));
        let hit = intersection_point(&ray, &plane).unwrap();
        assert!((hit.x - 2.0).abs() < 1e-6);
        assert!(hit.y.abs() < 1e-6);
        assert!((hit.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn parallel_ray_has_no_intersection() {
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let plane = Plane::new(Point3::ORIGIN, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(intersection_point(&ray, &plane), None);
    }

    #[test]
    fn short_ray_still_hits_plane() {
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1e-8, 0.0));
        let plane = Plane::new(Point3::ORIGIN, Vector3::new(0.0, 1.0, 0.0));
        let hit = intersection_point(&ray, &plane).unwrap();
        assert!(hit.y.abs() < 1e-5);

        let still = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::ZERO);
        assert_eq!(intersection_point(&still, &plane), None);
    }

    #[test]
    fn vector_between_points() {
        let v = vector_between(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 0.0, 3.0));
        assert_eq!(v, Vector3::new(1.0, -1.0, 2.0));
    }
}
