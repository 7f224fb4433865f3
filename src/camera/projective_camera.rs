use crate::math::*;

use anyhow::{anyhow, bail};
use tracing::info;

/// Pinhole camera. Maps film coordinates in `[0, 1]²` to primary rays, `(0, 0)` being the lower left corner.
#[derive(Debug, Clone)]
pub struct ProjectiveCamera {
    pub origin: Vec3,
    pub direction: Vec3,
    lower_left_corner: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl ProjectiveCamera {
    /// Fails when `look_from == look_at` or when `v_up` is parallel to the view direction.
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        v_up: Vec3,
        vertical_fov: f64, // in degrees
        aspect_ratio: f64,
    ) -> anyhow::Result<ProjectiveCamera> {
        let direction = try_normalize(look_at - look_from).ok_or_else(|| {
            anyhow!(
                "camera looks from {:?} at {:?}, which gives no view direction",
                look_from,
                look_at
            )
        })?;
        let w = -direction;
        let u = try_normalize(cross(v_up, w)).ok_or_else(|| {
            anyhow!(
                "camera up vector {:?} is parallel to the view direction {:?}",
                v_up,
                direction
            )
        })?;
        let v = cross(w, u);
        if !(vertical_fov > 0.0 && vertical_fov < 180.0) {
            bail!("vertical field of view must be in (0, 180) degrees, got {}", vertical_fov);
        }
        info!(
            "aspect ratio on instantiation of ProjectiveCamera = {}",
            aspect_ratio
        );

        let half_height = (deg_to_rad(vertical_fov) / 2.0).tan();
        let half_width = aspect_ratio * half_height;
        Ok(ProjectiveCamera {
            origin: look_from,
            direction,
            lower_left_corner: look_from - u * half_width - v * half_height - w,
            horizontal: u * 2.0 * half_width,
            vertical: v * 2.0 * half_height,
        })
    }

    pub fn get_ray(&self, film: Point2D) -> Ray {
        let point_on_plane =
            self.lower_left_corner + self.horizontal * film.x + self.vertical * film.y;
        let ray_direction = normalize(point_on_plane - self.origin);
        debug_assert!(ray_direction.is_finite());
        Ray::new(self.origin, ray_direction)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn camera(aspect_ratio: f64) -> ProjectiveCamera {
        ProjectiveCamera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            90.0,
            aspect_ratio,
        )
        .unwrap()
    }

    #[test]
    fn test_center_ray_looks_at_target() {
        let ray = camera(2.0).get_ray(Point2D::new(0.5, 0.5));
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 5.0));
        assert!((ray.direction - -Vec3::Z).len() < 1e-12, "{:?}", ray.direction);
    }

    #[test]
    fn test_corners() {
        let camera = camera(2.0);
        // vfov of 90 degrees puts the top edge at 45 degrees, the aspect ratio doubles the width
        let top_right = camera.get_ray(Point2D::new(1.0, 1.0)).direction;
        let expected = normalize(Vec3::new(2.0, 1.0, -1.0));
        assert!((top_right - expected).len() < 1e-9, "{:?}", top_right);

        let bottom_left = camera.get_ray(Point2D::ORIGIN).direction;
        let expected = normalize(Vec3::new(-2.0, -1.0, -1.0));
        assert!((bottom_left - expected).len() < 1e-9, "{:?}", bottom_left);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let camera = camera(16.0 / 9.0);
        for i in 0..=4 {
            for j in 0..=4 {
                let film = Point2D::new(i as f64 / 4.0, j as f64 / 4.0);
                let ray = camera.get_ray(film);
                assert!((ray.direction.len() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_aspect_ratio_only_changes_width() {
        let narrow = camera(1.0);
        let wide = camera(3.0);
        assert!((narrow.vertical - wide.vertical).len() < 1e-12);
        assert!((wide.horizontal.len() - 3.0 * narrow.horizontal.len()).abs() < 1e-9);
    }

    #[test]
    fn test_looking_along_up_vector_is_an_error() {
        let down = ProjectiveCamera::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::Y, 40.0, 1.0);
        assert!(down.is_err());
        let up = ProjectiveCamera::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Vec3::Y, 40.0, 1.0);
        assert!(up.is_err());
    }

    #[test]
    fn test_degenerate_view_is_an_error() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let err = ProjectiveCamera::new(origin, origin, Vec3::Y, 40.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("no view direction"), "{}", err);

        assert!(ProjectiveCamera::new(origin, Vec3::ZERO, Vec3::ZERO, 40.0, 1.0).is_err());
        assert!(ProjectiveCamera::new(origin, Vec3::ZERO, Vec3::Y, 0.0, 1.0).is_err());
        assert!(ProjectiveCamera::new(origin, Vec3::ZERO, Vec3::Y, 180.0, 1.0).is_err());
    }
}
