//! Scene description and the recursive ray tracing kernel.
//!
//! A [`Scene`] is assembled once through [`SceneBuilder`] and is read-only
//! afterwards, so any number of threads may trace against it concurrently.

use std::ops::AddAssign;

use log::debug;

use crate::color::Color;
use crate::interval::Interval;
use crate::light::Light;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::Vector;

/// Reflection depth used by the renderer unless configured otherwise.
pub const DEFAULT_RECURSION_DEPTH: u32 = 3;

/// Minimum parameter for reflected rays, avoids re-hitting the surface they leave.
pub const REFLECTION_EPSILON: f64 = 0.001;

/// Camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Eye position in world coordinates
    pub position: Vector,
    /// Rotation from camera space into world space
    pub orientation: Matrix,
}

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width and height of the viewport on the projection plane
    pub size: f64,
    /// Distance from the camera to the projection plane
    pub projection_plane_z: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: 1.0,
            projection_plane_z: 1.0,
        }
    }
}

/// Closest (or any) hit found by an intersection query.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Sphere that was hit
    pub sphere: &'a Sphere,
    /// Ray parameter of the hit
    pub t: f64,
}

/// Counters for the queries issued while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Closest-hit queries (primary and reflected rays)
    pub rays: u64,
    /// Any-hit shadow queries
    pub shadow_rays: u64,
}

impl AddAssign for TraceStats {
    fn add_assign(&mut self, rhs: Self) {
        self.rays += rhs.rays;
        self.shadow_rays += rhs.shadow_rays;
    }
}

/// Immutable scene: geometry, lights, camera and projection.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    camera: Camera,
    viewport: Viewport,
    background: Color,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Camera placement.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Projection parameters.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Color returned for rays that escape the scene.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Map a device pixel offset (origin at the image center) onto the
    /// projection plane.
    ///
    /// Canvas dimensions must be positive.
    pub fn to_viewport(&self, screen: Vector, canvas_width: u32, canvas_height: u32) -> Vector {
        Vector::new(
            screen.x() * self.viewport.size / canvas_width as f64,
            screen.y() * self.viewport.size / canvas_height as f64,
            self.viewport.projection_plane_z,
        )
    }

    /// Camera ray through a device pixel, in world space.
    pub fn primary_ray(&self, screen: Vector, canvas_width: u32, canvas_height: u32) -> Ray {
        let direction = self
            .camera
            .orientation
            .apply(self.to_viewport(screen, canvas_width, canvas_height));
        Ray::new(self.camera.position, direction)
    }

    /// Find the nearest sphere hit with `t` strictly inside `range`.
    ///
    /// Spheres are examined in insertion order and a later candidate only wins
    /// when strictly closer. With `any_hit` the search stops at the first
    /// sphere that has a qualifying root.
    pub fn closest_intersection(&self, ray: &Ray, range: Interval, any_hit: bool) -> Option<Intersection<'_>> {
        let d_dot_d = ray.direction.dot(ray.direction);
        let mut closest: Option<Intersection<'_>> = None;

        for sphere in &self.spheres {
            let Some(face) = sphere.intersect(ray, d_dot_d) else {
                continue;
            };

            for t in face.roots() {
                let closer = closest.map_or(true, |c| t < c.t);
                if closer && range.surrounds(t) {
                    closest = Some(Intersection { sphere, t });
                }
            }

            if any_hit && closest.is_some() {
                break;
            }
        }

        closest
    }

    /// Total light intensity arriving at `point`.
    ///
    /// `view` points from the surface back towards the viewer. The result is
    /// not clamped: a light behind the surface contributes a negative diffuse
    /// term, and the sum may exceed 1.
    pub fn compute_lighting(&self, point: Vector, normal: Vector, view: Vector, specular: Option<f64>) -> f64 {
        self.compute_lighting_counted(point, normal, view, specular, &mut TraceStats::default())
    }

    /// Trace a ray and return its color.
    ///
    /// Reflections recurse while `depth > 0`, so at most `depth + 1`
    /// closest-hit queries are issued.
    pub fn trace_ray(&self, ray: &Ray, range: Interval, depth: u32) -> Color {
        self.trace_ray_counted(ray, range, depth, &mut TraceStats::default())
    }

    /// Same as [`Scene::trace_ray`], recording the queries into `stats`.
    pub fn trace_ray_counted(&self, ray: &Ray, range: Interval, depth: u32, stats: &mut TraceStats) -> Color {
        stats.rays += 1;
        let Some(hit) = self.closest_intersection(ray, range, false) else {
            return self.background;
        };

        let sphere = hit.sphere;
        let point = ray.at(hit.t);
        let normal = sphere.normal_at(point);
        let lighting = self.compute_lighting_counted(point, normal, -ray.direction, sphere.specular(), stats);
        let local = sphere.color().to_vector() * lighting;

        let reflective = sphere.reflective();
        if depth == 0 || reflective <= 0.0 {
            return Color::from(local);
        }

        let reflected_ray = Ray::new(point, reflect_ray(-ray.direction, normal));
        let reflected = self.trace_ray_counted(&reflected_ray, Interval::unbounded(REFLECTION_EPSILON), depth - 1, stats);

        Color::from(local * (1.0 - reflective) + reflected.to_vector() * reflective)
    }

    fn compute_lighting_counted(
        &self,
        point: Vector,
        normal: Vector,
        view: Vector,
        specular: Option<f64>,
        stats: &mut TraceStats,
    ) -> f64 {
        let mut total = 0.0;

        for light in &self.lights {
            let intensity = light.intensity();
            let Some(l) = light.vector_to(point) else {
                total += intensity;
                continue;
            };

            stats.shadow_rays += 1;
            let shadow_ray = Ray::new(point, l);
            if self.closest_intersection(&shadow_ray, light.shadow_range(), true).is_some() {
                continue;
            }

            total += intensity * normal.dot(l) / (normal.length() * l.length());

            if let Some(exponent) = specular {
                let r = reflect_ray(l, normal);
                let r_dot_v = r.dot(view);
                if r_dot_v > 0.0 {
                    total += intensity * (r_dot_v / (r.length() * view.length())).powf(exponent);
                }
            }
        }

        total
    }
}

/// Mirror `ray` about a unit `normal`: `2 * normal * dot(normal, ray) - ray`.
pub fn reflect_ray(ray: Vector, normal: Vector) -> Vector {
    normal * (2.0 * normal.dot(ray)) - ray
}

/// Accumulates scene contents before freezing them into a [`Scene`].
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    camera: Camera,
    viewport: Viewport,
    background: Color,
}

impl SceneBuilder {
    /// Empty scene: camera at the origin looking down +z, unit viewport at
    /// distance 1, black background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sphere.
    pub fn sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add several spheres, keeping their order.
    pub fn spheres(mut self, spheres: impl IntoIterator<Item = Sphere>) -> Self {
        self.spheres.extend(spheres);
        self
    }

    /// Add one light.
    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Add several lights, keeping their order.
    pub fn lights(mut self, lights: impl IntoIterator<Item = Light>) -> Self {
        self.lights.extend(lights);
        self
    }

    /// Set the camera position.
    pub fn camera_position(mut self, position: Vector) -> Self {
        self.camera.position = position;
        self
    }

    /// Set the camera orientation.
    pub fn camera_orientation(mut self, orientation: Matrix) -> Self {
        self.camera.orientation = orientation;
        self
    }

    /// Set the viewport size.
    pub fn viewport_size(mut self, size: f64) -> Self {
        self.viewport.size = size;
        self
    }

    /// Set the projection plane distance.
    pub fn projection_plane_z(mut self, z: f64) -> Self {
        self.viewport.projection_plane_z = z;
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Freeze the scene.
    pub fn build(self) -> Scene {
        debug!(
            "Scene built: {} spheres, {} lights, camera at {}",
            self.spheres.len(),
            self.lights.len(),
            self.camera.position
        );
        Scene {
            spheres: self.spheres,
            lights: self.lights,
            camera: self.camera,
            viewport: self.viewport,
            background: self.background,
        }
    }
}
