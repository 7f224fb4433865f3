mod sphere;

pub use sphere::SphereGeometry;
