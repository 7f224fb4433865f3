use std::ops::AddAssign;

use tracing::info;

/// Ray counters, collected per pixel and summed over a render.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub bounce_rays: usize, // all rays spawned at a surface
    pub camera_rays: usize, // all rays from the camera
    pub env_hits: usize,    // rays that escaped to the background
}

impl Profile {
    pub fn new(bounce_rays: usize, camera_rays: usize, env_hits: usize) -> Self {
        Profile {
            bounce_rays,
            camera_rays,
            env_hits,
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.bounce_rays + other.bounce_rays,
            self.camera_rays + other.camera_rays,
            self.env_hits + other.env_hits,
        )
    }

    pub fn total_rays(&self) -> usize {
        self.bounce_rays + self.camera_rays
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            bounce_rays,
            camera_rays,
            env_hits,
        } = self;
        let threads = threads.max(1) as f32;
        info!(
            "{} total bounce rays at {} per second and {} per second per thread",
            bounce_rays,
            bounce_rays as f32 / elapsed,
            bounce_rays as f32 / elapsed / threads
        );
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / threads
        );
        info!(
            "{} total env hits, {} per second",
            env_hits,
            env_hits as f32 / elapsed,
        );
        let sum = self.total_rays();
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / threads
        );
    }
}

impl AddAssign for Profile {
    fn add_assign(&mut self, other: Self) {
        *self = self.combine(other);
    }
}
