use glam::Vec3;

/// Host-side entity the driver steers.
pub trait Mover {
    /// Current world position.
    fn position(&self) -> Vec3;

    /// Request motion toward `direction` (not normalized).
    fn add_movement_input(&mut self, direction: Vec3);
}

/// Minimal constant-speed body, for hosts without their own motion system.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicBody {
    pub position: Vec3,
    /// World units per second.
    pub speed: f32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pending: Vec3,
}

impl KinematicBody {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            speed,
            pending: Vec3::ZERO,
        }
    }

    /// Apply the input gathered since the last call over `dt` seconds. The
    /// body never travels further than the requested offset.
    pub fn integrate(&mut self, dt: f32) {
        let wanted = self.pending.length();
        let step = (self.speed * dt).min(wanted);
        self.position += self.pending.normalize_or_zero() * step;
        self.pending = Vec3::ZERO;
    }
}

impl Mover for KinematicBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn add_movement_input(&mut self, direction: Vec3) {
        self.pending += direction;
    }
}
