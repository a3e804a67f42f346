/// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.12;
pub const SPRING_DAMPING: f32 = 0.72;
pub const SPRING_THRESHOLD: f32 = 0.001;

/// A spring-based animation value for smooth open/close transitions.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl Spring {
    /// Advances one frame. Returns true while still moving.
    pub fn update(&mut self) -> bool {
        let force = (self.target - self.position) * self.stiffness;
        self.velocity = (self.velocity + force) * self.damping;
        self.position = (self.position + self.velocity).clamp(0.0, 1.0);

        let distance = (self.target - self.position).abs();
        if distance < SPRING_THRESHOLD && self.velocity.abs() < SPRING_THRESHOLD {
            self.snap();
            return false;
        }
        true
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps straight to the target (used when motion is reduced).
    pub fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    pub fn is_open(&self) -> bool {
        self.target > 0.5
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }
}
