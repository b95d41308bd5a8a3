use std::time::Duration;

pub const SPRING_MASS: f32 = 0.1;
pub const SPRING_STIFFNESS: f32 = 150.0;
pub const SPRING_DAMPING: f32 = 12.0;
/// Distance from the target under which the spring may come to rest.
pub const REST_DELTA: f32 = 0.5;
/// Speed (units per second) under which the spring may come to rest.
pub const REST_SPEED: f32 = 2.0;

const SUBSTEP: f32 = 0.001;
const MAX_FRAME: f32 = 0.064;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Damping ratio. Above 1 the spring never overshoots from rest.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: SPRING_MASS,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            rest_delta: REST_DELTA,
            rest_speed: REST_SPEED,
        }
    }
}

/// Damped spring that follows a moving target.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Moves straight to `value` and stops.
    pub fn jump_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances the simulation by `elapsed` and returns whether the spring
    /// is still moving.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let mass = self.config.mass.max(f32::EPSILON);
        let mut remaining = elapsed.as_secs_f32().min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let spring = -self.config.stiffness * (self.value - self.target);
            let damper = -self.config.damping * self.velocity;
            self.velocity += (spring + damper) / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
        {
            self.jump_to(self.target);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn new_spring_is_settled() {
        let mut spring = Spring::new(40.0, SpringConfig::default());
        assert!(spring.is_settled());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 40.0);
    }

    #[test]
    fn converges_and_settles() {
        let mut spring = Spring::new(40.0, SpringConfig::default());
        spring.set_target(60.0);

        let mut frames = 0;
        while spring.step(FRAME) {
            frames += 1;
            assert!(frames < 240, "spring did not settle");
        }
        assert_eq!(spring.value(), 60.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn moves_gradually() {
        let mut spring = Spring::new(40.0, SpringConfig::default());
        spring.set_target(60.0);
        spring.step(FRAME);
        assert!(spring.value() > 40.0);
        assert!(spring.value() < 60.0);
    }

    #[test]
    fn default_constants_do_not_overshoot() {
        let config = SpringConfig::default();
        assert!(config.damping_ratio() > 1.0);

        let mut spring = Spring::new(40.0, config);
        spring.set_target(60.0);
        for _ in 0..120 {
            spring.step(FRAME);
            assert!(spring.value() <= 60.0 + 1e-3);
        }
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = Spring::new(40.0, SpringConfig::default());
        let mut reference = capped.clone();
        capped.set_target(60.0);
        reference.set_target(60.0);

        capped.step(Duration::from_secs(5));
        reference.step(Duration::from_secs_f32(MAX_FRAME));
        assert!((capped.value() - reference.value()).abs() < 1e-3);
    }

    #[test]
    fn retargeting_mid_flight() {
        let mut spring = Spring::new(40.0, SpringConfig::default());
        spring.set_target(60.0);
        for _ in 0..3 {
            spring.step(FRAME);
        }
        spring.set_target(40.0);
        while spring.step(FRAME) {}
        assert_eq!(spring.value(), 40.0);
    }

    #[test]
    fn ignores_non_finite_targets() {
        let mut spring = Spring::new(40.0, SpringConfig::default());
        spring.set_target(f32::INFINITY);
        assert_eq!(spring.target(), 40.0);
    }
}
