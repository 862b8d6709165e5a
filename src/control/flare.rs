//! Swatch Flare
//!
//! Fire-and-forget emphasis animation: grow, then settle back to identity.

use std::time::{Duration, Instant};

use super::strength::Strength;

pub const GROW_DURATION: Duration = Duration::from_millis(300);
pub const SETTLE_DURATION: Duration = Duration::from_millis(100);

/// Peak vertical scale reached at the end of the grow phase
pub const PEAK_SCALE: f32 = 1.6;

/// One running flare on a swatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flare {
    pub tier: Strength,
    pub started: Instant,
}

impl Flare {
    /// Vertical scale at `now`; 1.0 before start and after the settle phase
    pub fn scale(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < GROW_DURATION {
            let t = elapsed.as_secs_f32() / GROW_DURATION.as_secs_f32();
            1.0 + (PEAK_SCALE - 1.0) * t
        } else if elapsed < GROW_DURATION + SETTLE_DURATION {
            let t = (elapsed - GROW_DURATION).as_secs_f32() / SETTLE_DURATION.as_secs_f32();
            PEAK_SCALE - (PEAK_SCALE - 1.0) * t
        } else {
            1.0
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= GROW_DURATION + SETTLE_DURATION
    }
}

/// Scheduled flares, at most one per tier
#[derive(Debug, Default)]
pub struct FlareQueue {
    running: Vec<Flare>,
    scheduled_total: u64,
}

impl FlareQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flare on `tier`, restarting one already running there
    pub fn schedule(&mut self, tier: Strength, now: Instant) {
        self.running.retain(|f| f.tier != tier);
        self.running.push(Flare { tier, started: now });
        self.scheduled_total += 1;
    }

    pub fn prune(&mut self, now: Instant) {
        self.running.retain(|f| !f.is_finished(now));
    }

    /// Current scale for a tier's swatch
    pub fn scale_of(&self, tier: Strength, now: Instant) -> f32 {
        self.running
            .iter()
            .find(|f| f.tier == tier)
            .map_or(1.0, |f| f.scale(now))
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    #[cfg(test)]
    pub fn running(&self) -> &[Flare] {
        &self.running
    }

    pub fn scheduled_total(&self) -> u64 {
        self.scheduled_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_phases() {
        let start = Instant::now();
        let flare = Flare { tier: Strength::Medium, started: start };

        assert_eq!(flare.scale(start), 1.0);
        let mid_grow = flare.scale(start + Duration::from_millis(150));
        assert!((mid_grow - 1.3).abs() < 0.01);
        let peak = flare.scale(start + Duration::from_millis(300));
        assert!((peak - PEAK_SCALE).abs() < 0.01);
        let mid_settle = flare.scale(start + Duration::from_millis(350));
        assert!((mid_settle - 1.3).abs() < 0.01);
        assert_eq!(flare.scale(start + Duration::from_millis(400)), 1.0);
        assert!(flare.is_finished(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_schedule_restarts_same_tier() {
        let start = Instant::now();
        let mut queue = FlareQueue::new();

        queue.schedule(Strength::Weak, start);
        queue.schedule(Strength::Weak, start + Duration::from_millis(200));
        assert_eq!(queue.running().len(), 1);
        assert_eq!(queue.running()[0].started, start + Duration::from_millis(200));
        assert_eq!(queue.scheduled_total(), 2);
    }

    #[test]
    fn test_prune_drops_finished() {
        let start = Instant::now();
        let mut queue = FlareQueue::new();
        queue.schedule(Strength::Strong, start);
        assert!(queue.is_animating());

        queue.prune(start + Duration::from_millis(100));
        assert!(queue.is_animating());
        assert!(queue.scale_of(Strength::Strong, start + Duration::from_millis(100)) > 1.0);

        queue.prune(start + Duration::from_secs(1));
        assert!(!queue.is_animating());
        assert_eq!(queue.scale_of(Strength::Strong, start + Duration::from_secs(1)), 1.0);
    }
}
