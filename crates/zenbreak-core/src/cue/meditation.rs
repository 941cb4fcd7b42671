//! Ambient blobs for meditation. Purely decorative: every frame is a function
//! of the time since mount, so there is no phase and no timer.

use std::f64::consts::TAU;
use std::time::Duration;

use tokio::time::Instant;

/// One loop of a blob's drift.
pub const BLOB_LOOP: Duration = Duration::from_secs(7);

/// Start offsets of the three blobs within the loop.
const BLOB_DELAYS_SECS: [f64; 3] = [0.0, 2.0, 4.0];

pub const MEDITATION_LABEL: &str = "Peace";

/// Position and size of a blob, relative to its resting place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// Horizontal drift in `-1.0..=1.0`.
    pub dx: f64,
    /// Vertical drift in `-1.0..=1.0`.
    pub dy: f64,
    /// Size factor around 1.0.
    pub scale: f64,
}

#[derive(Debug, Clone)]
pub struct MeditationCue {
    mounted_at: Instant,
}

impl MeditationCue {
    pub fn new(now: Instant) -> Self {
        Self { mounted_at: now }
    }

    pub fn label(&self) -> &'static str {
        MEDITATION_LABEL
    }

    pub fn blobs(&self, now: Instant) -> [Blob; 3] {
        let elapsed = now.saturating_duration_since(self.mounted_at).as_secs_f64();
        BLOB_DELAYS_SECS.map(|delay| blob_at((elapsed + delay) / BLOB_LOOP.as_secs_f64()))
    }
}

fn blob_at(cycles: f64) -> Blob {
    let angle = cycles.fract() * TAU;
    Blob {
        dx: angle.sin(),
        dy: -(angle * 2.0).sin() * 0.5,
        scale: 1.0 + 0.1 * angle.cos(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_repeats_every_loop() {
        let start = Instant::now();
        let cue = MeditationCue::new(start);
        let a = cue.blobs(start + Duration::from_millis(1300));
        let b = cue.blobs(start + Duration::from_millis(1300) + BLOB_LOOP);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x.dx - y.dx).abs() < 1e-9);
            assert!((x.dy - y.dy).abs() < 1e-9);
            assert!((x.scale - y.scale).abs() < 1e-9);
        }
    }

    #[test]
    fn blobs_are_out_of_step() {
        let start = Instant::now();
        let [a, b, c] = MeditationCue::new(start).blobs(start);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn drift_stays_bounded() {
        let start = Instant::now();
        let cue = MeditationCue::new(start);
        for ms in (0..14_000).step_by(250) {
            for blob in cue.blobs(start + Duration::from_millis(ms)) {
                assert!(blob.dx.abs() <= 1.0);
                assert!(blob.dy.abs() <= 0.5);
                assert!((0.89..=1.11).contains(&blob.scale));
            }
        }
    }
}
