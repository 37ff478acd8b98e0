use std::time::{Duration, Instant};

use nalgebra::{Point2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::driver::Ticker;

const TWINKLE_PROBABILITY: f64 = 0.3;
const MIN_STAR_SIZE: f64 = 1.0;
const MAX_STAR_SIZE: f64 = 3.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Point2<f64>,
    // diameter of the dot
    pub size: f64,
}

/// Background stars, scattered at random and resized every so often so they
/// appear to twinkle.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    rng: StdRng,
    ticker: Ticker,
}

impl Starfield {
    pub fn new(
        count: usize,
        half_extents: Vector2<f64>,
        twinkle_interval: Duration,
        seed: Option<u64>,
        now: Instant,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let half_width = half_extents.x as i64;
        let half_height = half_extents.y as i64;
        let stars = (0..count)
            .map(|_| {
                let x = rng.gen_range(-half_width..=half_width);
                let y = rng.gen_range(-half_height..=half_height);
                Star {
                    position: Point2::new(x as f64, y as f64),
                    size: rng.gen_range(1..=3) as f64,
                }
            })
            .collect();

        let mut ticker = Ticker::new(twinkle_interval, 1);
        ticker.arm(now + twinkle_interval);

        Starfield { stars, rng, ticker }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Twinkles if enough time has passed. Returns whether anything changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.ticker.poll(now) == 0 {
            return false;
        }
        self.twinkle();
        true
    }

    pub fn twinkle(&mut self) {
        for star in self.stars.iter_mut() {
            if self.rng.gen_bool(TWINKLE_PROBABILITY) {
                star.size = self.rng.gen_range(MIN_STAR_SIZE..MAX_STAR_SIZE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starfield(seed: u64, now: Instant) -> Starfield {
        Starfield::new(
            50,
            Vector2::new(700.0, 450.0),
            Duration::from_millis(300),
            Some(seed),
            now,
        )
    }

    #[test]
    fn test_stars_inside_canvas() {
        let field = starfield(7, Instant::now());
        assert_eq!(field.stars().len(), 50);
        for star in field.stars() {
            assert!(star.position.x.abs() <= 700.0);
            assert!(star.position.y.abs() <= 450.0);
            assert!([1.0, 2.0, 3.0].contains(&star.size));
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let now = Instant::now();
        let a = starfield(42, now);
        let b = starfield(42, now);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_twinkle_timing_and_range() {
        let now = Instant::now();
        let mut field = starfield(3, now);
        assert!(!field.update(now + Duration::from_millis(100)));
        assert!(field.update(now + Duration::from_millis(300)));
        assert!(!field.update(now + Duration::from_millis(400)));

        for _ in 0..20 {
            field.twinkle();
        }
        for star in field.stars() {
            assert!(star.size >= MIN_STAR_SIZE && star.size < MAX_STAR_SIZE);
        }
    }
}
