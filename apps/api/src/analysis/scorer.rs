//! Scorer: turns matched/required skill counts into a 0–100 compatibility score.
//!
//! score = round(clamp(round(matched / required * 100) + jitter, 20, 100))
//!
//! The jitter comes from an injected `JitterSource` so tests and deployments
//! that want reproducible scores can pin it.

use rand::Rng;

pub const MIN_SCORE: f64 = 20.0;
pub const MAX_SCORE: f64 = 100.0;
pub const JITTER_SPAN: f64 = 10.0;

/// Source of the bounded random offset added to the base score.
pub trait JitterSource: Send + Sync {
    /// Returns an offset in `[-JITTER_SPAN, JITTER_SPAN]`.
    fn jitter(&self) -> f64;
}

/// Uniform jitter in `[-10, 10)` drawn from the thread-local RNG.
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&self) -> f64 {
        rand::thread_rng().gen_range(-JITTER_SPAN..JITTER_SPAN)
    }
}

/// Always returns the same offset. Values outside the span are clamped.
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&self) -> f64 {
        self.0.clamp(-JITTER_SPAN, JITTER_SPAN)
    }
}

/// Disables jitter entirely.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&self) -> f64 {
        0.0
    }
}

/// Score before jitter: `round(matched / required * 100)`, or 0 with no required skills.
pub fn base_score(matched_count: usize, job_skill_count: usize) -> u32 {
    if job_skill_count == 0 {
        return 0;
    }
    let ratio = matched_count as f64 / job_skill_count as f64;
    (ratio * 100.0).round() as u32
}

pub fn compute_score(
    matched_count: usize,
    job_skill_count: usize,
    jitter: &dyn JitterSource,
) -> u32 {
    let base = base_score(matched_count, job_skill_count) as f64;
    let adjusted = (base + jitter.jitter()).clamp(MIN_SCORE, MAX_SCORE);
    adjusted.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_of_five_without_jitter_is_80() {
        assert_eq!(compute_score(4, 5, &NoJitter), 80);
    }

    #[test]
    fn test_two_of_four_without_jitter_is_50() {
        assert_eq!(compute_score(2, 4, &FixedJitter(0.0)), 50);
    }

    #[test]
    fn test_base_score_rounds_half_up() {
        // 1/8 = 12.5 → 13
        assert_eq!(base_score(1, 8), 13);
        // 2/3 = 66.67 → 67
        assert_eq!(base_score(2, 3), 67);
    }

    #[test]
    fn test_no_job_skills_floors_to_min() {
        assert_eq!(base_score(0, 0), 0);
        assert_eq!(compute_score(0, 0, &NoJitter), 20);
        assert_eq!(compute_score(3, 0, &FixedJitter(10.0)), 20);
    }

    #[test]
    fn test_low_ratio_is_floored_at_20() {
        assert_eq!(compute_score(0, 5, &FixedJitter(-10.0)), 20);
        assert_eq!(compute_score(1, 10, &NoJitter), 20);
    }

    #[test]
    fn test_perfect_match_is_capped_at_100() {
        assert_eq!(compute_score(5, 5, &FixedJitter(10.0)), 100);
    }

    #[test]
    fn test_fixed_jitter_is_applied_and_rounded() {
        assert_eq!(compute_score(1, 2, &FixedJitter(4.4)), 54);
        assert_eq!(compute_score(1, 2, &FixedJitter(-7.6)), 42);
    }

    #[test]
    fn test_fixed_jitter_outside_span_is_clamped() {
        assert_eq!(FixedJitter(50.0).jitter(), 10.0);
        assert_eq!(FixedJitter(-50.0).jitter(), -10.0);
    }

    #[test]
    fn test_random_jitter_always_within_bounds() {
        let source = RandomJitter;
        for matched in 0..=6 {
            for _ in 0..200 {
                let j = source.jitter();
                assert!((-JITTER_SPAN..JITTER_SPAN).contains(&j), "jitter {j}");
                let score = compute_score(matched, 6, &source);
                assert!((20..=100).contains(&score), "score {score}");
            }
        }
    }

    #[test]
    fn test_random_jitter_stays_near_base() {
        let source = RandomJitter;
        for _ in 0..200 {
            let score = compute_score(3, 5, &source) as i64;
            assert!((score - 60).abs() <= 10, "score {score}");
        }
    }
}
