// Contact start/move/end -> tap, double tap, swipe, pinch.

use tracing::trace;

use super::config::GestureConfig;

pub const TAP_MAX_DISTANCE: f64 = 10.0;
pub const TAP_MAX_DURATION_MS: f64 = 300.0;
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactPoint {
    pub x: f64,
    pub y: f64,
    pub timestamp: f64,
}

impl ContactPoint {
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        Self { x, y, timestamp }
    }

    pub fn distance_to(&self, other: &ContactPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Tap,
    DoubleTap,
    Swipe(SwipeDirection),
    PinchStart,
    Pinch(f64),
    PinchEnd,
}

#[derive(Clone, Copy, Debug)]
pub enum ContactInput<'a> {
    Start { active: &'a [ContactPoint] },
    Move { active: &'a [ContactPoint] },
    End {
        remaining: usize,
        lifted: &'a [ContactPoint],
        timestamp: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Single { start: ContactPoint },
    Pinch { baseline: f64, scale: f64 },
    // Contacts still down, none tracked; a finger left from a pinch is not re-armed.
    Draining,
}

#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    phase: Phase,
    last_tap: Option<f64>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            last_tap: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn contact_start(&mut self, active: &[ContactPoint]) -> Option<Gesture> {
        self.step(ContactInput::Start { active })
    }

    pub fn contact_move(&mut self, active: &[ContactPoint]) -> Option<Gesture> {
        self.step(ContactInput::Move { active })
    }

    pub fn contact_end(
        &mut self,
        remaining: usize,
        lifted: &[ContactPoint],
        timestamp: f64,
    ) -> Option<Gesture> {
        self.step(ContactInput::End {
            remaining,
            lifted,
            timestamp,
        })
    }

    pub fn step(&mut self, input: ContactInput<'_>) -> Option<Gesture> {
        match input {
            ContactInput::Start { active } => self.on_start(active),
            ContactInput::Move { active } => self.on_move(active),
            ContactInput::End {
                remaining,
                lifted,
                timestamp,
            } => self.on_end(remaining, lifted, timestamp),
        }
    }

    fn on_start(&mut self, active: &[ContactPoint]) -> Option<Gesture> {
        match (active, self.phase) {
            ([only], _) => {
                self.phase = Phase::Single { start: *only };
                None
            }
            // A third finger never disturbs a running pinch.
            (_, Phase::Pinch { .. }) => None,
            ([a, b], _) => {
                self.phase = Phase::Pinch {
                    baseline: a.distance_to(b),
                    scale: 1.0,
                };
                Some(Gesture::PinchStart)
            }
            ([], _) => None,
            (_, Phase::Single { .. }) => {
                self.phase = Phase::Draining;
                None
            }
            (_, _) => None,
        }
    }

    fn on_move(&mut self, active: &[ContactPoint]) -> Option<Gesture> {
        let Phase::Pinch { baseline, scale } = &mut self.phase else {
            return None;
        };
        let [a, b] = active else {
            return None;
        };
        if *baseline <= 0.0 {
            return None;
        }
        let next = a.distance_to(b) / *baseline;
        if (next - *scale).abs() > self.config.pinch_threshold {
            *scale = next;
            Some(Gesture::Pinch(next))
        } else {
            None
        }
    }

    fn on_end(&mut self, remaining: usize, lifted: &[ContactPoint], now: f64) -> Option<Gesture> {
        match self.phase {
            Phase::Idle => None,
            Phase::Single { start } => {
                if remaining > 0 {
                    return None;
                }
                self.phase = Phase::Idle;
                let end = lifted.first()?;
                self.classify_release(start, end, now)
            }
            // Lifting to one contact already ends the pinch; the last
            // finger only drains.
            Phase::Pinch { .. } => {
                if remaining >= 2 {
                    return None;
                }
                self.phase = if remaining == 0 {
                    Phase::Idle
                } else {
                    Phase::Draining
                };
                Some(Gesture::PinchEnd)
            }
            Phase::Draining => {
                if remaining == 0 {
                    self.phase = Phase::Idle;
                }
                None
            }
        }
    }

    fn classify_release(
        &mut self,
        start: ContactPoint,
        end: &ContactPoint,
        now: f64,
    ) -> Option<Gesture> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let distance = dx.hypot(dy);
        let elapsed = end.timestamp - start.timestamp;

        if distance < TAP_MAX_DISTANCE && elapsed < TAP_MAX_DURATION_MS {
            let paired = self
                .last_tap
                .is_some_and(|prev| now - prev < DOUBLE_TAP_WINDOW_MS);
            if paired {
                self.last_tap = None;
                return Some(Gesture::DoubleTap);
            }
            self.last_tap = Some(now);
            return Some(Gesture::Tap);
        }

        if distance > self.config.swipe_threshold {
            let direction = if dx.abs() > dy.abs() {
                if dx > 0.0 {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                }
            } else if dy > 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            };
            return Some(Gesture::Swipe(direction));
        }

        trace!(distance, elapsed, "release in dead zone");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64, t: f64) -> ContactPoint {
        ContactPoint::new(x, y, t)
    }

    fn single(r: &mut GestureRecognizer, from: ContactPoint, to: ContactPoint) -> Option<Gesture> {
        assert_eq!(r.contact_start(&[from]), None);
        r.contact_end(0, &[to], to.timestamp)
    }

    fn tap_at(r: &mut GestureRecognizer, t: f64) -> Option<Gesture> {
        single(r, pt(20.0, 20.0, t), pt(21.0, 20.0, t + 40.0))
    }

    #[test]
    fn quick_small_release_is_a_tap() {
        let mut r = GestureRecognizer::default();
        assert_eq!(tap_at(&mut r, 0.0), Some(Gesture::Tap));
        assert_eq!(r.phase(), Phase::Idle);
    }

    #[test]
    fn two_close_taps_pair_and_third_restarts() {
        let mut r = GestureRecognizer::default();
        assert_eq!(tap_at(&mut r, 0.0), Some(Gesture::Tap));
        assert_eq!(tap_at(&mut r, 100.0), Some(Gesture::DoubleTap));
        assert_eq!(tap_at(&mut r, 200.0), Some(Gesture::Tap));
    }

    #[test]
    fn taps_far_apart_in_time_stay_single() {
        let mut r = GestureRecognizer::default();
        assert_eq!(tap_at(&mut r, 0.0), Some(Gesture::Tap));
        assert_eq!(tap_at(&mut r, 1_000.0), Some(Gesture::Tap));
    }

    #[test]
    fn every_small_quick_release_reports_exactly_one_tap_kind() {
        let mut r = GestureRecognizer::default();
        let mut t = 0.0;
        for (dx, dur) in [(0.0, 10.0), (5.0, 100.0), (9.0, 299.0), (3.0, 0.0)] {
            let g = single(&mut r, pt(0.0, 0.0, t), pt(dx, 0.0, t + dur));
            assert!(matches!(g, Some(Gesture::Tap | Gesture::DoubleTap)), "{dx} {dur}: {g:?}");
            t += 50.0;
        }
    }

    #[test]
    fn swipes_in_four_directions() {
        let cases = [
            ((100.0, 0.0), SwipeDirection::Right),
            ((-100.0, 0.0), SwipeDirection::Left),
            ((0.0, 100.0), SwipeDirection::Down),
            ((0.0, -100.0), SwipeDirection::Up),
        ];
        for ((x, y), dir) in cases {
            let mut r = GestureRecognizer::default();
            let g = single(&mut r, pt(0.0, 0.0, 0.0), pt(x, y, 50.0));
            assert_eq!(g, Some(Gesture::Swipe(dir)));
        }
    }

    #[test]
    fn diagonal_swipe_follows_dominant_axis() {
        let mut r = GestureRecognizer::default();
        let g = single(&mut r, pt(0.0, 0.0, 0.0), pt(-80.0, 60.0, 120.0));
        assert_eq!(g, Some(Gesture::Swipe(SwipeDirection::Left)));
    }

    #[test]
    fn slow_swipe_still_counts() {
        let mut r = GestureRecognizer::default();
        let g = single(&mut r, pt(0.0, 0.0, 0.0), pt(0.0, 200.0, 2_000.0));
        assert_eq!(g, Some(Gesture::Swipe(SwipeDirection::Down)));
    }

    #[test]
    fn dead_zone_reports_nothing() {
        let mut r = GestureRecognizer::default();
        let g = single(&mut r, pt(0.0, 0.0, 0.0), pt(30.0, 0.0, 500.0));
        assert_eq!(g, None);
        // Small but slow.
        let g = single(&mut r, pt(0.0, 0.0, 1_000.0), pt(2.0, 0.0, 1_400.0));
        assert_eq!(g, None);
        assert_eq!(r.phase(), Phase::Idle);
    }

    #[test]
    fn custom_swipe_threshold_applies() {
        let mut r = GestureRecognizer::new(GestureConfig {
            swipe_threshold: 20.0,
            ..GestureConfig::default()
        });
        let g = single(&mut r, pt(0.0, 0.0, 0.0), pt(30.0, 0.0, 500.0));
        assert_eq!(g, Some(Gesture::Swipe(SwipeDirection::Right)));
    }

    #[test]
    fn pinch_updates_are_debounced() {
        let mut r = GestureRecognizer::default();
        let a = pt(0.0, 0.0, 0.0);
        assert_eq!(r.contact_start(&[a]), None);
        assert_eq!(
            r.contact_start(&[a, pt(100.0, 0.0, 10.0)]),
            Some(Gesture::PinchStart)
        );
        assert_eq!(
            r.contact_move(&[a, pt(120.0, 0.0, 20.0)]),
            Some(Gesture::Pinch(1.2))
        );
        assert_eq!(r.contact_move(&[a, pt(121.0, 0.0, 30.0)]), None);
        assert_eq!(r.contact_end(0, &[a], 40.0), Some(Gesture::PinchEnd));
        assert_eq!(r.phase(), Phase::Idle);
    }

    #[test]
    fn slow_drift_accumulates_until_threshold() {
        let mut r = GestureRecognizer::default();
        let a = pt(0.0, 0.0, 0.0);
        r.contact_start(&[a, pt(100.0, 0.0, 0.0)]);
        let mut fired = Vec::new();
        for d in [105.0, 109.0, 111.0, 115.0] {
            if let Some(g) = r.contact_move(&[a, pt(d, 0.0, 0.0)]) {
                fired.push(g);
            }
        }
        assert_eq!(fired.len(), 1);
        assert!(matches!(fired[0], Gesture::Pinch(s) if (s - 1.11).abs() < 1e-9));
    }

    #[test]
    fn lifting_one_pinch_finger_ends_pinch_without_rearming() {
        let mut r = GestureRecognizer::default();
        let a = pt(0.0, 0.0, 0.0);
        let b = pt(100.0, 0.0, 0.0);
        r.contact_start(&[a, b]);
        assert_eq!(r.contact_end(1, &[b], 50.0), Some(Gesture::PinchEnd));
        assert_eq!(r.phase(), Phase::Draining);
        // The remaining finger moving and lifting reports nothing.
        assert_eq!(r.contact_move(&[pt(150.0, 0.0, 60.0)]), None);
        assert_eq!(r.contact_end(0, &[pt(150.0, 0.0, 70.0)], 70.0), None);
        assert_eq!(r.phase(), Phase::Idle);
    }

    #[test]
    fn third_finger_is_ignored_during_pinch() {
        let mut r = GestureRecognizer::default();
        let a = pt(0.0, 0.0, 0.0);
        let b = pt(100.0, 0.0, 0.0);
        r.contact_start(&[a, b]);
        assert_eq!(r.contact_start(&[a, b, pt(50.0, 50.0, 0.0)]), None);
        assert_eq!(r.contact_move(&[a, pt(200.0, 0.0, 0.0), pt(50.0, 50.0, 0.0)]), None);
        assert_eq!(r.contact_end(2, &[pt(50.0, 50.0, 0.0)], 10.0), None);
        assert_eq!(
            r.contact_move(&[a, pt(200.0, 0.0, 0.0)]),
            Some(Gesture::Pinch(2.0))
        );
    }

    #[test]
    fn second_finger_discards_single_tracking() {
        let mut r = GestureRecognizer::default();
        let a = pt(0.0, 0.0, 0.0);
        r.contact_start(&[a]);
        r.contact_start(&[a, pt(40.0, 0.0, 10.0)]);
        assert_eq!(r.contact_end(0, &[a], 20.0), Some(Gesture::PinchEnd));
        // No tap was recorded, so the next tap is a first tap.
        assert_eq!(tap_at(&mut r, 30.0), Some(Gesture::Tap));
    }

    #[test]
    fn zero_baseline_pinch_never_updates() {
        let mut r = GestureRecognizer::default();
        let a = pt(10.0, 10.0, 0.0);
        r.contact_start(&[a, a]);
        assert_eq!(r.contact_move(&[a, pt(90.0, 10.0, 5.0)]), None);
    }

    #[test]
    fn stray_inputs_are_ignored() {
        let mut r = GestureRecognizer::default();
        assert_eq!(r.contact_move(&[pt(1.0, 1.0, 0.0)]), None);
        assert_eq!(r.contact_end(0, &[pt(1.0, 1.0, 0.0)], 0.0), None);
        assert_eq!(r.contact_start(&[]), None);
        assert_eq!(r.phase(), Phase::Idle);
    }
}
