//! Parameters and step functions for the decorative effects.
//!
//! All of it is deterministic so the server render and the hydrated client
//! agree on the markup.

use std::time::Duration;

pub const TYPEWRITER_TICK: Duration = Duration::from_millis(90);
/// Ticks to hold a finished phrase before deleting it.
pub const TYPEWRITER_HOLD_TICKS: u32 = 18;
pub const MAX_TILT_DEG: f64 = 12.0;
pub const PETAL_COUNT: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Typewriter over a fixed phrase list: type, hold, delete, next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or_default()
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.current();
        let end = phrase
            .char_indices()
            .nth(self.chars)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        let len = self.current().chars().count();
        self.phase = match self.phase {
            Phase::Typing if self.chars < len => {
                self.chars += 1;
                if self.chars == len {
                    Phase::Holding(0)
                } else {
                    Phase::Typing
                }
            }
            Phase::Typing => Phase::Holding(0),
            Phase::Holding(n) if n + 1 < TYPEWRITER_HOLD_TICKS => Phase::Holding(n + 1),
            Phase::Holding(_) => Phase::Deleting,
            Phase::Deleting if self.chars > 0 => {
                self.chars -= 1;
                Phase::Deleting
            }
            Phase::Deleting => {
                self.phrase = (self.phrase + 1) % self.phrases.len();
                Phase::Typing
            }
        };
    }
}

/// Card rotation in degrees for a pointer at `(x, y)` inside a `w` x `h` box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(x: f64, y: f64, w: f64, h: f64, max_deg: f64) -> Self {
        if w <= 0.0 || h <= 0.0 {
            return Self::default();
        }
        let nx = (x / w - 0.5) * 2.0;
        let ny = (y / h - 0.5) * 2.0;
        Self {
            rotate_x: (-ny * max_deg).clamp(-max_deg, max_deg),
            rotate_y: (nx * max_deg).clamp(-max_deg, max_deg),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub drift_px: f64,
}

impl Petal {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; width: {:.0}px; height: {:.0}px; animation-duration: {:.1}s; animation-delay: {:.1}s; --petal-drift: {:.0}px;",
            self.left_pct, self.size_px, self.size_px, self.duration_s, self.delay_s, self.drift_px
        )
    }
}

// splitmix-style scramble; only needs to look random
fn scramble(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit(seed: u64) -> f64 {
    (scramble(seed) >> 11) as f64 / (1u64 << 53) as f64
}

pub fn petals(count: usize) -> Vec<Petal> {
    (0..count as u64)
        .map(|i| {
            let s = i * 5;
            Petal {
                left_pct: unit(s) * 100.0,
                size_px: 8.0 + unit(s + 1) * 10.0,
                duration_s: 9.0 + unit(s + 2) * 8.0,
                delay_s: unit(s + 3) * 10.0,
                drift_px: -80.0 + unit(s + 4) * 160.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["hi", "yo"];

    #[test]
    fn test_typewriter_cycle() {
        let mut tw = Typewriter::new(PHRASES);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "h");
        tw.tick();
        assert_eq!(tw.text(), "hi");
        for _ in 0..TYPEWRITER_HOLD_TICKS {
            tw.tick();
            assert_eq!(tw.text(), "hi");
        }
        tw.tick();
        assert_eq!(tw.text(), "h");
        tw.tick();
        assert_eq!(tw.text(), "");
        // empty: move to next phrase
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "y");
    }

    #[test]
    fn test_typewriter_wraps_around() {
        let mut tw = Typewriter::new(PHRASES);
        let per_phrase = 2 + TYPEWRITER_HOLD_TICKS as usize + 2 + 1;
        for _ in 0..per_phrase * 2 {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.text(), "h");
    }

    #[test]
    fn test_typewriter_multibyte() {
        const WIDE: &[&str] = &["né"];
        let mut tw = Typewriter::new(WIDE);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "né");
    }

    #[test]
    fn test_typewriter_empty_list() {
        let mut tw = Typewriter::new(&[]);
        tw.tick();
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_tilt_center_is_flat() {
        let t = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0, MAX_TILT_DEG);
        assert_eq!(t, Tilt::default());
    }

    #[test]
    fn test_tilt_corners_and_clamp() {
        let t = Tilt::from_pointer(200.0, 0.0, 200.0, 100.0, 10.0);
        assert_eq!(t.rotate_x, 10.0);
        assert_eq!(t.rotate_y, 10.0);
        let t = Tilt::from_pointer(-500.0, 900.0, 200.0, 100.0, 10.0);
        assert_eq!(t.rotate_x, -10.0);
        assert_eq!(t.rotate_y, -10.0);
        assert_eq!(
            Tilt::from_pointer(1.0, 1.0, 0.0, 0.0, 10.0),
            Tilt::default()
        );
    }

    #[test]
    fn test_petals_deterministic_and_bounded() {
        let a = petals(PETAL_COUNT);
        assert_eq!(a, petals(PETAL_COUNT));
        assert_eq!(a.len(), PETAL_COUNT);
        for p in &a {
            assert!((0.0..=100.0).contains(&p.left_pct));
            assert!((8.0..=18.0).contains(&p.size_px));
            assert!((9.0..=17.0).contains(&p.duration_s));
            assert!((-80.0..=80.0).contains(&p.drift_px));
        }
        assert_ne!(a[0], a[1]);
    }
}
