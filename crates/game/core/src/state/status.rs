//! Mood and health meters.

/// Which player meter an effect targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatKind {
    Mood,
    Health,
}

/// Bounded counter in `0..=maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMeter {
    current: u8,
    maximum: u8,
}

impl StatMeter {
    pub fn new(current: u8, maximum: u8) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn maximum(&self) -> u8 {
        self.maximum
    }

    /// Applies `delta` and clamps to range. Returns the change actually applied.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        let before = i32::from(self.current);
        let after = before.saturating_add(delta).clamp(0, i32::from(self.maximum));
        self.current = after as u8;
        after - before
    }

    pub fn set(&mut self, value: u8) {
        self.current = value.min(self.maximum);
    }
}

/// Mood/health pair carried across scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStatus {
    pub mood: StatMeter,
    pub health: StatMeter,
}

impl PlayerStatus {
    pub fn new(mood: u8, health: u8, maximum: u8) -> Self {
        Self {
            mood: StatMeter::new(mood, maximum),
            health: StatMeter::new(health, maximum),
        }
    }

    pub fn meter(&self, stat: StatKind) -> &StatMeter {
        match stat {
            StatKind::Mood => &self.mood,
            StatKind::Health => &self.health,
        }
    }

    pub fn meter_mut(&mut self, stat: StatKind) -> &mut StatMeter {
        match stat {
            StatKind::Mood => &mut self.mood,
            StatKind::Health => &mut self.health,
        }
    }

    pub fn adjust(&mut self, stat: StatKind, delta: i32) -> i32 {
        self.meter_mut(stat).adjust(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_stays_in_range_for_small_steps() {
        let deltas = [1, 2, -1, -2];
        for start in 0..=9u8 {
            let mut meter = StatMeter::new(start, 9);
            // walk a deterministic pseudo-random sequence of steps
            let mut seed = u32::from(start) * 7 + 3;
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let delta = deltas[(seed >> 16) as usize % deltas.len()];
                let before = i32::from(meter.current());
                let applied = meter.adjust(delta);
                assert!(meter.current() <= 9);
                assert_eq!(i32::from(meter.current()), before + applied);
            }
        }
    }

    #[test]
    fn clamps_at_both_edges() {
        let mut meter = StatMeter::new(8, 9);
        assert_eq!(meter.adjust(2), 1);
        assert_eq!(meter.current(), 9);

        let mut meter = StatMeter::new(1, 9);
        assert_eq!(meter.adjust(-2), -1);
        assert_eq!(meter.current(), 0);
        assert_eq!(meter.adjust(-1), 0);
    }

    #[test]
    fn extreme_deltas_saturate() {
        let mut meter = StatMeter::new(5, 9);
        assert_eq!(meter.adjust(i32::MAX), 4);
        assert_eq!(meter.current(), 9);
        assert_eq!(meter.adjust(i32::MIN), -9);
        assert_eq!(meter.current(), 0);
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(StatMeter::new(12, 9).current(), 9);
    }
}
