/// Display slots: the current color of each palette position and its copy feedback.
use std::time::{Duration, Instant};

use crate::color::Color;
use crate::palette::{PALETTE_SIZE, Palette};

/// How long the copy affordance stays confirmed after a successful copy.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Idle,
    Confirmed { until: Instant },
}

#[derive(Clone, Debug)]
pub struct Slot {
    pub color: Color,
    pub feedback: Feedback,
}

impl Slot {
    pub fn is_confirmed(&self) -> bool {
        matches!(self.feedback, Feedback::Confirmed { .. })
    }
}

pub struct Slots {
    slots: [Slot; PALETTE_SIZE],
}

impl Slots {
    pub fn new(palette: &Palette) -> Self {
        Self {
            slots: std::array::from_fn(|index| Slot {
                color: palette.colors()[index].clone(),
                feedback: Feedback::Idle,
            }),
        }
    }

    /// Overwrites every slot's color with the palette entry at the same index.
    pub fn render(&mut self, palette: &Palette) {
        for (slot, color) in self.slots.iter_mut().zip(palette.iter()) {
            slot.color = color.clone();
        }
    }

    pub fn color(&self, index: usize) -> Option<&Color> {
        self.slots.get(index).map(|slot| &slot.color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Confirms a slot; a pending reversion for it is replaced.
    pub fn confirm(&mut self, index: usize, now: Instant) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.feedback = Feedback::Confirmed {
                until: now + FEEDBACK_DURATION,
            };
        }
    }

    /// Reverts every slot whose deadline has been reached. Returns whether anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for slot in &mut self.slots {
            if let Feedback::Confirmed { until } = slot.feedback {
                if now >= until {
                    slot.feedback = Feedback::Idle;
                    changed = true;
                }
            }
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .iter()
            .filter_map(|slot| match slot.feedback {
                Feedback::Confirmed { until } => Some(until),
                Feedback::Idle => None,
            })
            .min()
    }
}

#[cfg(test)]
impl Slots {
    pub(crate) fn is_confirmed(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::generate;

    #[test]
    fn render_replaces_every_color() {
        let first = generate();
        let second = generate();
        let mut slots = Slots::new(&first);
        slots.render(&second);
        for (index, color) in second.iter().enumerate() {
            assert_eq!(slots.color(index), Some(color));
        }
        assert_eq!(slots.color(PALETTE_SIZE), None);
    }

    #[test]
    fn confirmation_reverts_at_deadline() {
        let mut slots = Slots::new(&generate());
        let start = Instant::now();
        slots.confirm(2, start);
        assert!(slots.is_confirmed(2));

        assert!(!slots.expire(start + Duration::from_millis(999)));
        assert!(slots.is_confirmed(2));

        assert!(slots.expire(start + FEEDBACK_DURATION));
        assert!(!slots.is_confirmed(2));
        assert_eq!(slots.next_deadline(), None);
    }

    #[test]
    fn reconfirm_cancels_pending_reversion() {
        let mut slots = Slots::new(&generate());
        let start = Instant::now();
        slots.confirm(0, start);
        slots.confirm(0, start + Duration::from_millis(600));

        slots.expire(start + FEEDBACK_DURATION);
        assert!(slots.is_confirmed(0));

        slots.expire(start + Duration::from_millis(1600));
        assert!(!slots.is_confirmed(0));
    }

    #[test]
    fn next_deadline_is_earliest() {
        let mut slots = Slots::new(&generate());
        let start = Instant::now();
        slots.confirm(4, start + Duration::from_millis(300));
        slots.confirm(1, start);
        assert_eq!(slots.next_deadline(), Some(start + FEEDBACK_DURATION));
    }

    #[test]
    fn slot_reports_its_own_feedback() {
        let mut slots = Slots::new(&generate());
        slots.confirm(1, Instant::now());
        let confirmed: Vec<bool> = slots.iter().map(Slot::is_confirmed).collect();
        assert_eq!(confirmed, vec![false, true, false, false, false]);
    }

    #[test]
    fn render_keeps_feedback_state() {
        let mut slots = Slots::new(&generate());
        let start = Instant::now();
        slots.confirm(3, start);
        slots.render(&generate());
        assert!(slots.is_confirmed(3));
    }
}
