//! Scrubber and animation state shared by the control panel and the scene.
//!
//! The slider records the position it last committed so that any number of
//! moves between two commits produce a single scene update.

use bevy::prelude::Resource;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TimeSlider {
    start: usize,
    end: usize,
    current: usize,
    previous: usize,
    changed: bool,
    animation: bool,
}

impl TimeSlider {
    /// Slider over `start..=end` positioned at `default_start` (clamped).
    pub fn new(start: usize, end: usize, default_start: usize) -> Self {
        let end = end.max(start);
        let current = default_start.clamp(start, end);
        Self {
            start,
            end,
            current,
            previous: current,
            changed: false,
            animation: false,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Position committed by the last [`TimeSlider::draw`].
    pub fn previous(&self) -> usize {
        self.previous
    }

    pub fn set_current(&mut self, value: usize) {
        self.current = value.clamp(self.start, self.end);
    }

    pub fn step(&mut self, delta: isize) {
        let target = (self.current as isize).saturating_add(delta);
        self.current = target.clamp(self.start as isize, self.end as isize) as usize;
    }

    /// Compare the current position against the committed one and commit it.
    /// Returns true when the position moved since the previous draw.
    pub fn draw(&mut self) -> bool {
        self.changed = self.current != self.previous;
        if self.changed {
            self.previous = self.current;
        }
        self.changed
    }

    /// Whether the last [`TimeSlider::draw`] committed a move.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn animation(&self) -> bool {
        self.animation
    }

    pub fn set_animation(&mut self, on: bool) {
        self.animation = on;
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.animation = !self.animation;
        self.animation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Advance the scene to this frame.
    Show(usize),
    /// Keep the current frame on screen.
    Hold,
    /// The last frame has had its full dwell time.
    Finished,
}

/// Walks through `frames` frames, holding each for `dwell_secs`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    frames: usize,
    dwell_secs: f32,
    frame: usize,
    elapsed: f32,
}

impl AnimationClock {
    /// Clock positioned on frame 0.
    pub fn new(frames: usize, dwell_secs: f32) -> Self {
        Self {
            frames,
            dwell_secs: dwell_secs.max(0.0),
            frame: 0,
            elapsed: 0.0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn tick(&mut self, delta_secs: f32) -> AnimationStep {
        if self.frames == 0 {
            return AnimationStep::Finished;
        }

        self.elapsed += delta_secs;
        if self.elapsed < self.dwell_secs {
            return AnimationStep::Hold;
        }

        // One frame per tick, each shown for a full dwell even after a stall.
        self.elapsed = 0.0;
        if self.frame + 1 >= self.frames {
            return AnimationStep::Finished;
        }
        self.frame += 1;
        AnimationStep::Show(self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slider_clamps_and_starts_unchanged() {
        let slider = TimeSlider::new(0, 9, 20);
        assert_eq!(slider.current(), 9);
        assert_eq!(slider.previous(), 9);
        assert!(!slider.changed());
        assert!(!slider.animation());

        let single = TimeSlider::new(3, 1, 0);
        assert_eq!((single.start(), single.end(), single.current()), (3, 3, 3));
    }

    #[test]
    fn draw_reports_each_move_once() {
        let mut slider = TimeSlider::new(0, 10, 0);
        assert!(!slider.draw());

        slider.set_current(4);
        assert!(slider.draw());
        assert!(slider.changed());
        assert_eq!(slider.previous(), 4);

        assert!(!slider.draw());
        assert!(!slider.changed());
    }

    #[test]
    fn moves_between_draws_coalesce() {
        let mut slider = TimeSlider::new(0, 10, 0);
        slider.set_current(3);
        slider.set_current(7);
        slider.step(-1);
        assert!(slider.draw());
        assert_eq!(slider.previous(), 6);

        // Moving away and back before a draw is no change at all.
        slider.set_current(2);
        slider.set_current(6);
        assert!(!slider.draw());
    }

    #[test]
    fn step_and_set_stay_in_range() {
        let mut slider = TimeSlider::new(2, 5, 2);
        slider.step(-3);
        assert_eq!(slider.current(), 2);
        slider.step(isize::MAX);
        assert_eq!(slider.current(), 5);
        slider.set_current(0);
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn toggles_animation() {
        let mut slider = TimeSlider::new(0, 3, 0);
        assert!(slider.toggle_animation());
        assert!(slider.animation());
        assert!(!slider.toggle_animation());
        slider.set_animation(true);
        assert!(slider.animation());
    }

    #[test]
    fn clock_holds_then_advances() {
        let mut clock = AnimationClock::new(3, 3.0);
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.tick(1.0), AnimationStep::Hold);
        assert_eq!(clock.tick(2.5), AnimationStep::Show(1));
        assert_eq!(clock.tick(2.0), AnimationStep::Hold);
        assert_eq!(clock.tick(0.6), AnimationStep::Hold);
        assert_eq!(clock.tick(0.5), AnimationStep::Show(2));
        assert_eq!(clock.tick(3.0), AnimationStep::Finished);
    }

    #[test]
    fn long_tick_advances_a_single_frame() {
        let mut clock = AnimationClock::new(3, 1.0);
        assert_eq!(clock.tick(2.5), AnimationStep::Show(1));
        assert_eq!(clock.tick(0.5), AnimationStep::Hold);
        assert_eq!(clock.tick(10.0), AnimationStep::Show(2));
        assert_eq!(clock.tick(10.0), AnimationStep::Finished);
    }

    #[test]
    fn empty_clock_finishes_immediately() {
        let mut clock = AnimationClock::new(0, 3.0);
        assert_eq!(clock.tick(0.0), AnimationStep::Finished);
    }
}
