// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use panzoom_view::Transform;

use crate::step::{sanitize_speed, step};

/// Identifies one animation started by an [`Animator`].
///
/// Handles are generation counters: every [`Animator::start`] and
/// [`Animator::cancel`] bumps the generation, so a frame callback holding an
/// older handle sees [`Frame::Stale`] and must not reschedule itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Raw generation value, for hosts that pass handles through untyped APIs.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Result of advancing an animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Apply the transform and request another frame.
    Continue(Transform),
    /// Apply the transform; the animation is over.
    Finished(Transform),
    /// The handle was cancelled or superseded; apply nothing.
    Stale,
}

#[derive(Clone, Copy, Debug)]
struct Active {
    handle: AnimationHandle,
    target: Transform,
    speed: f64,
}

/// Drives a transform towards a target with exponential decay.
///
/// At most one animation is live. Starting a new one supersedes the previous
/// one, and the owner cancels explicitly when a gesture takes over.
///
/// ```
/// use panzoom_transition::{Animator, Frame};
/// use panzoom_view::Transform;
///
/// let mut animator = Animator::new();
/// let target = Transform::new(0.0, 0.0, 2.0);
/// let handle = animator.start(&Transform::IDENTITY, target, 0.5).unwrap();
///
/// let mut current = Transform::IDENTITY;
/// loop {
///     match animator.tick(handle, &current) {
///         Frame::Continue(next) => current = next,
///         Frame::Finished(last) => {
///             current = last;
///             break;
///         }
///         Frame::Stale => unreachable!(),
///     }
/// }
/// assert_eq!(current, target);
/// assert!(!animator.is_animating());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Animator {
    generation: u64,
    active: Option<Active>,
}

impl Animator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating from `from` towards `to` at `speed`.
    ///
    /// Any animation in flight is superseded. Returns `None` when `from` is
    /// already approximately at `to`, in which case nothing is animating.
    /// `speed` is clamped into `(0, 1]`.
    pub fn start(&mut self, from: &Transform, to: Transform, speed: f64) -> Option<AnimationHandle> {
        self.cancel();
        if from.approx_eq(&to) {
            return None;
        }
        let handle = self.bump();
        let speed = sanitize_speed(speed);
        log::debug!(
            "animation {} started towards top={} left={} scale={} at speed {}",
            handle.0,
            to.top,
            to.left,
            to.scale,
            speed
        );
        self.active = Some(Active {
            handle,
            target: to,
            speed,
        });
        Some(handle)
    }

    /// Cancels the animation in flight, if any.
    ///
    /// Returns `true` if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                log::debug!("animation {} cancelled", active.handle.0);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Returns `true` while an animation is live.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Handle of the live animation.
    #[must_use]
    pub fn handle(&self) -> Option<AnimationHandle> {
        self.active.map(|a| a.handle)
    }

    /// Target of the live animation.
    #[must_use]
    pub fn target(&self) -> Option<Transform> {
        self.active.map(|a| a.target)
    }

    /// Advances the animation identified by `handle` by one frame from `current`.
    pub fn tick(&mut self, handle: AnimationHandle, current: &Transform) -> Frame {
        let Some(active) = self.active.filter(|a| a.handle == handle) else {
            return Frame::Stale;
        };
        let next = step(current, &active.target, active.speed);
        if next.approx_eq(&active.target) {
            log::debug!("animation {} finished", handle.0);
            self.active = None;
            Frame::Finished(active.target)
        } else {
            log::trace!(
                "animation {} frame top={} left={} scale={}",
                handle.0,
                next.top,
                next.left,
                next.scale
            );
            Frame::Continue(next)
        }
    }

    fn bump(&mut self) -> AnimationHandle {
        self.generation = self.generation.wrapping_add(1);
        AnimationHandle(self.generation)
    }
}

#[cfg(test)]
mod tests {
    use panzoom_view::Transform;

    use super::{Animator, Frame};
    use crate::step::DEFAULT_SPEED;

    fn run(animator: &mut Animator, from: Transform) -> (Transform, usize) {
        let handle = animator.handle().unwrap();
        let mut current = from;
        for frames in 1..1_000 {
            match animator.tick(handle, &current) {
                Frame::Continue(next) => current = next,
                Frame::Finished(last) => return (last, frames),
                Frame::Stale => panic!("unexpected stale frame"),
            }
        }
        panic!("animation did not terminate");
    }

    #[test]
    fn scale_one_to_two_terminates() {
        let mut animator = Animator::new();
        let target = Transform::new(0.0, 0.0, 2.0);
        animator.start(&Transform::IDENTITY, target, DEFAULT_SPEED);
        let (last, frames) = run(&mut animator, Transform::IDENTITY);
        assert_eq!(last, target);
        assert!(frames < 100, "took {frames} frames");
        assert!(!animator.is_animating());
    }

    #[test]
    fn start_at_target_is_noop() {
        let mut animator = Animator::new();
        let t = Transform::new(1.0, 2.0, 1.5);
        assert_eq!(animator.start(&t, t, DEFAULT_SPEED), None);
        assert!(!animator.is_animating());
    }

    #[test]
    fn new_animation_supersedes_old_handle() {
        let mut animator = Animator::new();
        let first = animator
            .start(&Transform::IDENTITY, Transform::new(0.0, 0.0, 2.0), 0.1)
            .unwrap();
        let second = animator
            .start(&Transform::IDENTITY, Transform::new(0.0, 0.0, 3.0), 0.1)
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(animator.tick(first, &Transform::IDENTITY), Frame::Stale);
        assert!(matches!(
            animator.tick(second, &Transform::IDENTITY),
            Frame::Continue(_)
        ));
        assert_eq!(animator.target(), Some(Transform::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn cancel_makes_handle_stale() {
        let mut animator = Animator::new();
        let handle = animator
            .start(&Transform::IDENTITY, Transform::new(-10.0, -10.0, 1.2), 0.1)
            .unwrap();
        assert!(animator.cancel());
        assert!(!animator.cancel());
        assert_eq!(animator.tick(handle, &Transform::IDENTITY), Frame::Stale);
        assert_eq!(animator.target(), None);
    }

    #[test]
    fn invalid_speed_still_terminates() {
        let mut animator = Animator::new();
        let target = Transform::new(-30.0, 20.0, 1.5);
        animator.start(&Transform::IDENTITY, target, f64::NAN);
        let (last, _) = run(&mut animator, Transform::IDENTITY);
        assert_eq!(last, target);
    }
}
