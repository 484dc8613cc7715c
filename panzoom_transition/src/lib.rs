// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Transition: animate a transform towards a target.
//!
//! Each frame moves every field of the [`panzoom_view::Transform`] a fixed
//! fraction of its remaining distance and snaps it onto the target once close
//! enough, so animations always terminate.
//!
//! The crate owns no clock or frame scheduler. Hosts call
//! [`Animator::tick`] once per display refresh with the handle returned from
//! [`Animator::start`], apply the returned transform, and stop rescheduling on
//! [`Frame::Finished`] or [`Frame::Stale`].
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod step;

pub use animator::{AnimationHandle, Animator, Frame};
pub use step::{DEFAULT_SPEED, OFFSET_SNAP, SCALE_SNAP, sanitize_speed, snap_to_target, step};
