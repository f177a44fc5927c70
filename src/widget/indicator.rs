//! Typing Indicator: three dots that bounce and fade in a staggered wave.
//!
//! # State machine
//!
//! The indicator is either animating or not. [`TypingIndicator::start`]
//! flips it to animating immediately and schedules one callback per dot on
//! the [`DeferredQueue`], `index × 0.33 s` out. Each callback attaches the
//! effects that are enabled *when it fires*. [`TypingIndicator::stop`]
//! detaches everything synchronously. Both are no-ops when already in the
//! target state.
//!
//! Callbacks hold a `Weak` reference to the indicator's state, so dropping
//! the indicator turns any still-pending callback into a no-op. Whether
//! callbacks scheduled before a `stop` may still attach afterwards is
//! governed by [`PendingPolicy`]: each `start` captures an epoch that `stop`
//! advances, and under the default `Cancel` policy a callback with a stale
//! epoch does nothing.

use super::config::{validate_bounce_offset, IndicatorConfig, PendingPolicy};
use super::dot::Dot;
use super::traits::Widget;
use crate::animation::{self, EffectKind};
use crate::buffer::{Buffer, Rgb};
use crate::error::ConfigError;
use crate::layout::{Alignment, ArrangedItem, Axis, Distribution, Rect, StackContainer};
use crate::mask::CircularMask;
use crate::runloop::DeferredQueue;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace};

/// Number of dots in an indicator.
pub const DOT_COUNT: usize = 3;

/// Delay between consecutive dots' effects being attached.
pub const STAGGER: Duration = Duration::from_millis(330);

/// Gap between dots whenever the indicator has any width.
pub const DOT_SPACING: f32 = 5.0;

#[derive(Debug)]
struct IndicatorState {
    bounds: Rect,
    config: IndicatorConfig,
    animating: bool,
    epoch: u64,
    dots: [Dot; DOT_COUNT],
    arranged: [ArrangedItem; DOT_COUNT],
    container: StackContainer,
    mask: CircularMask,
    dirty: bool,
}

impl IndicatorState {
    /// Build the dots and their container. Runs once per indicator.
    fn setup_view(bounds: Rect, config: IndicatorConfig) -> Self {
        let dots = std::array::from_fn(|index| Dot::new(index, config.dot_color));
        let mut state = Self {
            bounds,
            config,
            animating: false,
            epoch: 0,
            dots,
            arranged: [Dot::arranged_item(); DOT_COUNT],
            container: StackContainer::new(Axis::Horizontal, Alignment::Center, Distribution::FillEqually),
            mask: CircularMask::default(),
            dirty: true,
        };
        state.layout();
        state
    }

    fn layout(&mut self) {
        self.container.frame = self.bounds.local();
        self.container.spacing = if self.bounds.width > 0.0 { DOT_SPACING } else { 0.0 };

        let frames = self.container.arrange(&self.arranged);
        for (dot, frame) in self.dots.iter_mut().zip(frames) {
            dot.apply_frame(frame, &self.mask);
        }
        self.dirty = true;
    }

    /// Stagger callback body for the dot at `index`.
    fn attach_effects(&mut self, index: usize, epoch: u64, now: Duration) {
        if epoch != self.epoch && self.config.pending_policy == PendingPolicy::Cancel {
            trace!(dot = index, epoch, current = self.epoch, "typing:stale stagger skipped");
            return;
        }

        let IndicatorConfig {
            bounce_offset,
            bounce_enabled,
            fade_enabled,
            ..
        } = self.config;
        let dot = &mut self.dots[index];
        if bounce_enabled {
            dot.attach(EffectKind::Bounce, animation::bounce(bounce_offset), now);
        }
        if fade_enabled {
            dot.attach(EffectKind::Fade, animation::fade(), now);
        }
        self.dirty = true;
        debug!(dot = index, bounce = bounce_enabled, fade = fade_enabled, at = ?now, "typing:effects attached");
    }
}

/// A "someone is typing" indicator: three circular dots in a row.
///
/// The dots are laid out by a horizontal, center-aligned stack that gives
/// each dot an equal share of the width; a standing 1:1 aspect constraint
/// keeps them round. Spacing is [`DOT_SPACING`] whenever the indicator has
/// any width.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use typing_dots::{DeferredQueue, Rect, TypingIndicator};
///
/// let queue = DeferredQueue::new();
/// let mut indicator = TypingIndicator::new(Rect::new(0.0, 0.0, 40.0, 12.0), &queue);
///
/// indicator.start();
/// assert!(indicator.is_animating());
///
/// queue.advance_by(Duration::from_secs(1));
/// assert!(indicator.dots().iter().all(|dot| dot.layer().has_animations()));
///
/// indicator.stop();
/// assert!(!indicator.is_animating());
/// ```
#[derive(Debug)]
pub struct TypingIndicator {
    state: Rc<RefCell<IndicatorState>>,
    queue: DeferredQueue,
}

impl TypingIndicator {
    /// Create an indicator with default configuration.
    ///
    /// Stagger callbacks are scheduled on `queue`.
    pub fn new(bounds: Rect, queue: &DeferredQueue) -> Self {
        Self::with_config(bounds, IndicatorConfig::default(), queue)
    }

    /// Create an indicator from a configuration.
    pub fn with_config(bounds: Rect, config: IndicatorConfig, queue: &DeferredQueue) -> Self {
        Self {
            state: Rc::new(RefCell::new(IndicatorState::setup_view(bounds, config))),
            queue: queue.clone(),
        }
    }

    /// Create an indicator from a TOML configuration document.
    pub fn from_toml(bounds: Rect, source: &str, queue: &DeferredQueue) -> Result<Self, ConfigError> {
        let config = IndicatorConfig::from_toml(source)?;
        Ok(Self::with_config(bounds, config, queue))
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> IndicatorConfig {
        self.state.borrow().config.clone()
    }

    /// Vertical bounce displacement.
    pub fn bounce_offset(&self) -> f32 {
        self.state.borrow().config.bounce_offset
    }

    /// Set the bounce displacement used by effects attached from now on.
    ///
    /// Rejects the same values [`IndicatorConfig::validate`] does, leaving
    /// the current offset in place.
    pub fn set_bounce_offset(&mut self, offset: f32) -> Result<(), ConfigError> {
        validate_bounce_offset(offset)?;
        self.state.borrow_mut().config.bounce_offset = offset;
        Ok(())
    }

    /// Fill color of the dots.
    pub fn dot_color(&self) -> Rgb {
        self.state.borrow().config.dot_color
    }

    /// Set the fill color of all dots, applying it immediately.
    pub fn set_dot_color(&mut self, color: Rgb) {
        let mut state = self.state.borrow_mut();
        state.config.dot_color = color;
        for dot in &mut state.dots {
            dot.set_color(color);
        }
        state.dirty = true;
    }

    /// Whether `start` attaches the bounce effect.
    pub fn is_bounce_enabled(&self) -> bool {
        self.state.borrow().config.bounce_enabled
    }

    /// Enable or disable the bounce effect for future attachments.
    pub fn set_bounce_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().config.bounce_enabled = enabled;
    }

    /// Whether `start` attaches the fade effect.
    pub fn is_fade_enabled(&self) -> bool {
        self.state.borrow().config.fade_enabled
    }

    /// Enable or disable the fade effect for future attachments.
    pub fn set_fade_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().config.fade_enabled = enabled;
    }

    /// Handling of stagger callbacks that outlive a `stop`.
    pub fn pending_policy(&self) -> PendingPolicy {
        self.state.borrow().config.pending_policy
    }

    /// Change how stale stagger callbacks are handled.
    pub fn set_pending_policy(&mut self, policy: PendingPolicy) {
        self.state.borrow_mut().config.pending_policy = policy;
    }

    /// Whether the last effective call was `start` rather than `stop`.
    ///
    /// This is not a query of what is attached: effects may still be
    /// pending after `start`, and under [`PendingPolicy::Fire`] they may be
    /// attached after `stop`.
    pub fn is_animating(&self) -> bool {
        self.state.borrow().animating
    }

    /// The three dots, in order.
    pub fn dots(&self) -> Ref<'_, [Dot; DOT_COUNT]> {
        Ref::map(self.state.borrow(), |state| &state.dots)
    }

    /// Recolor the dot at `index` only. Returns `false` if there is no such dot.
    ///
    /// A later [`set_dot_color`](Self::set_dot_color) overrides this.
    pub fn set_dot_color_at(&mut self, index: usize, color: Rgb) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(dot) = state.dots.get_mut(index) else {
            return false;
        };
        dot.set_color(color);
        state.dirty = true;
        true
    }

    /// The stack holding the dots.
    pub fn container(&self) -> Ref<'_, StackContainer> {
        Ref::map(self.state.borrow(), |state| &state.container)
    }

    /// Begin the staggered animation. Does nothing if already animating.
    pub fn start(&mut self) {
        let epoch = {
            let mut state = self.state.borrow_mut();
            if state.animating {
                trace!("typing:start ignored, already animating");
                return;
            }
            state.animating = true;
            state.dirty = true;
            state.epoch
        };
        debug!(epoch, at = ?self.queue.now(), "typing:start");

        let mut delay = Duration::ZERO;
        for index in 0..DOT_COUNT {
            let weak = Rc::downgrade(&self.state);
            self.queue.after(delay, move |now| {
                let Some(state) = weak.upgrade() else {
                    trace!(dot = index, "typing:stagger skipped, indicator dropped");
                    return;
                };
                state.borrow_mut().attach_effects(index, epoch, now);
            });
            delay += STAGGER;
        }
    }

    /// Detach every effect from every dot. Does nothing if not animating.
    pub fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        if !state.animating {
            trace!("typing:stop ignored, not animating");
            return;
        }
        state.animating = false;
        state.epoch = state.epoch.wrapping_add(1);
        for dot in &mut state.dots {
            for kind in EffectKind::ALL {
                dot.detach(kind);
            }
        }
        state.dirty = true;
        debug!(epoch = state.epoch, "typing:stop");
    }
}

impl Widget for TypingIndicator {
    fn bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        let mut state = self.state.borrow_mut();
        state.bounds = bounds;
        state.layout();
    }

    fn layout(&mut self) {
        self.state.borrow_mut().layout();
    }

    fn render(&self, buffer: &mut Buffer, now: Duration) {
        let state = self.state.borrow();
        let origin = (
            state.bounds.x + state.container.frame.x,
            state.bounds.y + state.container.frame.y,
        );
        for dot in &state.dots {
            dot.render(buffer, origin, state.bounds, now);
        }
    }

    fn needs_redraw(&self) -> bool {
        let state = self.state.borrow();
        state.dirty || state.dots.iter().any(|dot| dot.layer().has_animations())
    }

    fn clear_redraw(&mut self) {
        self.state.borrow_mut().dirty = false;
    }
}
