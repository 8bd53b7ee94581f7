//! One-shot reveal of elements entering the viewport.
//!
//! Each element starts hidden (transparent and offset) and settles into its
//! resting state the first time enough of it is visible. The transition is
//! handed to CSS; this module only decides *when* and *what style*.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);
pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const STAGGER_STEP: Duration = Duration::from_millis(200);
pub const DEFAULT_OFFSET_PX: f64 = 20.0;
/// Smallest visible fraction that still counts when the threshold is zero.
pub const MIN_VISIBLE_RATIO: f64 = 0.01;
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
            Self::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            delay: Duration::ZERO,
            easing: Easing::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealConfig {
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    /// Fraction of the element's area that must be visible, in `[0, 1]`.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Delay for the `index`-th sibling in a staggered list.
    pub fn staggered(self, index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        self.with_delay(STAGGER_STEP.saturating_mul(step))
    }

    /// Reveal with no visible transition.
    pub fn instant(self) -> Self {
        self.with_duration(Duration::ZERO).with_delay(Duration::ZERO)
    }

    pub fn transition_css(&self) -> String {
        if self.duration.is_zero() {
            return "transition: none;".to_string();
        }

        let duration = self.duration.as_secs_f64();
        let delay = self.delay.as_secs_f64();
        let easing = self.easing.css();
        format!(
            "transition: opacity {duration:.2}s {easing} {delay:.2}s, transform {duration:.2}s {easing} {delay:.2}s;"
        )
    }
}

/// Where a hidden element sits before it settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealOrigin {
    Below(f64),
    Left(f64),
}

impl Default for RevealOrigin {
    fn default() -> Self {
        Self::Below(DEFAULT_OFFSET_PX)
    }
}

impl RevealOrigin {
    fn offset(self) -> (f64, f64) {
        match self {
            Self::Below(px) => (0.0, px),
            Self::Left(px) => (-px, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub fn style(self, origin: RevealOrigin, config: &RevealConfig) -> String {
        match self {
            Self::Hidden => {
                let (x, y) = origin.offset();
                format!("opacity: 0; transform: translate3d({x}px, {y}px, 0);")
            }
            Self::Revealed => format!(
                "opacity: 1; transform: translate3d(0px, 0px, 0); {}",
                config.transition_css()
            ),
        }
    }
}

/// Two-state machine for a single observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTracker {
    state: RevealState,
    threshold: f64,
}

impl RevealTracker {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            state: RevealState::Hidden,
            threshold: config.threshold,
        }
    }

    /// Feeds one intersection report. Returns `true` only on the report that reveals.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.state.is_revealed() || !visible_ratio.is_finite() {
            return false;
        }

        // Browsers round reported ratios, so a crossing can land just under the threshold.
        if visible_ratio > 0.0 && visible_ratio + RATIO_EPSILON >= self.threshold {
            self.state = RevealState::Revealed;
            return true;
        }

        false
    }

    /// Feeds one observer callback's entries as `(is_intersecting, ratio)` pairs.
    /// Entries that are not intersecting count as a ratio of 0.
    pub fn observe_batch(&mut self, entries: impl IntoIterator<Item = (bool, f64)>) -> bool {
        entries.into_iter().any(|(is_intersecting, ratio)| {
            let ratio = if is_intersecting { ratio } else { 0.0 };
            self.observe(ratio)
        })
    }

    /// Reveals without any intersection report, for when nothing can be observed.
    pub fn reveal_unobserved(&mut self) -> bool {
        let changed = !self.state.is_revealed();
        self.state = RevealState::Revealed;
        changed
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DEFAULT_THRESHOLD
    }
}

/// Ratios at which the browser should notify. A zero threshold also listens at
/// [`MIN_VISIBLE_RATIO`] since an edge-adjacent element reports a ratio of 0.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let threshold = clamp_threshold(threshold);
    if threshold > 0.0 {
        vec![threshold]
    } else {
        vec![0.0, MIN_VISIBLE_RATIO]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_threshold_is_reached() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());

        assert!(!tracker.observe(0.0));
        assert!(!tracker.observe(0.15));
        assert!(tracker.observe(0.2));
        assert!(!tracker.observe(0.2));
    }

    #[test]
    fn only_the_first_qualifying_report_reveals() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        let results = [0.05, 0.3, 0.9].map(|ratio| tracker.observe(ratio));

        assert_eq!(results, [false, true, false]);
    }

    #[test]
    fn revealed_element_never_hides_again() {
        let mut tracker = RevealTracker::new(&RevealConfig::default().with_threshold(0.3));
        assert!(tracker.observe(0.9));

        for ratio in [0.0, 0.1, 1.0, 0.0, f64::NAN] {
            assert!(!tracker.observe(ratio), "ratio {ratio} re-triggered");
        }
        assert!(!tracker.reveal_unobserved());
    }

    #[test]
    fn batch_reveals_on_first_qualifying_entry() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());

        assert!(tracker.observe_batch([(false, 0.5), (true, 0.1), (true, 0.25)]));
        assert!(!tracker.observe_batch([(true, 0.6)]));
    }

    #[test]
    fn batch_ignores_ratio_of_entries_not_intersecting() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());

        assert!(!tracker.observe_batch([(false, 0.9), (true, 0.1)]));
        assert!(!tracker.observe_batch(std::iter::empty()));
        assert!(tracker.observe_batch([(true, 0.4)]));
    }

    #[test]
    fn batch_after_reveal_does_nothing() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        assert!(tracker.observe(1.0));

        assert!(!tracker.observe_batch([(true, 1.0), (false, 0.0), (true, 0.5)]));
    }

    #[test]
    fn unobservable_element_is_revealed_immediately() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());

        assert!(tracker.reveal_unobserved());
        assert!(!tracker.observe(1.0));
        assert!(!tracker.reveal_unobserved());
    }

    #[test]
    fn zero_threshold_still_needs_some_visibility() {
        let mut tracker = RevealTracker::new(&RevealConfig::default().with_threshold(0.0));

        assert!(!tracker.observe(0.0));
        assert!(tracker.observe(0.01));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealConfig::default().with_threshold(4.0).threshold(), 1.0);
        assert_eq!(RevealConfig::default().with_threshold(-1.0).threshold(), 0.0);
        assert_eq!(
            RevealConfig::default().with_threshold(f64::NAN).threshold(),
            DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn ratio_rounded_just_below_threshold_still_counts() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());

        assert!(tracker.observe(0.1996));
    }

    #[test]
    fn zero_threshold_also_listens_for_first_pixels() {
        assert_eq!(observer_thresholds(0.0), vec![0.0, MIN_VISIBLE_RATIO]);
        assert_eq!(observer_thresholds(0.3), vec![0.3]);
    }

    #[test]
    fn observer_thresholds_stay_within_unit_interval() {
        assert_eq!(observer_thresholds(4.0), vec![1.0]);
        assert_eq!(observer_thresholds(-2.0), vec![0.0, MIN_VISIBLE_RATIO]);
        assert_eq!(observer_thresholds(f64::NAN), vec![DEFAULT_THRESHOLD]);
    }

    #[test]
    fn stagger_adds_step_per_index() {
        let base = RevealConfig::default();

        assert_eq!(base.staggered(0).delay, Duration::ZERO);
        assert_eq!(base.staggered(1).delay, Duration::from_millis(200));
        assert_eq!(base.staggered(3).delay, Duration::from_millis(600));
    }

    #[test]
    fn hidden_style_uses_origin_offset() {
        let config = RevealConfig::default();

        assert_eq!(
            RevealState::Hidden.style(RevealOrigin::Below(20.0), &config),
            "opacity: 0; transform: translate3d(0px, 20px, 0);"
        );
        assert_eq!(
            RevealState::Hidden.style(RevealOrigin::Left(20.0), &config),
            "opacity: 0; transform: translate3d(-20px, 0px, 0);"
        );
    }

    #[test]
    fn revealed_style_carries_transition() {
        let config = RevealConfig::default().staggered(1);

        assert_eq!(
            RevealState::Revealed.style(RevealOrigin::default(), &config),
            "opacity: 1; transform: translate3d(0px, 0px, 0); \
             transition: opacity 0.60s cubic-bezier(0.33, 1, 0.68, 1) 0.20s, \
             transform 0.60s cubic-bezier(0.33, 1, 0.68, 1) 0.20s;"
        );
    }

    #[test]
    fn instant_config_disables_transition() {
        let config = RevealConfig::default().staggered(2).instant();

        assert_eq!(config.transition_css(), "transition: none;");
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[test]
    fn chosen_easing_appears_in_transition() {
        let config = RevealConfig::default()
            .with_duration(Duration::from_millis(800))
            .with_easing(Easing::EaseInOut);

        assert_eq!(
            config.transition_css(),
            "transition: opacity 0.80s cubic-bezier(0.65, 0, 0.35, 1) 0.00s, \
             transform 0.80s cubic-bezier(0.65, 0, 0.35, 1) 0.00s;"
        );
    }
}
