use crate::storage::LocalStore;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

pub const STEPS_KEY: &str = "currentSteps";
pub const WATER_KEY: &str = "currentWater";

pub const STEPS_GOAL: u64 = 10_000;
pub const WATER_GOAL: f64 = 2.5;
pub const STEPS_PER_ADD: u64 = 100;
pub const WATER_PER_ADD: f64 = 0.2;

pub const GOAL_REACHED_LABEL: &str = "Goal Achieved!";
const COMPLETE_COLOR: &str = "var(--primary-dark)";
const IN_PROGRESS_COLOR: &str = "var(--secondary-color)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Steps,
    Water,
}

impl MetricKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim() {
            "steps" => Some(MetricKind::Steps),
            "water" => Some(MetricKind::Water),
            _ => None,
        }
    }

    pub fn added_message(self) -> &'static str {
        match self {
            MetricKind::Steps => "+100 Steps Added!",
            MetricKind::Water => "+0.2 L Water Added!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressCard {
    pub value: f64,
    pub display: String,
    pub percent: f64,
    pub bar_color: &'static str,
    pub label: String,
    pub goal_reached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsView {
    pub steps: ProgressCard,
    pub water: ProgressCard,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTracker {
    steps: u64,
    water: f64,
}

impl MetricsTracker {
    pub fn load(store: &LocalStore) -> Self {
        let steps = store.load(STEPS_KEY, 0u64);
        let water = store.load(WATER_KEY, 0.0f64);
        let water = if water.is_finite() && water >= 0.0 {
            water
        } else {
            warn!("ignoring invalid stored water intake {water}");
            0.0
        };
        Self { steps, water }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn water(&self) -> f64 {
        self.water
    }

    pub fn update(&self, store: &mut LocalStore) -> MetricsView {
        store.save(STEPS_KEY, &self.steps);
        store.save(WATER_KEY, &self.water);
        self.view()
    }

    pub fn on_user_add(&mut self, kind: &str, store: &mut LocalStore) -> Option<&'static str> {
        let kind = MetricKind::parse(kind);
        match kind {
            Some(MetricKind::Steps) => self.steps = self.steps.saturating_add(STEPS_PER_ADD),
            Some(MetricKind::Water) => self.water += WATER_PER_ADD,
            None => {}
        }
        self.update(store);
        kind.map(MetricKind::added_message)
    }

    pub fn on_tick<R: Rng + ?Sized>(&mut self, rng: &mut R, store: &mut LocalStore) -> MetricsView {
        let steps = rng.gen_range(1..=5u64);
        let water = rng.gen_range(0.0..0.01f64);
        self.steps = self.steps.saturating_add(steps);
        self.water += water;
        debug!(steps, water, "background progress");
        self.update(store)
    }

    pub fn view(&self) -> MetricsView {
        let steps_percent = percent_of(self.steps as f64, STEPS_GOAL as f64);
        let water_percent = percent_of(self.water, WATER_GOAL);
        let steps_reached = self.steps >= STEPS_GOAL;
        let water_reached = self.water >= WATER_GOAL;

        MetricsView {
            steps: ProgressCard {
                value: self.steps as f64,
                display: group_thousands(self.steps),
                percent: steps_percent,
                bar_color: bar_color(steps_percent),
                label: if steps_reached {
                    GOAL_REACHED_LABEL.to_string()
                } else {
                    format!("Goal: {} steps", group_thousands(STEPS_GOAL))
                },
                goal_reached: steps_reached,
            },
            water: ProgressCard {
                value: self.water,
                display: format!("{:.1} L", self.water),
                percent: water_percent,
                bar_color: bar_color(water_percent),
                label: if water_reached {
                    GOAL_REACHED_LABEL.to_string()
                } else {
                    format!("Goal: {WATER_GOAL:.1} L")
                },
                goal_reached: water_reached,
            },
        }
    }
}

pub fn percent_of(value: f64, goal: f64) -> f64 {
    (value / goal * 100.0).min(100.0)
}

fn bar_color(percent: f64) -> &'static str {
    if percent >= 100.0 {
        COMPLETE_COLOR
    } else {
        IN_PROGRESS_COLOR
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_store_starts_at_zero() {
        let tracker = MetricsTracker::load(&LocalStore::new());
        assert_eq!(tracker.steps(), 0);
        assert_eq!(tracker.water(), 0.0);
    }

    #[test]
    fn adding_steps_from_empty_store() {
        let mut store = LocalStore::new();
        let mut tracker = MetricsTracker::load(&store);

        let message = tracker.on_user_add("steps", &mut store);
        let view = tracker.view();

        assert_eq!(message, Some("+100 Steps Added!"));
        assert_eq!(tracker.steps(), 100);
        assert!(close(view.steps.percent, 1.0));
        assert_eq!(view.steps.bar_color, "var(--secondary-color)");
        assert_eq!(view.steps.label, "Goal: 10,000 steps");
        assert_eq!(store.load(STEPS_KEY, 0u64), 100);
    }

    #[test]
    fn adding_steps_matches_formula_for_many_starting_points() {
        for start in [0u64, 1, 99, 4_950, 9_900, 9_950, 10_000, 123_456] {
            let mut store = LocalStore::new();
            store.save(STEPS_KEY, &start);
            let mut tracker = MetricsTracker::load(&store);

            tracker.on_user_add("steps", &mut store);
            let expected = ((start + 100) as f64 / 10_000.0 * 100.0).min(100.0);

            assert_eq!(tracker.steps(), start + 100);
            assert!(close(tracker.view().steps.percent, expected), "start {start}");
        }
    }

    #[test]
    fn adding_water_past_goal_clamps_and_marks_reached() {
        let mut store = LocalStore::new();
        store.save(WATER_KEY, &2.4f64);
        let mut tracker = MetricsTracker::load(&store);

        let message = tracker.on_user_add("water", &mut store);
        let view = tracker.view();

        assert_eq!(message, Some("+0.2 L Water Added!"));
        assert!(close(tracker.water(), 2.6));
        assert_eq!(view.water.percent, 100.0);
        assert_eq!(view.water.display, "2.6 L");
        assert_eq!(view.water.label, GOAL_REACHED_LABEL);
        assert_eq!(view.water.bar_color, "var(--primary-dark)");
        assert!(view.water.goal_reached);
        assert!(close(store.load(WATER_KEY, 0.0f64), 2.6));
    }

    #[test]
    fn adding_water_matches_formula() {
        for start in [0.0f64, 0.3, 1.15, 2.29, 2.31, 7.0] {
            let mut store = LocalStore::new();
            store.save(WATER_KEY, &start);
            let mut tracker = MetricsTracker::load(&store);

            tracker.on_user_add("water", &mut store);
            let expected = ((start + 0.2) / 2.5 * 100.0).min(100.0);

            assert!(close(tracker.water(), start + 0.2));
            assert!(close(tracker.view().water.percent, expected), "start {start}");
        }
    }

    #[test]
    fn unknown_kind_changes_nothing() {
        let mut store = LocalStore::new();
        store.save(STEPS_KEY, &500u64);
        let mut tracker = MetricsTracker::load(&store);

        assert_eq!(tracker.on_user_add("coffee", &mut store), None);
        assert_eq!(tracker.steps(), 500);
        assert_eq!(tracker.water(), 0.0);
    }

    #[test]
    fn tick_adds_small_random_increments() {
        let mut store = LocalStore::new();
        let mut tracker = MetricsTracker::load(&store);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let steps_before = tracker.steps();
            let water_before = tracker.water();
            tracker.on_tick(&mut rng, &mut store);

            let step_delta = tracker.steps() - steps_before;
            let water_delta = tracker.water() - water_before;
            assert!((1..=5).contains(&step_delta));
            assert!((0.0..0.01).contains(&water_delta));
        }
        assert_eq!(store.load(STEPS_KEY, 0u64), tracker.steps());
    }

    #[test]
    fn negative_stored_water_is_reset() {
        let mut store = LocalStore::new();
        store.save(WATER_KEY, &-1.5f64);
        assert_eq!(MetricsTracker::load(&store).water(), 0.0);
    }

    #[test]
    fn steps_display_groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
