use crate::storage::LocalStore;
use chrono::{Local, NaiveDate};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

pub const TIP_INDEX_KEY: &str = "dailyTipIndex";
pub const TIP_DATE_KEY: &str = "lastTipDate";

pub static HEALTH_TIPS: [&str; 10] = [
    "Drink at least 8 glasses of water a day.",
    "Aim for 30 minutes of moderate exercise daily.",
    "Eat a variety of fruits and vegetables.",
    "Get 7-9 hours of quality sleep each night.",
    "Practice mindfulness for mental well-being.",
    "Limit processed foods and sugary drinks.",
    "Stretch regularly to improve flexibility.",
    "Walk whenever you can instead of driving.",
    "Find a hobby that helps you relax and de-stress.",
    "Prioritize whole grains in your diet.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipView {
    pub index: usize,
    pub text: &'static str,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct DailyTipRotator {
    tips: &'static [&'static str],
}

impl DailyTipRotator {
    pub fn new() -> Self {
        Self { tips: &HEALTH_TIPS }
    }

    pub fn with_tips(tips: &'static [&'static str]) -> Option<Self> {
        (!tips.is_empty()).then_some(Self { tips })
    }

    pub fn refresh<R: Rng + ?Sized>(&self, rng: &mut R, store: &mut LocalStore) -> TipView {
        self.refresh_at(Local::now().date_naive(), rng, store)
    }

    pub fn refresh_at<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
        store: &mut LocalStore,
    ) -> TipView {
        let today_key = date_key(today);
        let cached_index: Option<usize> = store.load(TIP_INDEX_KEY, None);
        let cached_date: Option<String> = store.load(TIP_DATE_KEY, None);

        // an index past the end of the list is treated like a stale date
        let reusable = match cached_index {
            Some(index) if index >= self.tips.len() => {
                warn!("stored tip index {index} is out of range for {} tips", self.tips.len());
                None
            }
            Some(index) if cached_date.as_deref() == Some(today_key.as_str()) => Some(index),
            _ => None,
        };

        let index = match reusable {
            Some(index) => index,
            None => {
                let index = rng.gen_range(0..self.tips.len());
                store.save(TIP_INDEX_KEY, &index);
                store.save(TIP_DATE_KEY, &today_key);
                info!(index, date = %today_key, "picked daily tip");
                index
            }
        };

        TipView {
            index,
            text: self.tips[index],
            date: today_key,
        }
    }
}

impl Default for DailyTipRotator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::{rngs::StdRng, SeedableRng};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_reuses_index() {
        let rotator = DailyTipRotator::new();
        let mut store = LocalStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        let today = day(2026, 10, 18);

        let first = rotator.refresh_at(today, &mut rng, &mut store);
        for _ in 0..20 {
            let again = rotator.refresh_at(today, &mut rng, &mut store);
            assert_eq!(again.index, first.index);
            assert_eq!(again.text, HEALTH_TIPS[first.index]);
        }
        assert_eq!(store.load(TIP_DATE_KEY, String::new()), "2026-10-18");
    }

    #[test]
    fn stale_date_is_overwritten_with_today() {
        let rotator = DailyTipRotator::new();
        let mut store = LocalStore::new();
        let mut rng = StdRng::seed_from_u64(2);
        let today = day(2026, 10, 18);
        store.save(TIP_INDEX_KEY, &3usize);
        store.save(TIP_DATE_KEY, &date_key(today - Duration::days(1)));

        let view = rotator.refresh_at(today, &mut rng, &mut store);

        assert_eq!(store.load(TIP_DATE_KEY, String::new()), "2026-10-18");
        assert_eq!(store.load(TIP_INDEX_KEY, usize::MAX), view.index);
        assert!(view.index < HEALTH_TIPS.len());
    }

    #[test]
    fn cached_index_for_today_is_used() {
        let rotator = DailyTipRotator::new();
        let mut store = LocalStore::new();
        let mut rng = StdRng::seed_from_u64(3);
        store.save(TIP_INDEX_KEY, &6usize);
        store.save(TIP_DATE_KEY, "2026-10-18");

        let view = rotator.refresh_at(day(2026, 10, 18), &mut rng, &mut store);
        assert_eq!(view.index, 6);
        assert_eq!(view.text, "Stretch regularly to improve flexibility.");
    }

    #[test]
    fn out_of_range_index_is_redrawn() {
        static SHORT: [&str; 2] = ["Sleep.", "Walk."];
        let rotator = DailyTipRotator::with_tips(&SHORT).unwrap();
        let mut store = LocalStore::new();
        let mut rng = StdRng::seed_from_u64(4);
        store.save(TIP_INDEX_KEY, &9usize);
        store.save(TIP_DATE_KEY, "2026-10-18");

        let view = rotator.refresh_at(day(2026, 10, 18), &mut rng, &mut store);
        assert!(view.index < SHORT.len());
        assert_eq!(store.load(TIP_INDEX_KEY, usize::MAX), view.index);
    }

    #[test]
    fn corrupt_cache_is_redrawn() {
        let rotator = DailyTipRotator::new();
        let mut store = LocalStore::new();
        let mut rng = StdRng::seed_from_u64(5);
        store.set_item(TIP_INDEX_KEY, "three");
        store.save(TIP_DATE_KEY, "2026-10-18");

        let view = rotator.refresh_at(day(2026, 10, 18), &mut rng, &mut store);
        assert_eq!(store.load(TIP_INDEX_KEY, usize::MAX), view.index);
    }

    #[test]
    fn empty_tip_list_is_rejected() {
        static EMPTY: [&str; 0] = [];
        assert!(DailyTipRotator::with_tips(&EMPTY).is_none());
    }

    #[test]
    fn date_label_is_long_form() {
        assert_eq!(date_label(day(2026, 10, 18)), "Sunday, October 18, 2026");
        assert_eq!(date_label(day(2026, 1, 5)), "Monday, January 5, 2026");
    }
}
