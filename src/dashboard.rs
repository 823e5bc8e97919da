use crate::metrics::{MetricsTracker, MetricsView};
use crate::models::DashboardSnapshot;
use crate::navigation::ViewSwitcher;
use crate::notify::Toast;
use crate::storage::LocalStore;
use crate::theme::{ThemeToggle, ThemeView};
use crate::tips::{date_label, DailyTipRotator, TipView};
use chrono::{Local, NaiveDate};
use rand::{rngs::StdRng, SeedableRng};

pub struct Dashboard {
    store: LocalStore,
    view: ViewSwitcher,
    theme: ThemeToggle,
    metrics: MetricsTracker,
    tips: DailyTipRotator,
    rng: StdRng,
}

impl Dashboard {
    pub fn open(store: LocalStore, rng: StdRng) -> Self {
        let mut theme = ThemeToggle::new();
        theme.apply(&store);
        let metrics = MetricsTracker::load(&store);

        let mut dashboard = Self {
            store,
            view: ViewSwitcher::new(),
            theme,
            metrics,
            tips: DailyTipRotator::new(),
            rng,
        };
        dashboard.metrics.update(&mut dashboard.store);
        dashboard.tips.refresh(&mut dashboard.rng, &mut dashboard.store);
        dashboard
    }

    pub fn from_entropy(store: LocalStore) -> Self {
        Self::open(store, StdRng::from_entropy())
    }

    pub fn add(&mut self, kind: &str) -> Option<&'static str> {
        self.metrics.on_user_add(kind, &mut self.store)
    }

    pub fn tick(&mut self) -> MetricsView {
        self.metrics.on_tick(&mut self.rng, &mut self.store)
    }

    pub fn toggle_theme(&mut self) -> ThemeView {
        self.theme.toggle(&mut self.store)
    }

    pub fn navigate(&mut self, section_id: &str) -> bool {
        self.view.navigate(section_id)
    }

    pub fn record_scroll(&mut self, offset: u32) {
        self.view.record_scroll(offset);
    }

    pub fn tip_at(&mut self, today: NaiveDate) -> TipView {
        self.tips.refresh_at(today, &mut self.rng, &mut self.store)
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LocalStore {
        &mut self.store
    }

    pub fn snapshot(&mut self, toast: Toast) -> DashboardSnapshot {
        self.snapshot_at(Local::now().date_naive(), toast)
    }

    pub fn snapshot_at(&mut self, today: NaiveDate, toast: Toast) -> DashboardSnapshot {
        let tip = self.tip_at(today);
        DashboardSnapshot {
            date_label: date_label(today),
            section: self.view.active_section(),
            panels: self.view.panels().to_vec(),
            links: self.view.links().to_vec(),
            scroll_top: self.view.scroll_top(),
            theme: self.theme.view(),
            metrics: self.metrics.view(),
            tip,
            toast,
        }
    }
}
