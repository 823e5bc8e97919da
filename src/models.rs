use crate::metrics::MetricsView;
use crate::navigation::{NavLink, Panel};
use crate::notify::Toast;
use crate::theme::ThemeView;
use crate::tips::TipView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddMetricRequest {
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub section: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrollRequest {
    pub offset: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub date_label: String,
    pub section: &'static str,
    pub panels: Vec<Panel>,
    pub links: Vec<NavLink>,
    pub scroll_top: u32,
    pub theme: ThemeView,
    pub metrics: MetricsView,
    pub tip: TipView,
    pub toast: Toast,
}
