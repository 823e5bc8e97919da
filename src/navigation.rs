use serde::Serialize;
use tracing::warn;

pub const DEFAULT_SECTION: &str = "dashboard";
pub const SECTIONS: [&str; 3] = ["dashboard", "tracker", "timer"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub id: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub target: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ViewSwitcher {
    panels: Vec<Panel>,
    links: Vec<NavLink>,
    scroll_top: u32,
}

impl ViewSwitcher {
    pub fn new() -> Self {
        let mut switcher = Self {
            panels: SECTIONS
                .iter()
                .map(|&id| Panel { id, active: false })
                .collect(),
            links: SECTIONS
                .iter()
                .map(|&target| NavLink { target, active: false })
                .collect(),
            scroll_top: 0,
        };
        switcher.navigate(DEFAULT_SECTION);
        switcher
    }

    pub fn show(&mut self, section_id: &str) -> bool {
        if !self.panels.iter().any(|panel| panel.id == section_id) {
            warn!("section with id \"{section_id}\" not found");
            return false;
        }

        for panel in &mut self.panels {
            panel.active = panel.id == section_id;
        }
        self.scroll_top = 0;
        true
    }

    pub fn set_active_link(&mut self, section_id: &str) {
        for link in &mut self.links {
            link.active = link.target == section_id;
        }
    }

    pub fn navigate(&mut self, section_id: &str) -> bool {
        let shown = self.show(section_id);
        if shown {
            self.set_active_link(section_id);
        }
        shown
    }

    pub fn record_scroll(&mut self, offset: u32) {
        self.scroll_top = offset;
    }

    pub fn active_section(&self) -> &'static str {
        self.panels
            .iter()
            .find(|panel| panel.active)
            .map_or(DEFAULT_SECTION, |panel| panel.id)
    }

    pub fn active_link(&self) -> Option<&'static str> {
        self.links.iter().find(|link| link.active).map(|link| link.target)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }
}

impl Default for ViewSwitcher {
    fn default() -> Self {
        Self::new()
    }
}
