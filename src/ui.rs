use crate::metrics::ProgressCard;
use crate::models::DashboardSnapshot;
use crate::theme::{ThemeIcon, ThemeMode};

pub fn render_index(snapshot: &DashboardSnapshot) -> String {
    let steps = &snapshot.metrics.steps;
    let water = &snapshot.metrics.water;
    let body_class = match snapshot.theme.mode {
        ThemeMode::Dark => "dark-theme",
        ThemeMode::Light => "",
    };

    INDEX_HTML
        .replace("{{BODY_CLASS}}", body_class)
        .replace("{{THEME_ICON}}", icon_glyph(snapshot.theme.icon))
        .replace("{{NAV}}", &render_nav(snapshot))
        .replace("{{DASHBOARD_CLASS}}", section_class(snapshot, "dashboard"))
        .replace("{{TRACKER_CLASS}}", section_class(snapshot, "tracker"))
        .replace("{{TIMER_CLASS}}", section_class(snapshot, "timer"))
        .replace("{{DATE_LABEL}}", &snapshot.date_label)
        .replace("{{STEPS_VALUE}}", &steps.display)
        .replace("{{STEPS_LABEL}}", &steps.label)
        .replace("{{STEPS_BAR}}", &bar_style(steps))
        .replace("{{WATER_VALUE}}", &water.display)
        .replace("{{WATER_LABEL}}", &water.label)
        .replace("{{WATER_BAR}}", &bar_style(water))
        .replace("{{TIP}}", snapshot.tip.text)
        .replace("{{SNAPSHOT}}", &snapshot_json(snapshot))
}

fn render_nav(snapshot: &DashboardSnapshot) -> String {
    snapshot
        .links
        .iter()
        .map(|link| {
            let class = if link.active { " class=\"active\"" } else { "" };
            format!(
                "<li{class}><a href=\"#{target}\">{label}</a></li>",
                target = link.target,
                label = title_case(link.target)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn section_class(snapshot: &DashboardSnapshot, id: &str) -> &'static str {
    if snapshot.section == id {
        "dashboard-section active-section"
    } else {
        "dashboard-section"
    }
}

fn bar_style(card: &ProgressCard) -> String {
    format!("width: {}%; background-color: {};", card.percent, card.bar_color)
}

fn icon_glyph(icon: ThemeIcon) -> &'static str {
    match icon {
        ThemeIcon::Moon => "&#9790;",
        ThemeIcon::Sun => "&#9728;",
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Embedded in a <script> element, so a literal "</" must not appear.
fn snapshot_json(snapshot: &DashboardSnapshot) -> String {
    serde_json::to_string(snapshot)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Health Dashboard</title>
  <style>
    :root {
      --bg: #f4f7f5;
      --card: #ffffff;
      --ink: #1f2d27;
      --muted: #6b7a73;
      --primary-color: #3fa37a;
      --primary-dark: #24704f;
      --secondary-color: #7cc4a4;
      --track: rgba(31, 45, 39, 0.08);
      --toast-bg: #24704f;
      --delete-button-bg: #c63b2b;
      --shadow: 0 18px 40px rgba(31, 45, 39, 0.12);
    }

    body.dark-theme {
      --bg: #121916;
      --card: #1c2621;
      --ink: #e6efe9;
      --muted: #9bb0a5;
      --track: rgba(230, 239, 233, 0.1);
      --shadow: 0 18px 40px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      grid-template-columns: 220px 1fr;
      transition: background 200ms ease, color 200ms ease;
    }

    .app-sidebar {
      padding: 28px 18px;
      display: grid;
      align-content: start;
      gap: 24px;
    }

    .app-sidebar ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .app-sidebar a {
      display: block;
      padding: 10px 14px;
      border-radius: 12px;
      color: inherit;
      text-decoration: none;
    }

    .app-sidebar li.active a {
      background: var(--primary-color);
      color: white;
    }

    #theme-switcher {
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      background: var(--card);
      color: var(--ink);
      font-size: 1.2rem;
      cursor: pointer;
      box-shadow: var(--shadow);
    }

    #app-main-content {
      padding: 32px;
      overflow-y: auto;
      max-height: 100vh;
    }

    .dashboard-section {
      display: none;
    }

    .dashboard-section.active-section {
      display: grid;
      gap: 24px;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 18px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 20px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 10px;
    }

    .card .value {
      font-size: 2rem;
      font-weight: 600;
    }

    .card .goal {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .progress {
      height: 10px;
      border-radius: 999px;
      background: var(--track);
      overflow: hidden;
    }

    .progress div {
      height: 100%;
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .add-button {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      background: var(--primary-color);
      color: white;
      font-weight: 600;
      cursor: pointer;
      width: 100%;
    }

    .toast {
      position: fixed;
      bottom: 24px;
      right: 24px;
      padding: 12px 18px;
      border-radius: 12px;
      color: white;
      background: var(--toast-bg);
      opacity: 0;
      transform: translateY(12px);
      transition: opacity 200ms ease, transform 200ms ease;
      pointer-events: none;
    }

    .toast.show {
      opacity: 1;
      transform: translateY(0);
    }

    @media (max-width: 700px) {
      body {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body class="{{BODY_CLASS}}">
  <aside class="app-sidebar">
    <form method="post" action="/theme/toggle">
      <button id="theme-switcher" type="submit" aria-label="Toggle theme"><i>{{THEME_ICON}}</i></button>
    </form>
    <nav id="main-nav-list">
      <ul>
        {{NAV}}
      </ul>
    </nav>
  </aside>

  <main id="app-main-content">
    <section id="dashboard" class="{{DASHBOARD_CLASS}}">
      <header>
        <h1>Today</h1>
        <p id="current-date" class="subtitle">{{DATE_LABEL}}</p>
      </header>

      <div class="cards">
        <div class="card">
          <span>Steps</span>
          <span id="steps-count" class="value">{{STEPS_VALUE}}</span>
          <span id="steps-goal" class="goal">{{STEPS_LABEL}}</span>
          <div class="progress"><div id="steps-progress" style="{{STEPS_BAR}}"></div></div>
          <form method="post" action="/add/steps">
            <button class="add-button" data-type="steps" type="submit">+100 steps</button>
          </form>
        </div>
        <div class="card">
          <span>Water</span>
          <span id="water-intake" class="value">{{WATER_VALUE}}</span>
          <span id="water-goal" class="goal">{{WATER_LABEL}}</span>
          <div class="progress"><div id="water-progress" style="{{WATER_BAR}}"></div></div>
          <form method="post" action="/add/water">
            <button class="add-button" data-type="water" type="submit">+0.2 L water</button>
          </form>
        </div>
        <div class="card">
          <span>Daily tip</span>
          <p id="health-tip-content">{{TIP}}</p>
        </div>
      </div>
    </section>

    <section id="tracker" class="{{TRACKER_CLASS}}">
      <h1>Tracker</h1>
      <p class="subtitle">Your step and water counters keep growing in the background.</p>
    </section>

    <section id="timer" class="{{TIMER_CLASS}}">
      <h1>Timer</h1>
      <p class="subtitle">Take a short movement break every hour.</p>
    </section>
  </main>

  <div id="toast-notification" class="toast"></div>

  <script>
    const initial = {{SNAPSHOT}};
    const main = document.getElementById('app-main-content');
    const toastEl = document.getElementById('toast-notification');

    const renderCard = (prefix, valueId, card) => {
      document.getElementById(valueId).textContent = card.display;
      document.getElementById(`${prefix}-goal`).textContent = card.label;
      const bar = document.getElementById(`${prefix}-progress`);
      bar.style.width = `${card.percent}%`;
      bar.style.backgroundColor = card.bar_color;
    };

    const render = (data) => {
      if (!data) {
        return;
      }
      document.body.classList.toggle('dark-theme', data.theme.mode === 'dark');
      document.querySelector('#theme-switcher i').innerHTML = data.theme.icon === 'sun' ? '&#9728;' : '&#9790;';

      data.panels.forEach((panel) => {
        document.getElementById(panel.id).classList.toggle('active-section', panel.active);
      });
      data.links.forEach((link) => {
        const anchor = document.querySelector(`#main-nav-list a[href="#${link.target}"]`);
        if (anchor) {
          anchor.parentElement.classList.toggle('active', link.active);
        }
      });

      document.getElementById('current-date').textContent = data.date_label;
      renderCard('steps', 'steps-count', data.metrics.steps);
      renderCard('water', 'water-intake', data.metrics.water);
      document.getElementById('health-tip-content').textContent = data.tip.text;

      toastEl.textContent = data.toast.message;
      toastEl.classList.toggle('show', data.toast.visible);
      toastEl.style.backgroundColor = data.toast.background || '';
    };

    const send = async (path, body) => {
      const response = await fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body || {}),
      });
      if (!response.ok) {
        throw new Error(await response.text());
      }
      return response.json();
    };

    const refresh = async () => {
      try {
        const response = await fetch('/api/dashboard');
        if (response.ok) {
          render(await response.json());
        }
      } catch (err) {
        console.error('failed to refresh dashboard', err);
      }
    };

    document.querySelectorAll('.add-button').forEach((button) => {
      button.addEventListener('click', async (event) => {
        event.preventDefault();
        render(await send('/api/metrics', { kind: button.dataset.type }).catch(() => null));
      });
    });

    document.getElementById('theme-switcher').addEventListener('click', async (event) => {
      event.preventDefault();
      render(await send('/api/theme').catch(() => null));
    });

    document.querySelectorAll('#main-nav-list a').forEach((anchor) => {
      anchor.addEventListener('click', async (event) => {
        event.preventDefault();
        const section = anchor.getAttribute('href').substring(1);
        const data = await send('/api/navigate', { section }).catch(() => null);
        render(data);
        if (data) {
          main.scrollTop = data.scroll_top;
        }
      });
    });

    let scrollTimer = null;
    main.addEventListener('scroll', () => {
      clearTimeout(scrollTimer);
      scrollTimer = setTimeout(() => {
        send('/api/scroll', { offset: Math.round(main.scrollTop) }).catch(() => null);
      }, 250);
    });

    render(initial);
    setInterval(refresh, 1000);
  </script>
</body>
</html>
"##;
