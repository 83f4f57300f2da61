use crate::state::{DashboardState, View};

/// Render the whole dashboard page. The data area carries exactly one of
/// the three views; an error never shares the page with chart or cards.
pub fn render_dashboard(state: &DashboardState) -> String {
    PAGE_HTML
        .replace("{{LOAD_DATE}}", &escape(&state.load_date()))
        .replace("{{HEADER_STRIP}}", &render_header_strip(state))
        .replace("{{SWITCHER}}", &render_switcher(state))
        .replace("{{CONTENT}}", &render_content(state))
}

fn render_content(state: &DashboardState) -> String {
    match state.view() {
        View::Error => render_error(&state.error_message),
        View::TimeSeries => render_chart(state),
        View::Summary => render_cards(state),
    }
}

fn render_error(message: &str) -> String {
    format!(
        concat!(
            "<section class=\"error\">\n",
            "  <h2>{}</h2>\n",
            "  <p>しばらくしてから再度お問い合わせください</p>\n",
            "</section>"
        ),
        escape(message)
    )
}

fn render_header_strip(state: &DashboardState) -> String {
    let mut strip = String::from("<ul class=\"strip\">\n");
    for entry in &state.latest {
        strip.push_str(&format!(
            "  <li><span class=\"label\">{}</span><span class=\"value\">{}</span></li>\n",
            escape(entry.category.label()),
            escape(&entry.count)
        ));
    }
    strip.push_str("</ul>");
    strip
}

fn render_switcher(state: &DashboardState) -> String {
    let mut switcher = String::from("<nav class=\"switcher\">\n");
    for category in crate::categories::Category::ALL {
        let active = if state.view() == View::TimeSeries && category == state.current_category {
            " active"
        } else {
            ""
        };
        switcher.push_str(&format!(
            "  <a class=\"switch{active}\" href=\"/?category={}\">{}</a>\n",
            category.slug(),
            escape(category.label())
        ));
    }
    let cards_active = if state.view() == View::Summary {
        " active"
    } else {
        ""
    };
    switcher.push_str(&format!(
        "  <a class=\"switch{cards_active}\" href=\"/?view=cards\">最新値一覧</a>\n"
    ));
    switcher.push_str("</nav>");
    switcher
}

fn render_chart(state: &DashboardState) -> String {
    const WIDTH: f64 = 720.0;
    const HEIGHT: f64 = 300.0;
    const LABEL_BAND: f64 = 28.0;

    let records = &state.current_data;
    let max = records
        .iter()
        .map(|record| count_value(&record.count))
        .fold(1.0_f64, f64::max);
    let slot = if records.is_empty() {
        WIDTH
    } else {
        WIDTH / records.len() as f64
    };
    let plot = HEIGHT - LABEL_BAND;

    let mut bars = String::new();
    for (index, record) in records.iter().enumerate() {
        let value = count_value(&record.count);
        let bar_height = plot * value / max;
        let x = index as f64 * slot + slot * 0.15;
        let y = plot - bar_height;
        bars.push_str(&format!(
            "    <rect class=\"bar\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\"><title>{date}: {count}</title></rect>\n",
            w = slot * 0.7,
            h = bar_height,
            date = escape(&record.date),
            count = escape(&record.count),
        ));
        bars.push_str(&format!(
            "    <text class=\"tick\" x=\"{:.1}\" y=\"{:.1}\">{}</text>\n",
            x + slot * 0.35,
            HEIGHT - 8.0,
            escape(short_date(&record.date)),
        ));
    }

    format!(
        concat!(
            "<section class=\"chart\">\n",
            "  <h2>{}（直近14日）</h2>\n",
            "  <svg viewBox=\"0 0 {:.0} {:.0}\" role=\"img\">\n",
            "{}",
            "  </svg>\n",
            "</section>"
        ),
        escape(state.current_category.label()),
        WIDTH,
        HEIGHT,
        bars
    )
}

fn render_cards(state: &DashboardState) -> String {
    let mut cards = String::from("<section class=\"cards\">\n");
    for entry in &state.latest {
        cards.push_str(&format!(
            concat!(
                "  <article class=\"card\">\n",
                "    <span class=\"label\">{}</span>\n",
                "    <span class=\"value\">{}</span>\n",
                "  </article>\n"
            ),
            escape(entry.category.label()),
            escape(&entry.count)
        ));
    }
    cards.push_str("</section>");
    cards
}

/// Counts are display strings; for bar heights a lossy numeric read is
/// enough. Anything unparsable draws as zero.
fn count_value(count: &str) -> f64 {
    count.replace(',', "").trim().parse().unwrap_or(0.0)
}

fn short_date(date: &str) -> &str {
    date.get(5..).unwrap_or(date)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>COVID-19 Japan Dashboard</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #263238;
      --accent: #3f51b5;
      --card: #ffffff;
      --shadow: 0 10px 30px rgba(38, 50, 56, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Hiragino Sans", "Noto Sans JP", sans-serif;
      padding: 24px 16px 48px;
    }

    .app {
      width: min(920px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    header.bar {
      background: var(--card);
      border-radius: 12px;
      box-shadow: var(--shadow);
      padding: 16px 20px;
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 8px;
    }

    header.bar h1 {
      margin: 0;
      font-size: 1.3rem;
    }

    header.bar .updated {
      color: #607d8b;
      font-size: 0.9rem;
    }

    .strip {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(130px, 1fr));
      gap: 10px;
    }

    .strip li {
      background: var(--card);
      border-radius: 10px;
      box-shadow: var(--shadow);
      padding: 10px 12px;
      display: grid;
      gap: 4px;
    }

    .strip .label,
    .card .label {
      font-size: 0.8rem;
      color: #78909c;
    }

    .strip .value {
      font-size: 1.15rem;
      font-weight: 600;
    }

    .switcher {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .switch {
      background: var(--card);
      border-radius: 999px;
      box-shadow: var(--shadow);
      padding: 8px 16px;
      text-decoration: none;
      color: var(--ink);
      font-size: 0.9rem;
    }

    .switch.active {
      background: var(--accent);
      color: #ffffff;
    }

    .chart,
    .cards,
    .error {
      background: var(--card);
      border-radius: 12px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .chart svg {
      width: 100%;
      height: auto;
    }

    .chart .bar {
      fill: var(--accent);
    }

    .chart .tick {
      font-size: 9px;
      fill: #78909c;
      text-anchor: middle;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .card {
      border: 1px solid rgba(38, 50, 56, 0.08);
      border-radius: 10px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .card .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .error {
      text-align: center;
    }
  </style>
</head>
<body>
  <div class="app">
    <header class="bar">
      <h1>COVID-19 Japan Dashboard</h1>
      <span class="updated">{{LOAD_DATE}} 更新</span>
    </header>
    {{HEADER_STRIP}}
    {{SWITCHER}}
    {{CONTENT}}
  </div>
</body>
</html>
"#;
