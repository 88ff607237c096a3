/// Server-side HTML for the record browser page.
///
/// The template is registered under a `.html` name so minijinja auto-escapes every
/// interpolated value, including the raw search term echoed in the empty state.
use minijinja::{context, Environment};
use serde::Serialize;

use watercodes_common::browser::{BrowserView, RecordBrowser};

use crate::error::AppError;

const PAGE_TEMPLATE_NAME: &str = "page.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ site_title }}</title>
<style>{{ css_styles|safe }}</style>
</head>
<body>
<nav class="nav">
  <a class="brand" href="{{ profile_url }}" target="_blank" rel="noopener noreferrer">{{ site_title }}</a>
  <form class="search" method="get" action="/">
    <input type="text" name="day" placeholder="Search day..." value="{{ search_term }}" autocomplete="off">
    {% if can_clear %}<a class="clear" href="/">Clear</a>{% endif %}
  </form>
</nav>
<main class="container">
{% if empty %}
  <div class="empty">
    <p class="empty-message">{{ empty.message }}</p>
    <p class="empty-hint">{{ empty.hint }}</p>
  </div>
{% else %}
  {% for card in cards %}
  <a class="card" href="{{ card.link }}" target="_blank" rel="noopener noreferrer">
    <h2>Day {{ card.day }} of ML</h2>
    <ul>
      {% for point in card.bullets %}<li>{{ point }}</li>
      {% endfor %}
    </ul>
  </a>
  {% endfor %}
  {% if toggleable %}
  <form class="toggle" method="get" action="/">
    <input type="hidden" name="day" value="{{ search_term }}">
    {% if show_all %}
    <button type="submit">Show less</button>
    {% else %}
    <input type="hidden" name="all" value="true">
    <button type="submit">Show all ({{ hidden }} more)</button>
    {% endif %}
  </form>
  {% endif %}
{% endif %}
</main>
</body>
</html>
"#;

const CSS_STYLES: &str = r#"
body { margin: 0; min-height: 100vh; font-family: Poppins, system-ui, sans-serif; background: linear-gradient(to right, #fff1f2, #f0fdfa); overflow-x: hidden; }
.nav { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: .5rem; background: #fff; padding: 1rem 2rem; }
.brand { color: #000; font-size: 1.5rem; font-weight: 700; text-decoration: none; }
.search { display: flex; align-items: center; gap: .5rem; }
.search input { width: 10rem; padding: .25rem .5rem; border: 1px solid #e5e7eb; border-radius: .375rem; color: #f97316; }
.clear { background: #f97316; color: #fff; padding: .125rem .5rem; border-radius: .375rem; font-size: .75rem; text-decoration: none; }
.clear:hover { background: #ea580c; }
.container { max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; }
.card { display: block; margin-bottom: 2rem; padding: 1.5rem; border-radius: .5rem; box-shadow: 0 4px 6px rgba(0,0,0,.1); color: inherit; text-decoration: none; transition: background .3s; }
.card:hover { background: #f9fafb; }
.card h2 { color: #f97316; margin: 0 0 1rem; }
.card li { color: #374151; margin-bottom: .5rem; }
.empty { text-align: center; padding: 2rem 0; min-height: 100vh; }
.empty-message { font-size: 1.25rem; color: #4b5563; }
.empty-hint { color: #6b7280; }
.toggle { text-align: center; }
"#;

#[derive(Debug, Serialize)]
struct CardContext<'a> {
    day: &'a str,
    bullets: &'a [String],
    link: &'a str,
}

#[derive(Debug, Serialize)]
struct EmptyContext<'a> {
    message: &'a str,
    hint: &'a str,
}

/// Site-wide values that do not change between requests.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub site_title: String,
    pub profile_url: String,
}

pub struct PageRenderer {
    env: Environment<'static>,
    site: SiteInfo,
}

impl PageRenderer {
    pub fn new(site: SiteInfo) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env, site })
    }

    pub fn render(&self, browser: &RecordBrowser, view: &BrowserView) -> Result<String, AppError> {
        let cards: Vec<CardContext<'_>> = view
            .cards
            .iter()
            .map(|card| CardContext {
                day: card.day.as_deref().unwrap_or_default(),
                bullets: &card.bullets,
                link: &card.link,
            })
            .collect();
        let empty = view.empty.as_ref().map(|e| EmptyContext {
            message: &e.message,
            hint: &e.hint,
        });

        let template = self.env.get_template(PAGE_TEMPLATE_NAME)?;
        let html = template.render(context! {
            site_title => &self.site.site_title,
            profile_url => &self.site.profile_url,
            css_styles => CSS_STYLES,
            search_term => browser.search_term(),
            can_clear => browser.can_clear(),
            show_all => browser.show_all(),
            cards,
            empty,
            hidden => view.hidden,
            toggleable => view.toggleable,
        })?;
        Ok(html)
    }
}
