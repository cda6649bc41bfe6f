use super::{escape, Toast};
use crate::pages::LoadState;

const NAV_LINKS: &[(&str, &str)] = &[
    ("HACKATHON 2.0", "/hackathon/register"),
    ("ABOUT US", "/#about"),
    ("EVENTS", "/events"),
    ("BOARD MEMBERS", "/#board"),
    ("CONTACT US", "/#contact"),
];

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("Events", "/admin/events"),
    ("Hackathon", "/admin/hackathon"),
    ("Back to site", "/"),
];

const STYLES: &str = r#"
body { margin: 0; background: #000; color: #fff; font-family: Inter, system-ui, sans-serif; }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
.site-header { position: sticky; top: 0; backdrop-filter: blur(12px); background: rgba(0,0,0,.5); }
.site-header nav { display: flex; gap: 1.5rem; align-items: center; padding: 1rem; }
.site-header a { text-decoration: none; font-weight: 700; }
.brand { color: #00629c; font-weight: 800; margin-right: auto; }
.page-title { color: #00629c; font-size: clamp(60px, 8vw, 100px); font-weight: 800; text-transform: lowercase; line-height: 1; }
.error-box { border: 2px solid #ef4444; background: rgba(127,29,29,.3); color: #f87171; padding: 1.5rem; border-radius: 8px; }
.field-error { color: #f87171; font-size: .875rem; font-weight: 600; }
.toast { position: fixed; right: 1rem; bottom: 1rem; padding: 1rem 1.5rem; border-radius: 6px; font-weight: 600; }
.toast-success { background: #166534; }
.toast-error { background: #991b1b; }
.spinner { width: 4rem; height: 4rem; margin: 8rem auto; border-radius: 50%; border-bottom: 4px solid #00629c; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.button { display: inline-block; padding: .75rem 1.5rem; border-radius: 6px; border: 2px solid #fff; background: transparent; color: #fff; font-weight: 600; text-transform: uppercase; text-decoration: none; cursor: pointer; }
.button-primary { background: #00629c; border-color: #00629c; }
.button-danger { background: #dc2626; border-color: #dc2626; }
.button[disabled] { opacity: .5; cursor: not-allowed; }
.modal { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,.8); }
.modal-card { border: 2px solid #00629c; border-radius: 8px; background: #000; padding: 2rem; max-width: 28rem; }
.hero { min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; }
.hero-subtitle { font-size: clamp(30px, 5vw, 50px); font-weight: 600; text-transform: uppercase; text-shadow: 0 0 8px #2769bf; }
.ticker { overflow: hidden; white-space: nowrap; font-size: 2.25rem; font-weight: 800; padding: .75rem 0; }
.ticker span { display: inline-block; animation: marquee 20s linear infinite; }
.ticker-reverse span { animation-direction: reverse; }
@keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
.hackathon-banner { text-align: center; padding: 5rem 1.5rem; }
.hackathon-banner h1 { font-size: clamp(60px, 10vw, 128px); font-weight: 800; }
.hackathon-banner p { letter-spacing: .25em; text-transform: uppercase; font-weight: 600; }
.accent { color: #00629c; }
.event-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 2rem; }
.event-card { display: block; border: 2px solid #fff; border-radius: 8px; overflow: hidden; text-decoration: none; }
.event-card:hover { border-color: #00629c; }
.card-image { width: 100%; height: 16rem; object-fit: cover; }
.card-image-empty { display: flex; align-items: center; justify-content: center; color: #00629c; font-weight: 800; }
.card-body { padding: 1.5rem; }
.card-date { color: #00629c; font-weight: 600; text-transform: uppercase; }
.card-footer { display: flex; justify-content: space-between; border-top: 1px solid rgba(255,255,255,.2); padding-top: 1rem; }
.badge { border: 1px solid #00629c; color: #00629c; padding: .25rem .75rem; font-size: .75rem; font-weight: 700; text-transform: uppercase; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.gallery h2 { grid-column: 1 / -1; }
.gallery img { width: 100%; border-radius: 6px; }
.event-item { display: flex; justify-content: space-between; gap: 1rem; border: 1px solid #333; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.event-item-actions, .form-actions, .admin-toolbar, .filter-tabs { display: flex; gap: .5rem; align-items: center; }
.admin-toolbar { justify-content: space-between; }
.field { display: block; margin-bottom: 1rem; }
.field input, .field textarea, .field select { display: block; width: 100%; padding: .5rem; background: #111; color: #fff; border: 1px solid #444; border-radius: 4px; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 2rem; }
.team { border: 1px solid #333; border-radius: 8px; margin-bottom: .75rem; }
.team-toggle { display: flex; justify-content: space-between; padding: 1rem; text-decoration: none; }
.member-detail span { display: block; color: #aaa; }
.empty-state, .muted { color: rgba(255,255,255,.7); text-align: center; }
"#;

fn nav(links: &[(&str, &str)]) -> String {
    links
        .iter()
        .map(|(label, href)| format!(r#"<a href="{}">{}</a>"#, href, label))
        .collect::<Vec<_>>()
        .join("")
}

fn document(title: &str, header: &str, body: &str, toast: Option<&Toast>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
{header}
{body}
{toast}
</body>
</html>"#,
        title = escape(title),
        styles = STYLES,
        header = header,
        body = body,
        toast = toast.map(Toast::render).unwrap_or_default(),
    )
}

/// Public site header with the collapsible menu panel
pub fn site_header() -> String {
    let links = nav(NAV_LINKS);
    format!(
        r#"<header class="site-header">
    <nav>
        <a class="brand" href="/">IEEE</a>
        {links}
        <details class="site-menu">
            <summary aria-controls="site-menu">&#9776;</summary>
            <div id="site-menu">{links}</div>
        </details>
    </nav>
</header>"#,
        links = links
    )
}

pub fn admin_header() -> String {
    format!(
        r#"<header class="site-header admin-header">
    <nav>
        <a class="brand" href="/admin">IEEE Admin</a>
        {}
    </nav>
</header>"#,
        nav(ADMIN_LINKS)
    )
}

pub fn main_layout(title: &str, body: &str, toast: Option<&Toast>) -> String {
    document(title, &site_header(), &format!("<main>{}</main>", body), toast)
}

pub fn admin_layout(title: &str, body: &str, toast: Option<&Toast>) -> String {
    document(
        title,
        &admin_header(),
        &format!(r#"<main class="container">{}</main>"#, body),
        toast,
    )
}

pub fn spinner() -> &'static str {
    r#"<div class="spinner" aria-label="Loading"></div>"#
}

/// Inline blocking error with a heading
pub fn error_box(heading: &str, message: &str) -> String {
    format!(
        r#"<div class="error-box"><h3>{}</h3><p>{}</p></div>"#,
        escape(heading),
        escape(message)
    )
}

/// Spinner while loading, the error box on failure, `render` once loaded.
pub fn load_state<T>(state: &LoadState<T>, error_heading: &str, render: impl FnOnce(&T) -> String) -> String {
    match state {
        LoadState::Loading => spinner().to_string(),
        LoadState::Failed(message) => error_box(error_heading, message),
        LoadState::Loaded(value) => render(value),
    }
}

pub fn error_page(title: &str, message: &str) -> String {
    main_layout(
        title,
        &format!(
            r#"<section class="container">{}<p><a class="button" href="/">Back to home</a></p></section>"#,
            error_box(title, message)
        ),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_layout_includes_navigation() {
        let html = main_layout("Events", "<p>body</p>", None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<a href="/events">EVENTS</a>"#));
        assert!(html.contains("<main><p>body</p></main>"));
        assert!(!html.contains(r#"role="status""#));
    }

    #[test]
    fn toast_is_rendered_when_present() {
        let toast = Toast::success("Event deleted");
        let html = admin_layout("Admin", "", Some(&toast));
        assert!(html.contains(r#"class="toast toast-success""#));
        assert!(html.contains("Event deleted"));
        assert!(html.contains(r#"href="/admin/hackathon""#));
    }

    #[test]
    fn load_state_picks_branch() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert!(load_state(&loading, "Error", |_| String::new()).contains("spinner"));

        let failed: LoadState<u8> = LoadState::Failed("Failed to fetch teams".to_string());
        let html = load_state(&failed, "Error", |_| String::new());
        assert!(html.contains("error-box"));
        assert!(html.contains("Failed to fetch teams"));

        let loaded = LoadState::Loaded(7u8);
        assert_eq!(load_state(&loaded, "Error", |n| n.to_string()), "7");
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page("Page not found", "<oops>");
        assert!(html.contains("&lt;oops&gt;"));
    }
}
