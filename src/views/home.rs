use chrono::FixedOffset;

use super::{escape, format_event_date};
use crate::models::Event;

const TICKER_WORD: &str = "announcement";
const TICKER_REPEAT: usize = 20;

fn hero() -> &'static str {
    r#"<section class="hero">
    <div class="hero-glow"></div>
    <h1 class="hero-title">IEEE</h1>
    <p class="hero-subtitle">Student Branch at<br>Nazarbayev University</p>
</section>"#
}

/// Scrolling announcement strip; `reverse` scrolls right to left.
pub fn ticker(reverse: bool) -> String {
    let class = if reverse {
        "ticker ticker-reverse"
    } else {
        "ticker"
    };
    let words = vec![TICKER_WORD; TICKER_REPEAT].join(" ");
    format!(
        r#"<div class="{}" aria-hidden="true"><span>{}</span></div>"#,
        class, words
    )
}

fn hackathon_banner() -> &'static str {
    r#"<section class="hackathon-banner">
    <h1><span class="accent">hackathon</span>2.0</h1>
    <p>Nazarbayev University</p>
    <p>13 &ndash; 14 September, 2025</p>
    <a class="button button-primary" href="/hackathon/register">Register Now</a>
</section>"#
}

fn event_card(event: &Event, offset: FixedOffset) -> String {
    format!(
        r#"<a class="home-event" href="/events/{id}">
    <h3>{title}</h3>
    <p>{date}</p>
</a>"#,
        id = super::path_segment(&event.id),
        title = escape(event.display_title()),
        date = escape(&format_event_date(&event.event_date_time, offset)),
    )
}

/// Latest events in the order the backend returned them
pub fn events_section(events: &[Event], offset: FixedOffset) -> String {
    let content = if events.is_empty() {
        r#"<div class="empty-state"><p>No events available yet. Check back soon!</p></div>"#
            .to_string()
    } else {
        let cards: Vec<String> = events.iter().map(|e| event_card(e, offset)).collect();
        format!(r#"<div class="home-events">{}</div>"#, cards.join(""))
    };

    format!(
        r#"<section class="container" id="events">
    <h2 class="page-title">events</h2>
    {}
    <p><a class="button button-primary" href="/events">View All Events</a></p>
</section>"#,
        content
    )
}

fn anchors() -> &'static str {
    r#"<section class="container" id="about"><h2 class="page-title">about us</h2></section>
<section class="container" id="board"><h2 class="page-title">board members</h2></section>
<section class="container" id="contact"><h2 class="page-title">contact us</h2></section>"#
}

pub fn home_body(events: &[Event], offset: FixedOffset) -> String {
    [
        hero().to_string(),
        ticker(false),
        hackathon_banner().to_string(),
        ticker(true),
        events_section(events, offset),
        anchors().to_string(),
    ]
    .join("\n")
}
