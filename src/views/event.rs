use chrono::{DateTime, FixedOffset, Utc};

use super::layout::load_state;
use super::{escape, format_event_datetime};
use crate::models::Event;
use crate::pages::admin_events::AdminEventsPage;
use crate::pages::event_detail::EventDetailPage;
use crate::pages::events_list::{EventFilter, EventsListPage};
use crate::pages::LoadState;

const PREVIEW_LEN: usize = 180;

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Admin row with View and Delete controls
pub fn event_list_item(event: &Event, deleting: bool, offset: FixedOffset) -> String {
    let id = super::path_segment(&event.id);
    let description = event
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(r#"<p class="event-item-description">{}</p>"#, escape(d)))
        .unwrap_or_default();
    let delete = if deleting {
        r#"<button class="button button-danger" disabled>Deleting...</button>"#.to_string()
    } else {
        format!(
            r#"<a class="button button-danger" href="/admin/events?confirm={}">Delete</a>"#,
            super::query_value(&event.id)
        )
    };

    format!(
        r#"<div class="event-item">
    <div>
        <h3>{title}</h3>
        <p class="event-item-date">{date}</p>
        {description}
    </div>
    <div class="event-item-actions">
        <a class="button" href="/events/{id}">View</a>
        <a class="button" href="/admin/events/{id}/edit">Edit</a>
        {delete}
    </div>
</div>"#,
        title = escape(event.display_title()),
        date = escape(&format_event_datetime(&event.event_date_time, offset)),
        description = description,
        id = id,
        delete = delete,
    )
}

/// Clickable card on the public events list
pub fn event_preview_card(event: &Event, offset: FixedOffset) -> String {
    let image = match event.photos().first().and_then(|p| {
        p.photo_link
            .as_deref()
            .filter(|link| !link.is_empty())
            .map(|link| (link, p))
    }) {
        Some((link, photo)) => {
            let alt = photo
                .alternative_text
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| event.title.as_deref().unwrap_or("Event"));
            format!(
                r#"<img class="card-image" src="{}" alt="{}">"#,
                escape(link),
                escape(alt)
            )
        }
        None => r#"<div class="card-image card-image-empty">IEEE</div>"#.to_string(),
    };
    let badge = if event.registration_url().is_some() {
        r#"<span class="badge">Registration Open</span>"#
    } else {
        ""
    };

    format!(
        r#"<a class="event-card" href="/events/{id}">
    {image}
    <div class="card-body">
        <p class="card-date">{date}</p>
        <h3>{title}</h3>
        <p class="card-description">{description}</p>
        <div class="card-footer"><span>Explore More &rarr;</span>{badge}</div>
    </div>
</a>"#,
        id = super::path_segment(&event.id),
        image = image,
        date = escape(&format_event_datetime(&event.event_date_time, offset)),
        title = escape(event.display_title()),
        description = escape(&truncate(event.description.as_deref().unwrap_or(""), PREVIEW_LEN)),
        badge = badge,
    )
}

/// Full event body: heading, date, registration link, description and gallery
pub fn base_event_page(event: &Event, offset: FixedOffset) -> String {
    let register = event
        .registration_url()
        .map(|url| {
            format!(
                r#"<a class="button button-primary" href="{}" target="_blank" rel="noopener noreferrer">Register</a>"#,
                escape(url)
            )
        })
        .unwrap_or_default();
    let description = event
        .description
        .as_deref()
        .map(|d| format!(r#"<div class="event-description"><p>{}</p></div>"#, escape(d)))
        .unwrap_or_default();

    let figures: Vec<String> = event
        .photos()
        .iter()
        .filter_map(|photo| {
            let link = photo.photo_link.as_deref().filter(|l| !l.is_empty())?;
            let alt = photo
                .alternative_text
                .as_deref()
                .filter(|a| !a.is_empty())
                .unwrap_or("Event photo");
            Some(format!(
                r#"<figure><img src="{}" alt="{}"><figcaption>{}</figcaption></figure>"#,
                escape(link),
                escape(alt),
                escape(alt)
            ))
        })
        .collect();
    let gallery = if figures.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="gallery"><h2>Gallery</h2>{}</section>"#,
            figures.join("")
        )
    };

    format!(
        r#"<article class="container event-page">
    <h1 class="page-title">{title}</h1>
    <p class="card-date">{date}</p>
    {register}
    {description}
    {gallery}
</article>"#,
        title = escape(event.display_title()),
        date = escape(&format_event_datetime(&event.event_date_time, offset)),
        register = register,
        description = description,
        gallery = gallery,
    )
}

fn filter_tabs(active: EventFilter) -> String {
    EventFilter::ALL
        .iter()
        .map(|filter| {
            let class = if *filter == active {
                "button button-primary"
            } else {
                "button"
            };
            format!(
                r#"<a class="{}" href="/events?filter={}">{}</a>"#,
                class,
                filter.as_str(),
                filter.label()
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Public events list body with filter tabs
pub fn events_list_body(page: &EventsListPage, now: DateTime<Utc>, offset: FixedOffset) -> String {
    let content = load_state(page.events.state(), "Error Loading Events", |_| {
        let visible = page.visible(now);
        if visible.is_empty() {
            return format!(
                r#"<div class="empty-state"><p>{}</p><p>Check back soon for updates!</p></div>"#,
                page.filter.empty_message()
            );
        }
        let cards: Vec<String> = visible
            .iter()
            .map(|event| event_preview_card(event, offset))
            .collect();
        format!(r#"<div class="event-grid">{}</div>"#, cards.join(""))
    });

    format!(
        r#"<section class="container">
    <h1 class="page-title">events</h1>
    <nav class="filter-tabs">{}</nav>
    {}
</section>"#,
        filter_tabs(page.filter),
        content
    )
}

fn confirm_modal(event: &Event, submission_id: &uuid::Uuid) -> String {
    format!(
        r#"<div class="modal" role="dialog" aria-modal="true">
    <div class="modal-card">
        <h2>Delete Event</h2>
        <p>Are you sure you want to delete this event? This action cannot be undone.</p>
        <p><strong>{title}</strong></p>
        <form method="post" action="/admin/events/{id}/delete">
            {submission}
            <a class="button" href="/admin/events">Cancel</a>
            <button class="button button-danger" type="submit">Delete</button>
        </form>
    </div>
</div>"#,
        title = escape(event.display_title()),
        id = super::path_segment(&event.id),
        submission = super::forms::hidden_submission_id(submission_id),
    )
}

/// Admin events list, including the delete confirmation modal when open
pub fn admin_events_body(page: &AdminEventsPage, offset: FixedOffset) -> String {
    let content = load_state(page.events.state(), "Error Loading Events", |events| {
        if events.is_empty() {
            return r#"<div class="empty-state"><p>No events yet.</p><a class="button button-primary" href="/admin/events/addNewEvent">Create your first event</a></div>"#.to_string();
        }
        events
            .iter()
            .map(|event| event_list_item(event, page.is_deleting(&event.id), offset))
            .collect::<Vec<_>>()
            .join("")
    });
    let modal = page
        .confirming()
        .map(|event| confirm_modal(event, &page.submission_id))
        .unwrap_or_default();

    format!(
        r#"<div class="admin-toolbar">
    <h1>Events</h1>
    <a class="button button-primary" href="/admin/events/addNewEvent">Add New Event</a>
</div>
{}
{}"#,
        content, modal
    )
}

/// Detail body, or the blocking error if the event could not be loaded
pub fn event_detail_body(page: &EventDetailPage, offset: FixedOffset) -> String {
    match page.event.state() {
        LoadState::Loaded(event) => base_event_page(event, offset),
        _ => format!(
            r#"<section class="container">{}<p><a class="button" href="/events">Back to events</a></p></section>"#,
            load_state(page.event.state(), "Error Loading Event", |_| String::new())
        ),
    }
}
