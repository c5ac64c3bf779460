//! HTML markup of the countdown page

use std::fmt::Write;

use crate::countdown::{CountdownOptions, Unit};

use super::DisplaySnapshot;

/// Text replacing the timer once the event has been reached
pub const ENDED_MESSAGE: &str = "Event has started!";

const REFRESH: &str = "<meta http-equiv=\"refresh\" content=\"1\">\n";

const STYLE: &str = "\
.event-countdown{position:fixed;z-index:9999;padding:12px 18px;border-radius:8px;\
background:rgba(0,0,0,.8);color:#fff;font-family:sans-serif;text-align:center}\
.countdown-title{font-weight:bold;margin-bottom:4px}\
.countdown-timer{font-family:monospace;font-size:1.4em}\
.event-countdown-top-left{top:20px;left:20px}\
.event-countdown-top-middle{top:20px;left:50%;transform:translateX(-50%)}\
.event-countdown-top-right{top:20px;right:20px}\
.event-countdown-middle-left{top:50%;left:20px;transform:translateY(-50%)}\
.event-countdown-middle-middle{top:50%;left:50%;transform:translate(-50%,-50%)}\
.event-countdown-middle-right{top:50%;right:20px;transform:translateY(-50%)}\
.event-countdown-bottom-left{bottom:20px;left:20px}\
.event-countdown-bottom-middle{bottom:20px;left:50%;transform:translateX(-50%)}\
.event-countdown-bottom-right{bottom:20px;right:20px}";

/// Escape text for use inside HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full page.
///
/// Without an event date the page carries no countdown container at all.
/// While the countdown is live the page reloads itself every second to pick
/// up new slot values.
pub fn render_page(options: &CountdownOptions, snapshot: &DisplaySnapshot) -> String {
    let title = escape_html(&options.title);
    let live = options.event_instant.is_some() && !snapshot.ended;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if live {
        html.push_str(REFRESH);
    }
    let _ = write!(
        html,
        "<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        title, STYLE
    );

    if options.event_instant.is_some() {
        let _ = write!(
            html,
            "<div id=\"event-countdown\" class=\"event-countdown {}\">\n\
             <div class=\"countdown-content\">\n<div class=\"countdown-title\">{}</div>\n\
             <div class=\"countdown-timer\" id=\"countdown-timer\">",
            options.position.css_class(),
            title
        );

        if snapshot.ended {
            let _ = write!(html, "<span class=\"countdown-ended\">{}</span>", ENDED_MESSAGE);
        } else {
            let slots: Vec<String> = Unit::ALL
                .iter()
                .map(|unit| {
                    format!(
                        "<span class=\"{}\">{}</span>{}",
                        unit.slot_name(),
                        escape_html(snapshot.slot(*unit)),
                        unit.suffix()
                    )
                })
                .collect();
            html.push_str(&slots.join(" "));
        }

        html.push_str("</div>\n</div>\n</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
