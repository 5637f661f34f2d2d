//! Contact page rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::chrome::{page_block, push_card, push_footer, push_heading, push_text, ACCENT, EMAIL, PHONE};
use crate::input::ClickState;
use crate::pages::Route;
use crate::widgets::{render_scrolled, ClickableList};

use super::actions::{FOCUS_BASE, OPTION_BASE, SEND};
use super::logic::field_text;
use super::state::{ContactState, Field, Focus, InquiryType};

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM EST"),
    ("Saturday", "10:00 AM - 2:00 PM EST"),
    ("Sunday", "Closed"),
];

const QUICK_LINKS: [(&str, Option<Route>); 4] = [
    ("Investment Opportunities", Some(Route::Investments)),
    ("Our Services", Some(Route::Services)),
    ("About AGH", Some(Route::About)),
    ("Fund Documentation", None),
];

const FAQ: [(&str, &str); 6] = [
    (
        "What is the minimum investment amount?",
        "Investment minimums vary by opportunity and fund structure. Please contact our investor relations team for specific details about current offerings.",
    ),
    (
        "How long does the investment process typically take?",
        "From initial inquiry to capital deployment typically takes 4-8 weeks, depending on due diligence requirements and investor documentation.",
    ),
    (
        "What types of real estate does AGH invest in?",
        "We focus on commercial, healthcare, mixed-use, and residential properties in Morocco's high-growth urban markets, with particular emphasis on smart cities and special economic zones.",
    ),
    (
        "How often do investors receive updates?",
        "Investors receive quarterly performance reports, annual audited financial statements, and access to our investor portal for real-time project tracking.",
    ),
    (
        "Do you offer co-investment opportunities?",
        "Yes, we structure co-investment opportunities alongside our Fund vehicle. Contact our team to discuss options tailored to your investment profile.",
    ),
    (
        "What is your track record?",
        "Our team brings decades of combined experience in real estate development and investment. Detailed performance metrics and case studies are available upon request.",
    ),
];

const CONSENT_TEXT: &str = "I agree that AGH may contact me by email, phone, or other means to discuss my inquiry. I have read and agree to the Privacy Policy and Terms of Service.";

pub fn render(
    state: &ContactState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = page_block("Contact", area.width);
    let inner_width = block.inner(area).width;
    let (cl, ring_lines) = build_body(state);

    let mut rows = [0u16; 7];
    for (row, line) in rows.iter_mut().zip(ring_lines) {
        *row = cl.visual_row_of(line, inner_width);
    }
    state.focus_rows.set(rows);

    let mut cs = click_state.borrow_mut();
    let extent = render_scrolled(f, area, cl, block, state.scroll.offset, &mut cs);
    state.scroll.record(extent);
}

/// Body lines plus the logical line of every focus-ring entry.
pub(super) fn build_body(state: &ContactState) -> (ClickableList<'static>, [usize; 7]) {
    let mut cl = ClickableList::new();
    let mut ring_lines = [0usize; 7];

    cl.push(Line::from(Span::styled(
        " Get in Touch",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    push_text(
        &mut cl,
        "Have questions about our investment opportunities, services, or fund structure? Our team is ready to help. Reach out using any method below, and we'll respond promptly.",
    );

    push_heading(&mut cl, "Atlas Global Holdings");
    for (label, value) in [("PHONE", PHONE), ("EMAIL", EMAIL), ("ADDRESS", "New York, NY 10001")] {
        cl.push(Line::from(vec![
            Span::styled(format!("   {:<9}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]));
    }

    push_heading(&mut cl, "Office Hours");
    for (days, hours) in OFFICE_HOURS {
        cl.push(Line::from(vec![
            Span::styled(format!("   {:<17}", days), Style::default().fg(Color::Gray)),
            Span::styled(hours, Style::default().fg(Color::White)),
        ]));
    }

    push_heading(&mut cl, "Quick Links");
    for (label, route) in QUICK_LINKS {
        match route {
            Some(route) => cl.push_clickable(
                Line::from(Span::styled(format!("   → {}", label), Style::default().fg(Color::White))),
                route.action_id(),
            ),
            None => cl.push(Line::from(Span::styled(
                format!("   → {}", label),
                Style::default().fg(Color::DarkGray),
            ))),
        }
    }

    push_heading(&mut cl, "Send us a Message");
    if state.is_submitted() {
        push_confirmation(&mut cl);
    } else {
        push_form(&mut cl, state, &mut ring_lines);
    }
    cl.push(Line::from(Span::styled(
        "   We typically respond within 24 business hours. For urgent matters, please call us directly.",
        Style::default().fg(Color::DarkGray),
    )));

    push_heading(&mut cl, "Frequently Asked Questions");
    for (question, answer) in FAQ {
        push_card(&mut cl, question, answer);
    }

    push_heading(&mut cl, "Ready to Explore Opportunities?");
    push_text(
        &mut cl,
        "Whether you're an accredited investor, institutional partner, or service provider, we'd love to discuss how AGH can support your real estate goals.",
    );
    cl.push_clickable(
        Line::from(Span::styled(
            " ▶ Schedule a Consultation → ",
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        FOCUS_BASE + Field::FullName.index(),
    );

    push_footer(&mut cl);
    (cl, ring_lines)
}

fn push_confirmation(cl: &mut ClickableList<'static>) {
    cl.blank();
    cl.push(Line::from(Span::styled(
        "   ✉ Message Sent!",
        Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    push_text(
        cl,
        "Thank you for reaching out. Our team will review your inquiry and get back to you within 24 hours.",
    );
    cl.blank();
}

fn push_form(cl: &mut ClickableList<'static>, state: &ContactState, ring_lines: &mut [usize; 7]) {
    cl.push(Line::from(Span::styled(
        "   Tab: next field · Enter: next / send · Esc: done",
        Style::default().fg(Color::DarkGray),
    )));

    for field in Field::ALL {
        let focused = state.focus == Some(Focus::Field(field));
        let missing = state.missing.contains(&field);
        let id = FOCUS_BASE + field.index();
        cl.blank();
        ring_lines[field.index() as usize] = cl.len();

        if field == Field::AgreeToContact {
            let glyph = if state.draft.agree_to_contact { "☑" } else { "☐" };
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(marker(focused), Style::default().fg(ACCENT)),
                    Span::styled(format!("{} ", glyph), label_style(focused, missing)),
                    Span::styled(CONSENT_TEXT, Style::default().fg(Color::Gray)),
                ]),
                id,
            );
            continue;
        }

        cl.push_clickable(field_label(field, focused, missing), id);

        if field == Field::InquiryType {
            for t in InquiryType::ALL {
                cl.push_clickable(option_line(t, t == state.draft.inquiry_type), OPTION_BASE + t.index());
            }
        } else {
            cl.push_clickable(text_line(field_text(&state.draft, field), field, focused), id);
        }
    }

    cl.blank();
    let send_focused = state.focus == Some(Focus::Send);
    ring_lines[Focus::Send.ring_index()] = cl.len();
    let send_style = if send_focused {
        Style::default()
            .fg(ACCENT)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)
    };
    cl.push_clickable(
        Line::from(vec![
            Span::styled(marker(send_focused), Style::default().fg(ACCENT)),
            Span::styled(" Send Message ✉ ", send_style),
        ]),
        SEND,
    );
    if !state.missing.is_empty() {
        cl.push(Line::from(Span::styled(
            "   Please complete the highlighted fields.",
            Style::default().fg(Color::LightRed),
        )));
    }
    cl.blank();
}

fn marker(focused: bool) -> &'static str {
    if focused {
        " ▶ "
    } else {
        "   "
    }
}

fn label_style(focused: bool, missing: bool) -> Style {
    if missing {
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }
}

fn field_label(field: Field, focused: bool, missing: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(marker(focused), Style::default().fg(ACCENT)),
        Span::styled(field.label(), label_style(focused, missing)),
    ];
    if field.is_required() {
        spans.push(Span::styled(" *", Style::default().fg(ACCENT)));
    }
    if missing {
        spans.push(Span::styled(" (required)", Style::default().fg(Color::LightRed)));
    }
    Line::from(spans)
}

fn text_line(value: &str, field: Field, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("     ")];
    if value.is_empty() && !focused {
        spans.push(Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::White)));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

fn option_line(t: InquiryType, selected: bool) -> Line<'static> {
    let (glyph, style) = if selected {
        ("(●)", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    } else {
        ("( )", Style::default().fg(Color::Gray))
    };
    Line::from(vec![
        Span::styled(format!("     {} ", glyph), Style::default().fg(ACCENT)),
        Span::styled(t.label(), style),
    ])
}
