//! Home page rendering (read-only from state).

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;
use tachyonfx::{fx, Duration, Interpolation};

use crate::chrome::{page_block, push_card, push_cta, push_footer, push_heading, push_text, ACCENT};
use crate::input::ClickState;
use crate::pages::Route;
use crate::widgets::{render_scrolled, ClickableList, ScrollExtent};

use super::logic::card_phase;
use super::state::{CardPhase, HomeState, FADE_MS, STAT_DELAYS_MS};

const STATS: [(&str, &str); 4] = [
    (
        "Strategic Vision",
        "We build sustainable real estate ventures through thoughtful capital deployment and strategic asset selection that create lasting value",
    ),
    (
        "Partnership Focus",
        "We partner with investors, operators, and communities to unlock opportunities that thrive long into the future, with collaboration at every step.",
    ),
    ("Investment Philosophy", "Empowering Long-Term Growth"),
    (
        "3% For The Planet",
        "We invest with purpose, guided by community, accountability, and long-term impact.",
    ),
];

const STRATEGY: [(&str, &str); 4] = [
    (
        "INVESTMENT APPROACH",
        "We create value by identifying real estate opportunities that deliver durable cash flow and long-term performance",
    ),
    (
        "LOCAL EXPERTISE",
        "Aligned with best-in-class local operators possessing deep market and asset-level expertise",
    ),
    (
        "TARGETED OPPORTUNITIES",
        "We focus on markets and assets where fundamentals, structure, and timing create compelling investment opportunities",
    ),
    (
        "CAPITAL ALIGNMENT",
        "Our team, partners, and stakeholders invest alongside our investors in every venture",
    ),
];

const ADVISORY: [&str; 4] = [
    "Market Research & Consulting",
    "Investment & Funding Strategy",
    "Development & Project Execution",
    "Asset Management & Monetization",
];

const RECENT_PROJECTS: [(&str, &str); 3] = [
    ("Premium Office Complex", "COMMERCIAL DEVELOPMENT"),
    ("Modern Medical Center", "HEALTHCARE FACILITY"),
    ("Mixed-Use Development", "URBAN PLANNING"),
];

pub fn render(state: &HomeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let block = page_block("Home", area.width);
    let inner = block.inner(area);
    let (cl, cards) = build_body();

    let card_rows: Vec<Range<u16>> = cards
        .iter()
        .map(|c| cl.visual_row_of(c.start, inner.width)..cl.visual_row_of(c.end, inner.width))
        .collect();
    if let (Some(first), Some(last)) = (card_rows.first(), card_rows.last()) {
        state.stats_rows.set((first.start, last.end));
    }

    let extent = {
        let mut cs = click_state.borrow_mut();
        render_scrolled(f, area, cl, block, state.scroll.offset, &mut cs)
    };
    state.scroll.record(extent);

    let scroll = state.scroll.offset.min(state.scroll.max_offset());
    for (rows, delay) in card_rows.iter().zip(STAT_DELAYS_MS) {
        let phase = card_phase(state.reveal_elapsed_ms, delay);
        if let Some(rect) = on_screen(rows, inner, scroll, extent) {
            apply_entrance(f, rect, phase);
        }
    }
}

/// Body lines plus the logical line range of each stat card.
pub(super) fn build_body() -> (ClickableList<'static>, Vec<Range<usize>>) {
    let mut cl = ClickableList::new();

    cl.blank();
    cl.push(Line::from(Span::styled(
        " AGH ",
        Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        " Atlas Global Holdings",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    push_text(
        &mut cl,
        "Building Long-Term Partnerships Through Strategic Real Estate Investment",
    );
    cl.blank();
    push_cta(&mut cl, "VIEW PROJECTS", Route::Projects);
    cl.push(Line::from(Span::styled(
        "   [image: modern commercial building]",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    cl.blank();
    cl.push(Line::from(Span::styled(
        " We help investors transform real estate ideas into fully developed, profitable, and sustainable projects.",
        Style::default().fg(Color::White),
    )));
    push_text(
        &mut cl,
        "From opportunity assessment to development execution and long-term asset management, AGH delivers clarity, capital, and confidence.",
    );

    cl.blank();
    let mut cards = Vec::with_capacity(STATS.len());
    for (title, label) in STATS {
        let start = cl.len();
        let card = Style::default().fg(Color::White).bg(ACCENT);
        cl.push(Line::from(Span::styled(
            format!(" {} ", title),
            card.add_modifier(Modifier::BOLD),
        )));
        cl.push(Line::from(Span::styled(format!(" {} ", label), card)));
        cards.push(start..cl.len());
        cl.blank();
    }

    push_heading(&mut cl, "Investment Strategy");
    push_text(
        &mut cl,
        "Grounded in trust and ingenuity, our platform delivers disciplined performance and superior risk-adjusted returns.",
    );
    for (title, description) in STRATEGY {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Real Estate Advisory Services");
    push_text(
        &mut cl,
        "We offer investors the flexibility to invest alongside us or engage our platform to support and manage their deals, syndications, and funds, backed by deep real estate and capital markets expertise.",
    );
    for title in ADVISORY {
        push_card(&mut cl, title, "");
    }

    push_heading(&mut cl, "Who We Are");
    cl.push(Line::from(vec![
        Span::styled(
            "   AGH is a U.S.-based real estate advisory and development firm with a strategic focus on Morocco as the ",
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            "gateway to Africa.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(Line::from(vec![
        Span::styled(
            "   We combine international standards with deep local expertise to help investors identify, fund, build, and manage high-potential ",
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            "commercial and medical real estate projects.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));

    push_heading(&mut cl, "Recent Projects");
    for (title, category) in RECENT_PROJECTS {
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    format!(" ■ {}", title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", category), Style::default().fg(Color::DarkGray)),
            ]),
            Route::Projects.action_id(),
        );
    }

    push_footer(&mut cl);
    (cl, cards)
}

/// Screen rect of the visual rows `rows` inside `inner`, clipped to the
/// viewport.
fn on_screen(rows: &Range<u16>, inner: Rect, scroll: u16, extent: ScrollExtent) -> Option<Rect> {
    let view_end = scroll + extent.viewport_rows;
    let top = rows.start.max(scroll);
    let bottom = rows.end.min(view_end);
    if bottom <= top {
        return None;
    }
    Some(Rect::new(inner.x, inner.y + (top - scroll), inner.width, bottom - top))
}

fn apply_entrance(f: &mut Frame, rect: Rect, phase: CardPhase) {
    let elapsed = match phase {
        CardPhase::Shown => return,
        CardPhase::Hidden => 0,
        CardPhase::Fading(ms) => ms,
    };
    let mut effect = fx::fade_from(Color::Black, Color::Black, (FADE_MS, Interpolation::QuadOut));
    effect.process(Duration::from_millis(elapsed), f.buffer_mut(), rect);
}
