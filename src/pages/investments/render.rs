//! Investments page rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders};
use ratzilla::ratatui::Frame;

use crate::chrome::{
    page_block, push_bullet, push_card, push_cta, push_footer, push_heading, push_step,
    push_text, ACCENT,
};
use crate::input::{is_narrow_layout, ClickState};
use crate::pages::Route;
use crate::widgets::{render_scrolled, ClickableList, TabBar};

use super::actions::FILTER_BASE;
use super::catalog::{Opportunity, CATALOG};
use super::logic::{count, filter};
use super::state::{FilterSelection, InvestmentsState};

const FUND_FEATURES: [(&str, &str); 3] = [
    (
        "Blind Pool Structure",
        "Flexible capital deployment across multiple project-specific Special Purpose Entities (SPEs), each wholly owned by the Fund.",
    ),
    (
        "Diversified Portfolio",
        "Exposure to multiple asset classes, geographies, and investment stages within a single institutional vehicle.",
    ),
    (
        "Aligned Incentives",
        "AGH team invests alongside fund investors in every venture, ensuring shared success and accountability.",
    ),
];

const FUND_TERMS: [(&str, &str); 6] = [
    ("Structure", "Delaware Limited Partnership"),
    ("Focus", "US & Morocco Real Estate"),
    ("Deployment", "Project-Specific SPEs"),
    ("Strategy", "Value-Add & Development"),
    ("Investor Alignment", "Co-Investment Required"),
    ("Status", "Accepting Capital Commitments"),
];

const SELECTION_CRITERIA: [(&str, &str); 3] = [
    (
        "Risk-Adjusted Returns",
        "We prioritize projects with the highest Return on Cost (ROC) and lowest break-even point, ensuring profitability even in downside scenarios.",
    ),
    (
        "Market Velocity",
        "We target assets in prime locations with proven high absorption rates, minimizing holding periods and maximizing capital efficiency.",
    ),
    (
        "Regulatory Certainty",
        "We favor opportunities with clear zoning and approval pathways, reducing timeline uncertainty and protecting projected sellable area.",
    ),
];

const WHY_AGH: [(&str, &str); 6] = [
    (
        "Institutional Underwriting",
        "Rigorous financial modeling, scenario analysis, and risk evaluation backed by deep market expertise.",
    ),
    (
        "Transparent Deal Structure",
        "Clear waterfall structures, fee alignment, and regular investor reporting throughout the investment period.",
    ),
    (
        "Local Market Expertise",
        "Deep knowledge of Morocco's real estate fundamentals, regulatory environment, and buyer preferences.",
    ),
    (
        "Full-Cycle Execution",
        "From acquisition through exit, we manage every phase of the investment lifecycle to maximize returns.",
    ),
    (
        "Aligned Incentives",
        "Our team co-invests alongside partners in every venture, ensuring shared success and accountability.",
    ),
    (
        "Capital Efficiency",
        "Strategic acquisitions at favorable prices, efficient construction execution, and accelerated sales cycles.",
    ),
];

pub fn render(
    state: &InvestmentsState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let mut cs = click_state.borrow_mut();
    render_filter_bar(state.selection, f, chunks[0], &mut cs);

    let cl = build_body(state.selection);
    let extent = render_scrolled(
        f,
        chunks[1],
        cl,
        page_block("Investment Opportunities", area.width),
        state.scroll.offset,
        &mut cs,
    );
    state.scroll.record(extent);
}

fn render_filter_bar(selection: FilterSelection, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let narrow = is_narrow_layout(area.width);
    let mut bar = TabBar::new(if narrow { "" } else { " │ " });
    for s in FilterSelection::ALL {
        let caption = if narrow { s.short_label() } else { s.label() };
        let label = format!("{} ({})", caption, count(CATALOG, s));
        let style = if s == selection {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        bar = bar.tab(label, style, FILTER_BASE + s.index());
    }
    bar.block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .render(f, area, cs);
}

fn build_body(selection: FilterSelection) -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        " Investment Opportunities",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    push_text(
        &mut cl,
        "Explore our curated pipeline of high-potential real estate investments across Morocco's most compelling markets. From vetted opportunities ready for capital deployment to large-scale development projects seeking partners, AGH provides institutional-grade investment vehicles with transparent underwriting and aligned incentives.",
    );

    push_heading(&mut cl, "Atlas US Morocco Development Fund I");
    push_text(
        &mut cl,
        "A Delaware limited partnership formed to aggregate investor capital and deploy it into a diversified portfolio of real estate and development opportunities located primarily in the US and the Kingdom of Morocco.",
    );
    for (title, description) in FUND_FEATURES {
        push_card(&mut cl, title, description);
    }
    cl.blank();
    for (label, value) in FUND_TERMS {
        cl.push(Line::from(vec![
            Span::styled(format!("   {:<20}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
    }
    cl.blank();
    push_cta(&mut cl, "Request Fund Documentation", Route::Contact);

    push_heading(&mut cl, "Current Investment Pipeline");
    push_text(
        &mut cl,
        "Our vetted pipeline reflects rigorous project selection based on margin of safety, capital recycling speed, and regulatory certainty. Each opportunity has been evaluated against our institutional investment criteria.",
    );
    cl.push(Line::from(Span::styled(
        format!("   Showing: {}", selection.label()),
        Style::default().fg(Color::DarkGray),
    )));

    let shown = filter(CATALOG, selection);
    if shown.is_empty() {
        push_text(&mut cl, "No opportunities match this filter.");
    }
    for o in shown {
        push_opportunity(&mut cl, o);
    }

    push_heading(&mut cl, "Our Investment Selection Framework");
    for (i, (title, description)) in SELECTION_CRITERIA.iter().enumerate() {
        push_step(&mut cl, i + 1, title, description);
    }

    push_heading(&mut cl, "Why Invest With AGH");
    for (title, description) in WHY_AGH {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Ready to Explore Investment Opportunities?");
    push_text(
        &mut cl,
        "Let's discuss how AGH can help you deploy capital into high-potential real estate investments with institutional-grade governance and transparent alignment.",
    );
    push_cta(&mut cl, "Schedule a Consultation", Route::Contact);

    push_footer(&mut cl);
    cl
}

fn push_opportunity(cl: &mut ClickableList<'static>, o: &Opportunity) {
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    cl.blank();
    cl.push(Line::from(Span::styled(
        format!(" ▌{} ", o.status.label()),
        Style::default()
            .fg(o.status.color())
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {}", o.name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!("   ⌖ {} · {}", o.location, o.property_type),
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(vec![
        Span::styled("   Sellable Size ", dim),
        Span::styled(o.sellable_size, value),
        Span::styled("   Price/m² ", dim),
        Span::styled(o.price_per_area, value),
    ]));
    cl.push(Line::from(vec![
        Span::styled("   Total Price ", dim),
        Span::styled(o.total_price, value),
        Span::styled("   Expected IRR ", dim),
        Span::styled(
            o.expected_return,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    for feature in o.features {
        push_bullet(cl, feature);
    }
}
