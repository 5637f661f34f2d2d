//! About page rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::chrome::{page_block, push_card, push_cta, push_footer, push_heading, push_step, push_text, ACCENT};
use crate::input::ClickState;
use crate::pages::{Route, ScrollState};
use crate::widgets::{render_scrolled, ClickableList};

const LIFECYCLE: [(&str, &str); 4] = [
    (
        "Acquisition",
        "Identify and acquire undervalued real estate assets at significant discounts to replacement cost",
    ),
    (
        "Design & Development",
        "Develop and construct sustainable, high-quality properties using modern systems and best practices",
    ),
    (
        "Leasing & Sales",
        "Lease and sell assets to local and international investors, maximizing occupancy and returns",
    ),
    (
        "Asset Management",
        "Optimize operations and performance throughout the holding period and exit strategy",
    ),
];

pub(crate) const SPECIALIZATIONS: [(&str, &str); 4] = [
    (
        "Commercial Real Estate",
        "Office complexes, retail centers, and business parks in high-growth urban corridors",
    ),
    (
        "Healthcare Facilities",
        "Modern medical centers and specialized healthcare properties serving growing demand",
    ),
    (
        "Mixed-Use Development",
        "Integrated residential, commercial, and hospitality properties in strategic locations",
    ),
    (
        "Smart Cities & SEZs",
        "Properties in Special Economic Zones and smart city developments with government support",
    ),
];

const INVESTOR_SERVICES: [(&str, &str); 3] = [
    (
        "Project Sourcing",
        "Pre-vetted, off-market real estate opportunities aligned with your investment criteria and return targets",
    ),
    (
        "Investment Fund Setup",
        "Establish and manage dedicated investment funds tailored to your capital deployment strategy and timeline",
    ),
    (
        "Due Diligence & Analysis",
        "Comprehensive market analysis, financial modeling, and risk assessment for every investment opportunity",
    ),
];

pub(crate) const WHY_AGH: [(&str, &str); 6] = [
    (
        "Local Expertise, Global Standards",
        "We combine deep knowledge of Morocco's real estate market with international investment best practices and institutional-grade governance.",
    ),
    (
        "Strategic Market Focus",
        "We concentrate on high-growth urban centers and government-backed development zones where fundamentals, timing, and capital alignment create exceptional opportunities.",
    ),
    (
        "Full-Cycle Execution",
        "From acquisition through exit, we manage every phase of the investment lifecycle, reducing complexity and risk for our partners.",
    ),
    (
        "Aligned Incentives",
        "Our team invests alongside our partners in every venture, ensuring our success is directly tied to investor returns.",
    ),
    (
        "Innovation & Sustainability",
        "We explore PropTech solutions, green construction practices, and sustainable development to maximize long-term asset value and community impact.",
    ),
    (
        "Transparent Partnership",
        "We maintain open communication, regular reporting, and accountability throughout the investment period and beyond.",
    ),
];

const IMPACT: [(&str, &str, &str); 3] = [
    (
        "$2.5B+",
        "Total Transaction Value",
        "Invested across Morocco's most promising real estate opportunities",
    ),
    (
        "50+",
        "Projects Completed",
        "From acquisition through successful exit and asset management",
    ),
    (
        "15+",
        "Urban Markets",
        "Presence across Morocco's fastest-growing cities and economic zones",
    ),
];

pub fn render(scroll: &ScrollState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cs = click_state.borrow_mut();
    let extent = render_scrolled(
        f,
        area,
        build_body(),
        page_block("About", area.width),
        scroll.offset,
        &mut cs,
    );
    scroll.record(extent);
}

pub(super) fn build_body() -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    let sub = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    cl.push(Line::from(Span::styled(" Who We Are", sub)));
    push_text(
        &mut cl,
        "A U.S.-based investment firm transforming undervalued real estate into high-quality assets across Morocco's fastest-growing markets.",
    );

    push_heading(&mut cl, "Vision");
    push_text(
        &mut cl,
        "To unlock Morocco's potential as a gateway to African investment by connecting U.S. capital with transformative real estate opportunities that build wealth and strengthen communities.",
    );
    push_heading(&mut cl, "Mission");
    push_text(
        &mut cl,
        "To create valuable, income-generating real estate assets in Morocco's emerging urban centers, prioritizing investor returns, operational excellence, and positive community impact.",
    );

    push_heading(&mut cl, "Our Story");
    cl.push(Line::from(Span::styled(" Focused on Opportunity", sub)));
    push_text(
        &mut cl,
        "Atlas Global Holdings (AGH) was founded on a simple insight: Morocco's rapid urbanization and economic growth create exceptional opportunities for disciplined investors. While many overlook the North African market, we see a region with rising demand for modern real estate, strong demographic tailwinds, and significant value creation potential.",
    );
    push_text(
        &mut cl,
        "We target Morocco's strategic growth corridors: smart city developments, Special Economic Zones (SEZs), and infrastructure hubs, where international investment meets local expertise to deliver outsized returns.",
    );
    cl.blank();
    cl.push(Line::from(Span::styled(" Client-Focused, Results-Driven", sub)));
    push_text(
        &mut cl,
        "Our approach combines international investment standards with deep local knowledge. We partner with U.S. investors, family offices, and institutions to identify, acquire, and develop high-potential commercial, medical, residential, and mixed-use properties.",
    );
    push_text(
        &mut cl,
        "From market analysis and due diligence to project execution and asset management, we handle the full investment lifecycle so our partners can focus on returns.",
    );

    push_heading(&mut cl, "What We Do");
    cl.push(Line::from(Span::styled(" The Full Development Lifecycle", sub)));
    for (i, (title, description)) in LIFECYCLE.iter().enumerate() {
        push_step(&mut cl, i + 1, title, description);
    }
    cl.blank();
    cl.push(Line::from(Span::styled(" Our Specializations", sub)));
    for (title, description) in SPECIALIZATIONS {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Our Investor Services");
    for (title, description) in INVESTOR_SERVICES {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Why AGH");
    for (title, description) in WHY_AGH {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Our Impact");
    for (metric, label, description) in IMPACT {
        cl.push(Line::from(vec![
            Span::styled(
                format!(" {:>6} ", metric),
                Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", label), sub),
        ]));
        push_text(&mut cl, description);
    }
    cl.blank();
    push_text(
        &mut cl,
        "Beyond financial returns, we're committed to creating lasting value for the communities we invest in. Our projects generate employment, improve urban infrastructure, and support Morocco's vision of sustainable economic growth. We believe responsible investment and superior returns go hand in hand.",
    );

    push_heading(&mut cl, "Ready to Invest?");
    push_text(
        &mut cl,
        "Let's explore how AGH can help you access Morocco's most compelling real estate opportunities with confidence and clarity.",
    );
    push_cta(&mut cl, "Get in Touch", Route::Contact);

    push_footer(&mut cl);
    cl
}
