//! Services page rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::chrome::{page_block, push_bullet, push_card, push_cta, push_footer, push_heading, push_step, push_text};
use crate::input::ClickState;
use crate::pages::about::render::{SPECIALIZATIONS, WHY_AGH};
use crate::pages::{Route, ScrollState};
use crate::widgets::{render_scrolled, ClickableList};

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 6],
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Market Research & Consulting",
        description: "Validate opportunities with data-driven insights and local intelligence before committing capital.",
        features: [
            "Market entry strategy & regulatory guidance",
            "Feasibility studies & financial projections",
            "Site selection & property analysis",
            "Investor pitch deck preparation",
            "Deal sourcing, structuring & management",
            "Risk analysis & mitigation planning",
        ],
    },
    Service {
        title: "Investment Structuring & Fund Formation",
        description: "Design optimal investment structures and establish dedicated funds tailored to your capital deployment strategy.",
        features: [
            "Joint venture, partnership & syndication structuring",
            "Access to local and international investors",
            "Financing strategy & capital sourcing",
            "Government incentives & tax credit guidance",
            "ROI modeling & financial scenario planning",
            "Capital raise support & investor presentations",
        ],
    },
    Service {
        title: "Deal Analysis & Underwriting",
        description: "Comprehensive financial modeling, pitch decks, and offering memorandums to support your investment decisions.",
        features: [
            "Institutional-quality financial modeling",
            "Deal evaluation & underwriting analysis",
            "Waterfall structuring & return scenarios",
            "Pitch deck & offering memorandum preparation",
            "Investment risk evaluation & mitigation",
            "Syndication support & advisory services",
        ],
    },
    Service {
        title: "Development & Project Execution",
        description: "Coordinate every phase of development to ensure projects meet international standards while navigating local requirements.",
        features: [
            "Site selection advisory & acquisition support",
            "Permitting, approvals & regulatory compliance",
            "Architect, contractor & vendor coordination",
            "Construction supervision & quality control",
            "Renovation & asset improvement projects",
            "Build-to-suit development for specialized operators",
        ],
    },
];

const ASSET_MANAGEMENT: [&str; 7] = [
    "Post-construction close-out & compliance verification",
    "Property management & operational oversight",
    "Revenue optimization: leasing, tenant placement & contracts",
    "Marketing & sales support for asset disposition",
    "Investor reporting & financial performance tracking",
    "Long-term asset growth strategies",
    "Exit planning & portfolio optimization",
];

const APPROACH: [(&str, &str); 4] = [
    (
        "Acquisition at Deep Value",
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

pub fn render(scroll: &ScrollState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cs = click_state.borrow_mut();
    let extent = render_scrolled(
        f,
        area,
        build_body(),
        page_block("Services", area.width),
        scroll.offset,
        &mut cs,
    );
    scroll.record(extent);
}

pub(super) fn build_body() -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        " Our Services",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    push_text(
        &mut cl,
        "We invest thematically in high-quality assets, focusing where we see outsized growth potential driven by global economic and demographic trends. From market analysis to fund management, we handle the full investment lifecycle.",
    );
    cl.blank();
    push_cta(&mut cl, "Get Started", Route::Contact);

    push_heading(&mut cl, "Comprehensive Investment Solutions");
    push_text(
        &mut cl,
        "AGH provides end-to-end services across the entire real estate investment lifecycle, combining international standards with deep local expertise in Morocco's most promising markets.",
    );
    for service in &SERVICES {
        cl.blank();
        push_card(&mut cl, service.title, service.description);
        for feature in service.features {
            push_bullet(&mut cl, feature);
        }
    }

    push_heading(&mut cl, "Asset Management & Optimization");
    push_text(
        &mut cl,
        "Maximize returns throughout the holding period and beyond with strategic asset management, operational optimization, and disciplined exit planning.",
    );
    for item in ASSET_MANAGEMENT {
        push_bullet(&mut cl, item);
    }

    push_heading(&mut cl, "Our Approach");
    for (i, (title, description)) in APPROACH.iter().enumerate() {
        push_step(&mut cl, i + 1, title, description);
    }

    push_heading(&mut cl, "Our Specializations");
    for (title, description) in SPECIALIZATIONS {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Why Choose AGH");
    for (title, description) in WHY_AGH {
        push_card(&mut cl, title, description);
    }

    push_heading(&mut cl, "Ready to Transform Your Real Estate Strategy?");
    push_text(
        &mut cl,
        "Let's explore how AGH can help you identify, structure, and execute high-potential real estate investments in Morocco's most compelling markets.",
    );
    push_cta(&mut cl, "Get in Touch", Route::Contact);
    cl.push_clickable(
        Line::from(Span::styled(
            "   Learn More About Our Process →",
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
        )),
        Route::About.action_id(),
    );

    push_footer(&mut cl);
    cl
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_lists_six_features() {
        let text: String = build_body()
            .into_lines()
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        for service in &SERVICES {
            assert!(text.contains(service.title));
            for feature in service.features {
                assert!(text.contains(feature), "missing {}", feature);
            }
        }
        assert!(text.contains("Exit planning & portfolio optimization"));
        assert!(text.contains("Acquisition at Deep Value"));
    }

    #[test]
    fn ctas_route_to_contact_and_about() {
        let cl = build_body();
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 200, 500), &mut cs, 0, 0, 0, 0);
        let ids: Vec<_> = cs.targets.iter().map(|t| t.action_id).collect();
        // Get Started, Get in Touch, and the footer's two contact links.
        assert_eq!(ids.iter().filter(|&&id| id == Route::Contact.action_id()).count(), 4);
        assert!(ids.contains(&Route::About.action_id()));
    }
}
