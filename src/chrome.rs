//! Shared chrome: navigation bar, footer, and the page-body frame.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::pages::Route;
use crate::widgets::{ClickableList, TabBar};

/// Burgundy accent used for active states and CTAs.
pub const ACCENT: Color = Color::Rgb(0x7A, 0x1F, 0x1F);

pub const PHONE: &str = "+1 (555) 123-4567";
pub const EMAIL: &str = "investors@aghinvest.com";

/// Year shown in the copyright line.
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> u32 {
    2026
}

pub fn borders_for(area_width: u16) -> Borders {
    if is_narrow_layout(area_width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

/// Standard block around a page body.
pub fn page_block(title: &str, area_width: u16) -> Block<'static> {
    Block::default()
        .borders(borders_for(area_width))
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
}

// ── Navigation ─────────────────────────────────────────────────

/// Brand row plus the route bar. The active route is highlighted; GET
/// STARTED always leads to the contact page.
pub fn render_nav(f: &mut Frame, area: Rect, active: Route, cs: &mut ClickState) {
    let narrow = is_narrow_layout(area.width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let mut brand = vec![
        Span::styled(" AGH ", Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)),
    ];
    if !narrow {
        brand.push(Span::styled(
            "  Atlas Global Holdings",
            Style::default().fg(Color::Gray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(brand)), rows[0]);
    cs.add_click_target(Rect::new(rows[0].x, rows[0].y, 5, 1), Route::Home.action_id());

    let mut bar = TabBar::new(if narrow { "" } else { " │ " });
    for route in Route::NAV {
        let label = if narrow {
            short_label(route)
        } else {
            route.nav_label()
        };
        bar = bar.tab(label, nav_style(route == active), route.action_id());
    }
    if !narrow {
        bar = bar.tab(
            "GET STARTED",
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
            Route::Contact.action_id(),
        );
    }
    bar.block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .render(f, rows[1], cs);
}

fn short_label(route: Route) -> &'static str {
    match route {
        Route::Home => "HOME",
        Route::About => "ABOUT",
        Route::Services => "SVC",
        Route::Investments => "INV",
        Route::Contact => "CONTACT",
        Route::Projects => "PROJ",
    }
}

fn nav_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

// ── Footer ─────────────────────────────────────────────────────

struct FooterLink {
    label: &'static str,
    route: Option<Route>,
}

const fn link(label: &'static str, route: Option<Route>) -> FooterLink {
    FooterLink { label, route }
}

const FOOTER_SECTIONS: [(&str, [FooterLink; 4]); 3] = [
    (
        "COMPANY",
        [
            link("About Us", Some(Route::About)),
            link("Services", Some(Route::Services)),
            link("Investments", Some(Route::Investments)),
            link("Contact", Some(Route::Contact)),
        ],
    ),
    (
        "RESOURCES",
        [
            link("Fund Documentation", None),
            link("Investment Guidelines", None),
            link("Market Reports", None),
            link("Blog & Insights", None),
        ],
    ),
    (
        "INVESTOR RELATIONS",
        [
            link("Investor Portal", None),
            link("Performance Reports", None),
            link("Fund Updates", None),
            link("Schedule a Call", Some(Route::Contact)),
        ],
    ),
];

const LEGAL_LINKS: [&str; 5] = [
    "Privacy Policy",
    "Terms of Service",
    "Legal Disclaimer",
    "Transparency & Disclosure",
    "Do Not Sell My Personal Information",
];

const SOCIAL: [&str; 4] = ["LinkedIn", "Twitter", "Facebook", "Instagram"];

/// Append the site footer to a page body. Internal links are click targets.
pub fn push_footer(cl: &mut ClickableList) {
    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let link_style = Style::default().fg(Color::Gray);

    cl.blank();
    cl.push(Line::from(Span::styled("─".repeat(40), muted)));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" AGH ", Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  Atlas Global Holdings", heading),
        ]),
        Route::Home.action_id(),
    );
    cl.push(Line::from(Span::styled(
        " Strategic real estate investment and development in Morocco's emerging markets.",
        link_style,
    )));
    cl.push(Line::from(Span::styled(format!(" ☎ {}   ✉ {}", PHONE, EMAIL), link_style)));

    for (title, links) in &FOOTER_SECTIONS {
        cl.blank();
        cl.push(Line::from(Span::styled(format!(" {}", title), heading)));
        for l in links {
            match l.route {
                Some(route) => cl.push_clickable(
                    Line::from(Span::styled(format!("   {} →", l.label), link_style)),
                    route.action_id(),
                ),
                None => cl.push(Line::from(Span::styled(format!("   {}", l.label), muted))),
            }
        }
    }

    cl.blank();
    cl.push(Line::from(Span::styled(" Legal & Compliance", heading)));
    cl.push(Line::from(Span::styled(format!("   {}", LEGAL_LINKS.join(" · ")), muted)));

    cl.blank();
    cl.push(Line::from(Span::styled(
        format!(
            " © {} Atlas Global Holdings, Inc. All rights reserved.",
            current_year()
        ),
        link_style,
    )));
    cl.push(Line::from(Span::styled(
        " This website is for informational purposes only and does not constitute an offer to sell or a solicitation to buy any securities.",
        muted,
    )));
    cl.push(Line::from(Span::styled(format!(" {}", SOCIAL.join("  ")), muted)));
    cl.blank();
    cl.push(Line::from(vec![
        Span::styled(" Important Disclosure: ", Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
        Span::styled(
            "Past performance is not indicative of future results. All investments involve risk, including possible loss of principal. Please consult with a financial advisor before making investment decisions. AGH operates in compliance with all applicable securities laws and regulations.",
            muted,
        ),
    ]));
}

/// Section heading inside a page body.
pub fn push_heading(cl: &mut ClickableList, text: &str) {
    cl.blank();
    cl.push(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
}

/// Indented body copy.
pub fn push_text(cl: &mut ClickableList, text: &str) {
    cl.push(Line::from(Span::styled(
        format!("   {}", text),
        Style::default().fg(Color::Gray),
    )));
}

/// A bold title followed by its description.
pub fn push_card(cl: &mut ClickableList, title: &str, description: &str) {
    cl.push(Line::from(Span::styled(
        format!(" ■ {}", title),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    if !description.is_empty() {
        push_text(cl, description);
    }
}

/// A check-marked feature bullet.
pub fn push_bullet(cl: &mut ClickableList, text: &str) {
    cl.push(Line::from(vec![
        Span::styled("   ✓ ", Style::default().fg(ACCENT)),
        Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
    ]));
}

/// A numbered step.
pub fn push_step(cl: &mut ClickableList, number: usize, title: &str, description: &str) {
    cl.push(Line::from(vec![
        Span::styled(
            format!(" {:>2} ", number),
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));
    push_text(cl, description);
}

/// A call-to-action button that navigates to `route`.
pub fn push_cta(cl: &mut ClickableList, label: &str, route: Route) {
    cl.push_clickable(
        Line::from(Span::styled(
            format!(" ▶ {} → ", label),
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        route.action_id(),
    );
}
