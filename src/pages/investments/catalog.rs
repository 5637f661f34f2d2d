//! The investment pipeline, fixed at build time.

use ratzilla::ratatui::style::Color;

/// Pipeline stage of an opportunity. Used for the card label and the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Vetted,
    Active,
    Featured,
}

impl Status {
    #[cfg(test)]
    pub const ALL: [Status; 3] = [Status::Vetted, Status::Active, Status::Featured];

    pub fn label(self) -> &'static str {
        match self {
            Status::Vetted => "Ready for Investment",
            Status::Active => "Due Diligence",
            Status::Featured => "Capital Raise",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Status::Vetted => crate::chrome::ACCENT,
            Status::Active => Color::Blue,
            Status::Featured => Color::Yellow,
        }
    }
}

/// One listing. Every figure is display text; nothing is computed from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Opportunity {
    pub name: &'static str,
    pub location: &'static str,
    pub property_type: &'static str,
    pub sellable_size: &'static str,
    pub price_per_area: &'static str,
    pub total_price: &'static str,
    pub expected_return: &'static str,
    pub status: Status,
    pub features: &'static [&'static str],
}

pub static CATALOG: &[Opportunity] = &[
    Opportunity {
        name: "Beni Makada Tower",
        location: "Tangier, Morocco",
        property_type: "Class-A Luxury Studios",
        sellable_size: "2,257 m²",
        price_per_area: "$1,716",
        total_price: "$3,875,000",
        expected_return: "55-65%",
        status: Status::Vetted,
        features: &[
            "Prime Tangier location in prestigious neighborhood",
            "Fast returns through accelerated sales cycles",
            "High profit margins delivering exceptional ROI",
            "2 underground garages + ground floor commercial + 5 residential floors",
        ],
    },
    Opportunity {
        name: "400 Rue de Fès",
        location: "Tangier, Morocco",
        property_type: "Mixed-Use Development",
        sellable_size: "2,920 m²",
        price_per_area: "$1,952",
        total_price: "$5,700,000",
        expected_return: "35-45%",
        status: Status::Vetted,
        features: &[
            "Strategic location in Tangier's growth corridor",
            "Strong local demand and market velocity",
            "Clear zoning and regulatory approval pathway",
        ],
    },
    Opportunity {
        name: "Anfa Heights",
        location: "Morocco",
        property_type: "Residential Development",
        sellable_size: "1,800 m²",
        price_per_area: "$1,800",
        total_price: "$3,240,000",
        expected_return: "25%",
        status: Status::Active,
        features: &[
            "Currently in due diligence phase",
            "Strong fundamentals and market positioning",
            "Attractive risk-adjusted returns",
        ],
    },
    Opportunity {
        name: "Vista de Baskoura",
        location: "Morocco",
        property_type: "Commercial & Residential",
        sellable_size: "4,200 m²",
        price_per_area: "$1,750",
        total_price: "$7,345,500",
        expected_return: "32%",
        status: Status::Active,
        features: &[
            "Large-scale development opportunity",
            "Mixed-use positioning for diversified revenue",
            "Active due diligence in progress",
        ],
    },
    Opportunity {
        name: "Integrated Lifestyle Destination",
        location: "Tangier, Morocco",
        property_type: "Mixed-Use Resort Development",
        sellable_size: "Multi-component",
        price_per_area: "N/A",
        total_price: "$130.3M",
        expected_return: "TBD",
        status: Status::Featured,
        features: &[
            "215 residences & villas with sea views (>90 pre-sold)",
            "5-star hotel (150 keys) with international operator LOI",
            "Tangier's only ice rink & bowling leisure center",
            "Health & wellness center with medical tourism focus",
            "Premium promenade with boutiques & restaurants",
        ],
    },
    Opportunity {
        name: "Casablanca Medical Plaza",
        location: "Casablanca, Morocco",
        property_type: "Healthcare Facility",
        sellable_size: "3,100 m²",
        price_per_area: "$1,650",
        total_price: "$5,115,000",
        expected_return: "28-34%",
        status: Status::Vetted,
        features: &[
            "Outpatient clinics anchored by a private hospital group",
            "Located in Casablanca's expanding medical district",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_listings() {
        assert_eq!(CATALOG.len(), 6);
    }

    #[test]
    fn status_mix() {
        let count = |s: Status| CATALOG.iter().filter(|o| o.status == s).count();
        assert_eq!(count(Status::Vetted), 3);
        assert_eq!(count(Status::Active), 2);
        assert_eq!(count(Status::Featured), 1);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
