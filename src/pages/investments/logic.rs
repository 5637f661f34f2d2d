//! Pure filtering over the pipeline.

use super::catalog::Opportunity;
use super::state::FilterSelection;

/// The visible subset for `selection`, in catalog order. Never fails: a
/// selection nothing matches yields an empty list.
pub fn filter(catalog: &[Opportunity], selection: FilterSelection) -> Vec<&Opportunity> {
    catalog
        .iter()
        .filter(|o| selection.matches(o.status))
        .collect()
}

/// Number of listings a filter button would show.
pub fn count(catalog: &[Opportunity], selection: FilterSelection) -> usize {
    catalog.iter().filter(|o| selection.matches(o.status)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::investments::catalog::{Status, CATALOG};

    #[test]
    fn all_returns_catalog_unchanged() {
        let shown = filter(CATALOG, FilterSelection::All);
        assert_eq!(shown.len(), CATALOG.len());
        for (a, b) in shown.iter().zip(CATALOG.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn counts_per_selection() {
        assert_eq!(filter(CATALOG, FilterSelection::Vetted).len(), 3);
        assert_eq!(filter(CATALOG, FilterSelection::Active).len(), 2);
        assert_eq!(filter(CATALOG, FilterSelection::Featured).len(), 1);
        assert_eq!(filter(CATALOG, FilterSelection::All).len(), 6);
        assert_eq!(count(CATALOG, FilterSelection::Vetted), 3);
    }

    #[test]
    fn vetted_keeps_catalog_order() {
        let names: Vec<_> = filter(CATALOG, FilterSelection::Vetted)
            .iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(
            names,
            vec!["Beni Makada Tower", "400 Rue de Fès", "Casablanca Medical Plaza"]
        );
    }

    #[test]
    fn unmatched_selection_is_empty_not_error() {
        let only_active: Vec<Opportunity> = CATALOG
            .iter()
            .filter(|o| o.status == Status::Active)
            .cloned()
            .collect();
        assert!(filter(&only_active, FilterSelection::Featured).is_empty());
        assert!(filter(&[], FilterSelection::All).is_empty());
    }
}
