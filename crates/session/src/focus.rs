use serde::Serialize;

use phonehub_catalog::{Catalog, Item};
use phonehub_recommend::{explain, PrimaryUse, Query, Reason};

use crate::state::SessionState;

/// The selected item, re-explained against the current query context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Focus<'a> {
    pub item: &'a Item,
    pub primary_use: PrimaryUse,
    pub budget: u32,
    pub reasons: Vec<Reason>,
}

/// Resolve the session's selection against the catalog.
///
/// Returns `None` when nothing is selected or the selected name no longer
/// exists in the catalog. The explanation uses the last query's primary use
/// and budget, or general use with [`Query::MAX_BUDGET`] when no query has
/// been made yet. Filters are not re-applied: a selection outside the current
/// results is still explained.
pub fn focus<'a>(catalog: &'a Catalog, session: &SessionState) -> Option<Focus<'a>> {
    let name = session.selected_item()?;
    let Some(item) = catalog.get(name) else {
        tracing::debug!(item = name, "selected item no longer in catalog");
        return None;
    };

    let (primary_use, budget) = match session.last_query() {
        Some(q) => (q.primary_use, q.budget),
        None => (PrimaryUse::General, Query::MAX_BUDGET),
    };

    Some(Focus {
        item,
        primary_use,
        budget,
        reasons: explain(item, primary_use, budget),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use phonehub_core::SessionId;
    use phonehub_recommend::{recommend, ReasonKind};

    fn session() -> SessionState {
        SessionState::new(SessionId::new(), Utc::now())
    }

    #[test]
    fn nothing_selected_yields_nothing() {
        let catalog = Catalog::builtin().unwrap();
        assert!(focus(&catalog, &session()).is_none());
    }

    #[test]
    fn unknown_selection_yields_nothing() {
        let catalog = Catalog::builtin().unwrap();
        let mut s = session();
        s.select_item("Nokia 3310");
        assert!(focus(&catalog, &s).is_none());
    }

    #[test]
    fn defaults_without_a_query() {
        let catalog = Catalog::builtin().unwrap();
        let mut s = session();
        s.select_item("Nothing Phone 2");

        let f = focus(&catalog, &s).unwrap();
        assert_eq!(f.item.name, "Nothing Phone 2");
        assert_eq!(f.primary_use, PrimaryUse::General);
        assert_eq!(f.budget, Query::MAX_BUDGET);
        // 599 <= 0.8 * 1500, general use has no usage line.
        assert_eq!(f.reasons[0].kind, ReasonKind::Value);
        assert_eq!(f.reasons[0].text, "Great value at $599 - well within your $1500 budget");
        assert_eq!(f.reasons[1].kind, ReasonKind::Features);
    }

    #[test]
    fn uses_last_query_context_even_outside_results() {
        let catalog = Catalog::builtin().unwrap();
        let query = Query::new(500, PrimaryUse::Photography);
        let mut s = session();
        s.remember_query(query.clone());
        s.select_item("Samsung Galaxy S24 Ultra");

        // Over budget: not among the current results.
        assert!(recommend(&catalog, &query)
            .iter()
            .all(|r| r.item.name != "Samsung Galaxy S24 Ultra"));

        let f = focus(&catalog, &s).unwrap();
        assert_eq!(f.primary_use, PrimaryUse::Photography);
        assert_eq!(f.budget, 500);
        let kinds: Vec<ReasonKind> = f.reasons.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ReasonKind::UsageFit, ReasonKind::Features]);
    }
}
