use std::sync::Arc;

use phonehub_catalog::{Catalog, CatalogError};
use phonehub_core::SessionId;
use phonehub_recommend::{recommend, Query, ScoredItem};
use phonehub_session::{InMemorySessionStore, SessionState, SessionStore};

use crate::config::ApiConfig;

/// Everything a handler needs: the catalog (read-only after startup), the
/// session registry, and how many results to explain per request.
pub struct AppServices {
    catalog: Arc<Catalog>,
    sessions: InMemorySessionStore,
    top_n: usize,
}

impl AppServices {
    pub fn new(catalog: Catalog, top_n: usize) -> Self {
        Self::with_sessions(catalog, top_n, InMemorySessionStore::new())
    }

    pub fn with_sessions(catalog: Catalog, top_n: usize, sessions: InMemorySessionStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions,
            top_n,
        }
    }

    /// Load the configured catalog; a bad catalog file is a startup error.
    pub fn from_config(config: &ApiConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => {
                let catalog = Catalog::builtin()?;
                tracing::info!(items = catalog.len(), "built-in catalog loaded");
                catalog
            }
        };
        Ok(Self::with_sessions(
            catalog,
            config.top_n,
            InMemorySessionStore::with_max_sessions(config.max_sessions),
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sessions(&self) -> &InMemorySessionStore {
        &self.sessions
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank the catalog for a new query and store it in the session.
    ///
    /// The query becomes the session's last query and the first `top_n`
    /// results are recorded as viewed. `None` when the session is unknown.
    pub fn run_query(&self, session_id: SessionId, query: Query) -> Option<Vec<ScoredItem>> {
        let ranked = recommend(&self.catalog, &query);
        let top_n = self.top_n;
        self.sessions.update(session_id, move |session| {
            session.remember_query(query);
            session.record_surfaced(&ranked, top_n);
            ranked
        })
    }

    /// Current ranking for a session: its last query, or the default query
    /// when none has been made.
    pub fn current_ranking(&self, session: &SessionState) -> Vec<ScoredItem> {
        let default_query = Query::default();
        let query = session.last_query().unwrap_or(&default_query);
        recommend(&self.catalog, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonehub_core::Entity;
    use phonehub_recommend::PrimaryUse;

    #[test]
    fn run_query_records_top_results() {
        let services = AppServices::new(Catalog::builtin().unwrap(), 2);
        let session = services.sessions().create();

        let ranked = services
            .run_query(*session.id(), Query::new(1500, PrimaryUse::Gaming))
            .unwrap();

        let stored = services.sessions().get(*session.id()).unwrap();
        assert_eq!(stored.recently_viewed().len(), 2);
        assert_eq!(
            stored.recently_viewed().to_vec(),
            vec![ranked[1].item.name.clone(), ranked[0].item.name.clone()]
        );
        assert_eq!(stored.last_query().map(|q| q.budget), Some(1500));
    }

    #[test]
    fn run_query_on_unknown_session() {
        let services = AppServices::new(Catalog::builtin().unwrap(), 5);
        assert!(services.run_query(SessionId::new(), Query::default()).is_none());
    }

    #[test]
    fn current_ranking_falls_back_to_default_query() {
        let services = AppServices::new(Catalog::builtin().unwrap(), 5);
        let session = services.sessions().create();
        let ranked = services.current_ranking(&session);
        assert!(ranked.iter().all(|s| s.item.price <= Query::DEFAULT_BUDGET));
    }
}
