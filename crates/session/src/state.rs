use chrono::{DateTime, Utc};
use serde::Serialize;

use phonehub_core::{Entity, SessionId};
use phonehub_recommend::{Query, ScoredItem};

use crate::feedback::{Feedback, Rating};
use crate::recent::RecentlyViewed;

/// Mutable memory of one interactive session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    id: SessionId,
    started_at: DateTime<Utc>,
    recently_viewed: RecentlyViewed,
    selected_item: Option<String>,
    last_query: Option<Query>,
    feedback: Vec<Feedback>,
}

impl SessionState {
    pub fn new(id: SessionId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            started_at,
            recently_viewed: RecentlyViewed::new(),
            selected_item: None,
            last_query: None,
            feedback: Vec::new(),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn recently_viewed(&self) -> &RecentlyViewed {
        &self.recently_viewed
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_item.as_deref()
    }

    pub fn last_query(&self) -> Option<&Query> {
        self.last_query.as_ref()
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Note that `name` was shown to the user.
    pub fn record_viewed(&mut self, name: &str) {
        if self.recently_viewed.record(name) {
            tracing::debug!(session_id = %self.id, item = name, "recorded view");
        }
    }

    /// Record the first `top_n` ranked items as viewed, best first.
    ///
    /// Each insertion goes to the front, so the lowest-ranked of the batch ends
    /// up newest.
    pub fn record_surfaced(&mut self, ranked: &[ScoredItem], top_n: usize) {
        for scored in ranked.iter().take(top_n) {
            self.record_viewed(&scored.item.name);
        }
    }

    /// Keep `query` as the context for later focus explanations.
    pub fn remember_query(&mut self, query: Query) {
        self.last_query = Some(query);
    }

    /// Set the selection. There is no way to clear it short of ending the session.
    pub fn select_item(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(session_id = %self.id, item = %name, "item selected");
        self.selected_item = Some(name);
    }

    pub fn submit_feedback(&mut self, rating: Rating, comment: Option<String>, at: DateTime<Utc>) -> &Feedback {
        self.feedback.push(Feedback::new(rating, comment, at));
        tracing::info!(session_id = %self.id, rating = rating.label(), "feedback received");
        // Just pushed, so never empty.
        &self.feedback[self.feedback.len() - 1]
    }
}

impl Entity for SessionState {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonehub_catalog::Catalog;
    use phonehub_recommend::{recommend, PrimaryUse};

    fn session() -> SessionState {
        SessionState::new(SessionId::new(), Utc::now())
    }

    #[test]
    fn fresh_session_is_empty() {
        let s = session();
        assert!(s.recently_viewed().is_empty());
        assert_eq!(s.selected_item(), None);
        assert_eq!(s.last_query(), None);
        assert!(s.feedback().is_empty());
    }

    #[test]
    fn surfacing_records_top_n_in_rank_order() {
        let catalog = Catalog::builtin().unwrap();
        let ranked = recommend(&catalog, &Query::new(1500, PrimaryUse::Gaming));
        let mut s = session();

        s.record_surfaced(&ranked, 5);

        let mut expected: Vec<String> = ranked.iter().take(5).map(|r| r.item.name.clone()).collect();
        expected.reverse();
        assert_eq!(s.recently_viewed().to_vec(), expected);
    }

    #[test]
    fn surfacing_twice_does_not_reorder() {
        let catalog = Catalog::builtin().unwrap();
        let ranked = recommend(&catalog, &Query::new(1500, PrimaryUse::Gaming));
        let mut s = session();

        s.record_surfaced(&ranked, 5);
        let before = s.recently_viewed().clone();
        s.record_surfaced(&ranked, 5);
        assert_eq!(s.recently_viewed(), &before);
    }

    #[test]
    fn selection_and_query_are_remembered() {
        let mut s = session();
        s.remember_query(Query::new(900, PrimaryUse::Photography));
        s.select_item("Google Pixel 8 Pro");
        assert_eq!(s.selected_item(), Some("Google Pixel 8 Pro"));
        assert_eq!(s.last_query().unwrap().budget, 900);

        s.select_item("OnePlus 12");
        assert_eq!(s.selected_item(), Some("OnePlus 12"));
    }

    #[test]
    fn feedback_is_appended() {
        let mut s = session();
        s.submit_feedback(Rating::SomewhatHelpful, None, Utc::now());
        let fb = s.submit_feedback(Rating::ExtremelyHelpful, Some("great".into()), Utc::now());
        assert_eq!(fb.rating, Rating::ExtremelyHelpful);
        assert_eq!(s.feedback().len(), 2);
    }
}
