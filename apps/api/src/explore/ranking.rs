//! Ranker: scores the whole catalog and orders the non-zero results.
//!
//! Top-K truncation is left to the caller; the ranking itself keeps every match.

use serde::Serialize;

use crate::explore::fit_scoring::FitScorer;
use crate::models::job::JobRecord;
use crate::models::session::ObsessionWeights;

/// A job paired with its score for one ranking pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredJob<'a> {
    pub score: f64,
    pub job: &'a JobRecord,
}

/// Display-ready view of a ranked job.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJob {
    pub name: String,
    pub description: String,
    pub score: f64,
    /// `floor(score × 100)`.
    pub fit_percent: u32,
    /// Progress-bar fill, capped at 1.0.
    pub progress: f64,
    /// Alphabetical.
    pub tags: Vec<String>,
    /// Tags shared with the user, in interest order.
    pub matched: Vec<String>,
}

/// Scores every job, drops zero scores, sorts descending.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank<'a>(
    jobs: &'a [JobRecord],
    interests: &[String],
    weights: &ObsessionWeights,
    scorer: &dyn FitScorer,
) -> Vec<ScoredJob<'a>> {
    let mut scored: Vec<ScoredJob<'a>> = jobs
        .iter()
        .map(|job| ScoredJob {
            score: scorer.score(interests, &job.tags, weights),
            job,
        })
        .filter(|s| s.score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

impl ScoredJob<'_> {
    pub fn to_ranked(&self, interests: &[String]) -> RankedJob {
        RankedJob {
            name: self.job.name.clone(),
            description: self.job.description.clone(),
            score: self.score,
            fit_percent: (self.score * 100.0).floor() as u32,
            progress: self.score.min(1.0),
            tags: self.job.tags.iter().cloned().collect(),
            matched: self
                .job
                .matched_interests(interests)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Ranks and converts the first `top_k` results for display.
pub fn top_ranked(scored: &[ScoredJob<'_>], interests: &[String], top_k: usize) -> Vec<RankedJob> {
    scored
        .iter()
        .take(top_k)
        .map(|s| s.to_ranked(interests))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults::builtin_jobs;
    use crate::explore::fit_scoring::OverlapFitScorer;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn names<'a>(scored: &'a [ScoredJob<'_>]) -> Vec<&'a str> {
        scored.iter().map(|s| s.job.name.as_str()).collect()
    }

    #[test]
    fn test_sports_journalist_above_product_manager() {
        let jobs = builtin_jobs();
        let interests = strings(&["sport", "tecnologia", "scrittura"]);
        let scored = rank(&jobs, &interests, &ObsessionWeights::new(), &OverlapFitScorer::default());

        let ranked = names(&scored);
        let journalist = ranked.iter().position(|n| *n == "Sports Journalist").unwrap();
        let pm = ranked
            .iter()
            .position(|n| *n == "Product Manager (Sport-Tech)")
            .unwrap();
        assert!(journalist < pm, "order was {ranked:?}");
        assert_eq!(ranked[0], "Sports Journalist");
    }

    #[test]
    fn test_sorted_descending_without_zero_scores() {
        let jobs = builtin_jobs();
        let interests = strings(&["sport", "tecnologia", "scrittura"]);
        let scored = rank(&jobs, &interests, &ObsessionWeights::new(), &OverlapFitScorer::default());

        assert!(scored.iter().all(|s| s.score > 0.0));
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
        // Every built-in job shares at least one of these tags.
        assert_eq!(scored.len(), jobs.len());
    }

    #[test]
    fn test_unknown_interest_ranks_nothing() {
        let jobs = builtin_jobs();
        let scored = rank(
            &jobs,
            &strings(&["musica"]),
            &ObsessionWeights::new(),
            &OverlapFitScorer::default(),
        );
        assert!(scored.is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let jobs = vec![
            JobRecord::new("First", &["sport", "media"], ""),
            JobRecord::new("Second", &["sport", "media"], ""),
            JobRecord::new("Other", &["cucina"], ""),
        ];
        let scored = rank(
            &jobs,
            &strings(&["sport"]),
            &ObsessionWeights::new(),
            &OverlapFitScorer::default(),
        );
        assert_eq!(names(&scored), vec!["First", "Second"]);
    }

    #[test]
    fn test_obsession_weight_can_reorder() {
        let jobs = vec![
            JobRecord::new("Sporty", &["sport", "media"], ""),
            JobRecord::new("Writer", &["scrittura", "design"], ""),
        ];
        let interests = strings(&["sport", "scrittura"]);
        let scorer = OverlapFitScorer::default();

        let neutral = rank(&jobs, &interests, &ObsessionWeights::new(), &scorer);
        assert_eq!(names(&neutral), vec!["Sporty", "Writer"]);

        let weights = ObsessionWeights::from([("sport".to_string(), 3.0)]);
        let weighted = rank(&jobs, &interests, &weights, &scorer);
        assert_eq!(names(&weighted), vec!["Writer", "Sporty"]);
    }

    #[test]
    fn test_ranked_view_fields() {
        let jobs = builtin_jobs();
        let interests = strings(&["sport", "tecnologia", "scrittura"]);
        let scored = rank(&jobs, &interests, &ObsessionWeights::new(), &OverlapFitScorer::default());
        let view = scored[0].to_ranked(&interests);

        assert_eq!(view.name, "Sports Journalist");
        assert_eq!(view.fit_percent, 66);
        assert_eq!(view.tags, strings(&["media", "scrittura", "sport"]));
        assert_eq!(view.matched, strings(&["sport", "scrittura"]));
        assert!(view.progress <= 1.0);
    }

    #[test]
    fn test_top_ranked_truncates() {
        let jobs = builtin_jobs();
        let interests = strings(&["sport", "tecnologia", "scrittura"]);
        let scored = rank(&jobs, &interests, &ObsessionWeights::new(), &OverlapFitScorer::default());
        assert_eq!(top_ranked(&scored, &interests, 3).len(), 3);
        assert_eq!(top_ranked(&scored, &interests, 100).len(), scored.len());
    }
}
