//! Interest ↔ job graph data for the visualization layer. No layout is computed here.

use serde::Serialize;

use crate::explore::ranking::ScoredJob;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Interest,
    Job,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    /// `interest:<name>` or `job:<name>`.
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Score of the target job.
    pub weight: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InterestGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

fn interest_id(interest: &str) -> String {
    format!("interest:{interest}")
}

fn job_id(name: &str) -> String {
    format!("job:{name}")
}

/// One node per interest (even unmatched ones), one per ranked job, and an edge
/// for every interest a job's tags share.
pub fn build_graph(interests: &[String], ranked: &[ScoredJob<'_>]) -> InterestGraph {
    let mut nodes: Vec<GraphNode> = interests
        .iter()
        .map(|interest| GraphNode {
            id: interest_id(interest),
            label: interest.clone(),
            kind: NodeKind::Interest,
        })
        .collect();

    let mut edges = Vec::new();
    for scored in ranked {
        let target = job_id(&scored.job.name);
        nodes.push(GraphNode {
            id: target.clone(),
            label: scored.job.name.clone(),
            kind: NodeKind::Job,
        });
        for interest in scored.job.matched_interests(interests) {
            edges.push(GraphEdge {
                source: interest_id(interest),
                target: target.clone(),
                weight: scored.score,
            });
        }
    }

    InterestGraph { nodes, edges }
}
