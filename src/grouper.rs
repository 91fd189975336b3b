//! Groups observation frames into one coordinate series per agent.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::TrajectoryError;
use crate::frame::{decode_frames, Observation};

/// One agent's trajectory as index-aligned x and y sequences.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgentSeries {
    #[serde(skip)]
    agent_id: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl AgentSeries {
    fn new(agent_id: String) -> Self {
        Self { agent_id, x: Vec::new(), y: Vec::new() }
    }

    fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }
}

/// Series in the order their agents were first seen.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlotInput {
    series: Vec<AgentSeries>,
}

impl PlotInput {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentSeries> {
        self.series.iter()
    }

    pub fn agent_ids(&self) -> Vec<&str> {
        self.series.iter().map(AgentSeries::agent_id).collect()
    }

    pub fn series(&self, agent_id: &str) -> Option<&AgentSeries> {
        self.series.iter().find(|s| s.agent_id == agent_id)
    }

    pub fn total_points(&self) -> usize {
        self.series.iter().map(AgentSeries::len).sum()
    }

    /// `[min, max]` corners over every point, or `None` when there are no points.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut pts = self.series.iter().flat_map(|s| s.x.iter().zip(&s.y));
        let (&x0, &y0) = pts.next()?;
        let init = ([x0, y0], [x0, y0]);
        Some(pts.fold(init, |(min, max), (&x, &y)| {
            ([min[0].min(x), min[1].min(y)], [max[0].max(x), max[1].max(y)])
        }))
    }

    /// The `[{x: [..], y: [..]}, ..]` trace array a charting library takes.
    pub fn to_trace_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<'a> IntoIterator for &'a PlotInput {
    type Item = &'a AgentSeries;
    type IntoIter = std::slice::Iter<'a, AgentSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

pub fn group_observations<I>(observations: I) -> PlotInput
where
    I: IntoIterator<Item = Observation>,
{
    let mut by_agent: IndexMap<String, AgentSeries> = IndexMap::new();
    for obs in observations {
        by_agent
            .entry(obs.agent_id)
            .or_insert_with_key(|id| AgentSeries::new(id.clone()))
            .push(obs.x, obs.y);
    }
    PlotInput { series: by_agent.into_values().collect() }
}

/// Decodes and groups wire frames. Any malformed frame fails the whole call.
pub fn group_frames(frames: &[Value]) -> Result<PlotInput, TrajectoryError> {
    let observations = decode_frames(frames)?;
    Ok(group_observations(observations))
}
