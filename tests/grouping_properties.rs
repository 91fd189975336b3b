use proptest::prelude::*;
use serde_json::{json, Value};
use trajectory_viz::group_frames;

fn frame(agent: &str, x: f64, y: f64) -> Value {
    let mut obj = serde_json::Map::new();
    obj.insert(agent.to_string(), json!({ "x": x, "y": y }));
    Value::Object(obj)
}

fn samples() -> impl Strategy<Value = Vec<(String, f64, f64)>> {
    prop::collection::vec(
        ("[a-e]", -1.0e6f64..1.0e6, -1.0e6f64..1.0e6),
        0..200,
    )
}

/// Agents in first-seen order, each with its positions in scan order.
fn reference_model(samples: &[(String, f64, f64)]) -> Vec<(String, Vec<f64>, Vec<f64>)> {
    let mut model: Vec<(String, Vec<f64>, Vec<f64>)> = Vec::new();
    for (agent, x, y) in samples {
        match model.iter_mut().find(|(id, _, _)| id == agent) {
            Some((_, xs, ys)) => {
                xs.push(*x);
                ys.push(*y);
            }
            None => model.push((agent.clone(), vec![*x], vec![*y])),
        }
    }
    model
}

proptest! {
    #[test]
    fn series_count_matches_distinct_agents(samples in samples()) {
        let frames: Vec<Value> = samples.iter().map(|(a, x, y)| frame(a, *x, *y)).collect();
        let plot = group_frames(&frames).unwrap();

        let mut distinct: Vec<&str> = samples.iter().map(|(a, _, _)| a.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(plot.len(), distinct.len());
        prop_assert_eq!(plot.total_points(), samples.len());
    }

    #[test]
    fn series_follow_first_seen_order_and_occurrences(samples in samples()) {
        let frames: Vec<Value> = samples.iter().map(|(a, x, y)| frame(a, *x, *y)).collect();
        let plot = group_frames(&frames).unwrap();
        let model = reference_model(&samples);

        let expected_ids: Vec<&str> = model.iter().map(|(id, _, _)| id.as_str()).collect();
        prop_assert_eq!(plot.agent_ids(), expected_ids);

        for (series, (_, xs, ys)) in plot.iter().zip(&model) {
            prop_assert_eq!(series.len(), xs.len());
            prop_assert_eq!(series.x(), xs.as_slice());
            prop_assert_eq!(series.y(), ys.as_slice());
        }
    }

    #[test]
    fn grouping_twice_gives_identical_output(samples in samples()) {
        let frames: Vec<Value> = samples.iter().map(|(a, x, y)| frame(a, *x, *y)).collect();
        let first = group_frames(&frames).unwrap();
        let second = group_frames(&frames).unwrap();
        prop_assert_eq!(first.to_trace_json().unwrap(), second.to_trace_json().unwrap());
        prop_assert_eq!(first, second);
    }
}
