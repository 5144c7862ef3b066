//! Bidirectional meeting-point search.
//!
//! Two searches run in alternation over the same [`CityGraph`]: the
//! forward side is rooted at the origin and guided towards the
//! destination, the backward side is rooted at the destination and
//! guided towards the origin. The meeting point is the city where the
//! two search trees join.
//!
//! Both A* and Greedy Best-First share the skeleton below. They differ
//! in how frontier nodes are scored and in when the search stops:
//!
//! * A* scores `g + h`. Every city reached by both sides is a meeting
//!   candidate; the search stops once either frontier cannot produce a
//!   cheaper one. With an admissible heuristic the result is optimal.
//! * Greedy scores `h` alone and stops at the first popped city the
//!   other side has already reached.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

use crate::city::City;
use crate::errors::SearchFailure;
use crate::graph::CityGraph;
use crate::heuristics::Heuristic;
use crate::router::engine::Algorithm;

/// Frontier entry.
#[derive(Debug)]
struct SearchNode<'g> {
    index: NodeIndex,
    name: &'g str,
    cost: OrderedFloat<f64>,  // Cost from the root of the side
    score: OrderedFloat<f64>, // Priority, see `MeetingSearch::node`
}

// `BinaryHeap` is a max-heap: the lowest score must compare greatest.
// Ties go to the lower cost, then to the city name.
impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.name.cmp(self.name))
    }
}
impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for SearchNode<'_> {}

/// One direction of the search.
struct Side<'g> {
    /// City the heuristic aims at: the root of the other side.
    target: &'g City,
    open: BinaryHeap<SearchNode<'g>>,
    /// (predecessor, best known cost from the root) of every city this
    /// side has reached. The root has no predecessor.
    reached: HashMap<NodeIndex, (Option<NodeIndex>, f64)>,
}

impl<'g> Side<'g> {
    fn cost(&self, index: NodeIndex) -> Option<f64> {
        self.reached.get(&index).map(|&(_, cost)| cost)
    }

    fn min_score(&self) -> OrderedFloat<f64> {
        self.open
            .peek()
            .map(|node| node.score)
            .unwrap_or(OrderedFloat(f64::INFINITY))
    }

    /// Follows predecessors from `from` back to the root.
    ///
    /// Costs only ever strictly improve, so the predecessors never form a
    /// cycle and a chain visits each city at most once.
    fn chain(&self, from: NodeIndex, max_len: usize) -> Vec<NodeIndex> {
        let mut chain = vec![from];
        let mut current = from;
        while let Some(&(Some(predecessor), _)) = self.reached.get(&current) {
            debug_assert!(chain.len() < max_len, "predecessor cycle at {:?}", current);
            chain.push(predecessor);
            current = predecessor;
        }
        chain
    }
}

/// A city reached by both sides.
#[derive(Debug, Clone, Copy)]
struct Candidate<'g> {
    index: NodeIndex,
    name: &'g str,
    forward_cost: f64,
    backward_cost: f64,
}

impl<'g> Candidate<'g> {
    fn total(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.forward_cost + self.backward_cost)
    }

    /// Cheapest first, then the fairer split, then by name.
    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>, &'g str) {
        (
            self.total(),
            OrderedFloat(self.forward_cost.max(self.backward_cost)),
            self.name,
        )
    }
}

/// Counters reported with every search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Search nodes created or updated, roots included.
    pub nodes_generated: usize,
    /// Frontier pops that led to neighbor relaxation.
    pub nodes_expanded: usize,
}

/// Where the two sides met and how each person gets there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Meeting {
    pub meeting_point: NodeIndex,
    /// Origin first, meeting point last.
    pub origin_leg: Vec<NodeIndex>,
    /// Meeting point first, destination last.
    pub destination_leg: Vec<NodeIndex>,
}

#[derive(Debug)]
pub(crate) struct Outcome {
    pub meeting: Result<Meeting, SearchFailure>,
    pub stats: SearchStats,
}

/// Runs the meeting-point search between two cities of `graph`.
pub(crate) fn meet(
    graph: &CityGraph,
    origin: NodeIndex,
    destination: NodeIndex,
    algorithm: Algorithm,
    heuristic: Heuristic,
    max_expansions: usize,
) -> Outcome {
    MeetingSearch {
        graph,
        algorithm,
        heuristic,
        max_expansions,
        stats: SearchStats::default(),
        best: None,
    }
    .run(origin, destination)
}

struct MeetingSearch<'g> {
    graph: &'g CityGraph,
    algorithm: Algorithm,
    heuristic: Heuristic,
    max_expansions: usize,
    stats: SearchStats,
    best: Option<Candidate<'g>>,
}

impl<'g> MeetingSearch<'g> {
    fn run(mut self, origin: NodeIndex, destination: NodeIndex) -> Outcome {
        let mut forward = self.new_side(origin, destination);
        let mut backward = self.new_side(destination, origin);
        if origin == destination {
            self.offer(origin, 0.0, 0.0);
        }

        let mut forward_turn = true;
        let meeting = loop {
            let step = if forward_turn {
                self.step(&mut forward, &backward, true)
            } else {
                self.step(&mut backward, &forward, false)
            };
            if let Some(done) = step {
                break done;
            }
            forward_turn = !forward_turn;
        };

        let max_len = self.graph.city_count();
        let meeting = meeting.map(|index| {
            let mut origin_leg = forward.chain(index, max_len);
            origin_leg.reverse();
            Meeting {
                meeting_point: index,
                origin_leg,
                destination_leg: backward.chain(index, max_len),
            }
        });
        Outcome {
            meeting,
            stats: self.stats,
        }
    }

    fn new_side(&mut self, root: NodeIndex, target: NodeIndex) -> Side<'g> {
        let target = self.graph.city_at(target);
        let mut side = Side {
            target,
            open: BinaryHeap::new(),
            reached: HashMap::new(),
        };
        side.reached.insert(root, (None, 0.0));
        side.open.push(self.node(root, 0.0, target));
        self.stats.nodes_generated += 1;
        side
    }

    fn node(&self, index: NodeIndex, cost: f64, target: &City) -> SearchNode<'g> {
        let city = self.graph.city_at(index);
        let estimate = self.heuristic.estimate(city, target);
        let score = match self.algorithm {
            Algorithm::AStar => cost + estimate,
            Algorithm::GreedyBestFirst => estimate,
        };
        SearchNode {
            index,
            name: city.name.as_str(),
            cost: OrderedFloat(cost),
            score: OrderedFloat(score),
        }
    }

    /// Records a city reached by both sides if it beats the best meeting
    /// candidate so far.
    fn offer(&mut self, index: NodeIndex, forward_cost: f64, backward_cost: f64) {
        let candidate = Candidate {
            index,
            name: self.graph.city_at(index).name.as_str(),
            forward_cost,
            backward_cost,
        };
        if self.best.map_or(true, |best| candidate.key() < best.key()) {
            debug!(
                "meeting candidate {}: {:.1} km + {:.1} km",
                candidate.name, forward_cost, backward_cost
            );
            self.best = Some(candidate);
        }
    }

    /// Expands one node of `active`. Returns `Some` once the search is
    /// over.
    fn step(
        &mut self,
        active: &mut Side<'g>,
        passive: &Side<'g>,
        active_is_forward: bool,
    ) -> Option<Result<NodeIndex, SearchFailure>> {
        let graph = self.graph;

        if let (Algorithm::AStar, Some(best)) = (self.algorithm, self.best) {
            if active.min_score() >= best.total() || passive.min_score() >= best.total() {
                return Some(Ok(best.index));
            }
        }

        let node = loop {
            let node = match active.open.pop() {
                Some(node) => node,
                None => {
                    return Some(match (self.algorithm, self.best) {
                        (Algorithm::AStar, Some(best)) => Ok(best.index),
                        _ => Err(SearchFailure::Disconnected),
                    });
                }
            };
            // A cheaper path to this city was found after the entry was pushed.
            if active.cost(node.index).is_some_and(|known| node.cost.into_inner() > known) {
                continue;
            }
            break node;
        };

        if let Algorithm::GreedyBestFirst = self.algorithm {
            if passive.reached.contains_key(&node.index) {
                return Some(Ok(node.index));
            }
        }

        if self.stats.nodes_expanded >= self.max_expansions {
            return Some(Err(SearchFailure::Exhausted {
                limit: self.max_expansions,
            }));
        }
        self.stats.nodes_expanded += 1;

        let cost = node.cost.into_inner();
        for neighbor in graph.neighbor_indices(node.index) {
            let new_cost = cost + graph.cost_between(node.index, neighbor);
            if active.cost(neighbor).is_some_and(|known| new_cost >= known) {
                continue;
            }
            active.reached.insert(neighbor, (Some(node.index), new_cost));
            active.open.push(self.node(neighbor, new_cost, active.target));
            self.stats.nodes_generated += 1;

            if let Some(other_cost) = passive.cost(neighbor) {
                if active_is_forward {
                    self.offer(neighbor, new_cost, other_cost);
                } else {
                    self.offer(neighbor, other_cost, new_cost);
                }
            }
        }
        None
    }
}
