//! Monte Carlo Tree Search with UCT selection.
//!
//! The tree lives in an arena: nodes address each other by index, so the
//! parent/child links never turn into shared-ownership cycles. One arena is
//! built per top-level [`search`] call and dropped with it.

use std::cmp::Ordering;

use crate::Point;
use crate::board::Board;
use crate::error::GoError;
use crate::stone::Stone;

/// Exploration weight `C` in the UCT formula.
pub const EXPLORATION_CONSTANT: f64 = 1.5;
/// Simulation count used by [`search_default`].
pub const DEFAULT_SIMULATIONS: u32 = 100;
/// Rollouts stop after this many placements even without two passes.
pub const MAX_ROLLOUT_DEPTH: u32 = 50;

pub type NodeId = usize;

struct Node {
    visits: u32,
    wins: u32,
    /// The side to move in the position this node stands for.
    to_play: Stone,
    parent: Option<NodeId>,
    /// Legal moves not yet expanded into children.
    untried: Vec<Point>,
    children: Vec<(Point, NodeId)>,
}

struct SearchTree {
    nodes: Vec<Node>,
}

const ROOT: NodeId = 0;

impl SearchTree {
    fn new(to_play: Stone, untried: Vec<Point>) -> Self {
        SearchTree {
            nodes: vec![Node {
                visits: 0,
                wins: 0,
                to_play,
                parent: None,
                untried,
                children: Vec::new(),
            }],
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    fn add_child(
        &mut self,
        parent: NodeId,
        point: Point,
        to_play: Stone,
        untried: Vec<Point>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            visits: 0,
            wins: 0,
            to_play,
            parent: Some(parent),
            untried,
            children: Vec::new(),
        });
        self.nodes[parent].children.push((point, id));
        id
    }

    /// UCT selection score of a child under a parent with `parent_visits`
    /// visits. An unvisited child scores infinite, so every child is tried
    /// once before any sibling is revisited.
    fn uct_score(&self, id: NodeId, parent_visits: u32) -> f64 {
        let node = self.node(id);
        if node.visits == 0 {
            return f64::INFINITY;
        }
        let exploitation = node.wins as f64 / node.visits as f64;
        let exploration = EXPLORATION_CONSTANT
            * ((parent_visits.max(1) as f64).ln() / node.visits as f64).sqrt();
        exploitation + exploration
    }

    fn best_uct_child(&self, id: NodeId) -> Option<(Point, NodeId)> {
        let parent_visits = self.node(id).visits;
        self.node(id)
            .children
            .iter()
            .copied()
            .max_by(|&(_, a), &(_, b)| {
                self.uct_score(a, parent_visits)
                    .partial_cmp(&self.uct_score(b, parent_visits))
                    .unwrap_or(Ordering::Equal)
            })
    }

    /// The root child with the highest visit count (robust child); the
    /// earliest-expanded child wins ties.
    fn robust_child(&self) -> Option<(Point, u32)> {
        let mut best: Option<(Point, u32)> = None;
        for &(point, id) in &self.node(ROOT).children {
            let visits = self.node(id).visits;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((point, visits)),
            }
        }
        best
    }
}

/// Run UCT search from `board` for the given root player and return the move
/// with the most visits, or `None` when the root player has no legal move
/// (the caller should pass).
///
/// The board itself is never mutated; each simulation plays on its own
/// clone. The RNG drives expansion and rollout sampling only, so a seeded
/// [`fastrand::Rng`] makes the whole search reproducible.
pub fn search(
    board: &Board,
    root_stone: Stone,
    simulations: u32,
    rng: &mut fastrand::Rng,
) -> Result<Option<Point>, GoError> {
    let tree = run(board, root_stone, simulations, rng)?;
    let best = tree.robust_child();
    if let Some((point, visits)) = best {
        tracing::debug!(
            "mcts picked {:?} for {} ({}/{} visits)",
            point,
            root_stone,
            visits,
            simulations
        );
    }
    Ok(best.map(|(point, _)| point))
}

/// [`search`] with [`DEFAULT_SIMULATIONS`] and a fresh RNG.
pub fn search_default(board: &Board, root_stone: Stone) -> Result<Option<Point>, GoError> {
    search(board, root_stone, DEFAULT_SIMULATIONS, &mut fastrand::Rng::new())
}

fn run(
    board: &Board,
    root_stone: Stone,
    simulations: u32,
    rng: &mut fastrand::Rng,
) -> Result<SearchTree, GoError> {
    let mut tree = SearchTree::new(root_stone, board.legal_moves(root_stone));

    for _ in 0..simulations {
        let mut working = board.clone();
        let mut node = ROOT;

        // 1) Selection: descend through fully-expanded nodes by UCT,
        // replaying each edge with the color of the node it leaves.
        while tree.node(node).untried.is_empty() && !working.is_over() {
            let Some((point, child)) = tree.best_uct_child(node) else {
                break;
            };
            working.place(point, tree.node(node).to_play)?;
            node = child;
        }

        // 2) Expansion: grow one child from a uniformly random untried move.
        if !working.is_over() && !tree.node(node).untried.is_empty() {
            let pick = rng.usize(..tree.node(node).untried.len());
            let point = tree.nodes[node].untried.swap_remove(pick);
            let mover = tree.node(node).to_play;
            working.place(point, mover)?;

            let to_play = mover.opp();
            let untried = working.legal_moves(to_play);
            node = tree.add_child(node, point, to_play, untried);
        }

        // 3) Simulation: random legal moves (passing when there are none)
        // until the game ends or the rollout depth bound is hit.
        let mut mover = tree.node(node).to_play;
        let mut depth = 0;
        while !working.is_over() && depth < MAX_ROLLOUT_DEPTH {
            let moves = working.legal_moves(mover);
            if moves.is_empty() {
                working.pass()?;
                mover = mover.opp();
                continue;
            }
            let point = moves[rng.usize(..moves.len())];
            working.place(point, mover)?;
            mover = mover.opp();
            depth += 1;
        }

        // 4) Backpropagation: judge the rollout from the root player's
        // perspective and credit every node on the expansion path.
        let (black_score, white_score) = working.calculate_score();
        let root_won = match root_stone {
            Stone::Black => black_score > white_score,
            Stone::White => white_score > black_score,
        };

        let mut cursor = Some(node);
        while let Some(id) = cursor {
            tree.nodes[id].visits += 1;
            if root_won {
                tree.nodes[id].wins += 1;
            }
            cursor = tree.nodes[id].parent;
        }
    }

    Ok(tree)
}
