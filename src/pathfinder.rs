//! Weighted best-first search over a flat grid of traversal costs.
//!
//! [`Pathfinder`] owns three cell-indexed arrays (cost, predecessor,
//! distance) plus a reusable [`BinaryHeap`] open set, and exposes two kinds
//! of search - [`Pathfinder::flood_fill`] from one or more sources with no
//! target, and [`Pathfinder::find_path`] from one or more sources toward a
//! single target - plus [`Pathfinder::get_path`] to walk the resulting
//! predecessor field back into a turn-compressed waypoint list.

use std::cmp::Ordering;
use std::f32::consts::SQRT_2;

use glam::IVec2;
use tracing::{debug, debug_span, trace, warn};

use crate::error::GridError;
use crate::heap::{BinaryHeap, HeapComparator};

/// N, S, E, W, NE, NW, SE, SW as `(dx, dy, is_diagonal)`. This order is part
/// of the contract: it decides which of several equal-cost paths wins a
/// tie-break, so reordering it changes observable results.
const NEIGHBOR_OFFSETS: [(i32, i32, bool); 8] = [
    (0, -1, false),
    (0, 1, false),
    (1, 0, false),
    (-1, 0, false),
    (1, -1, true),
    (-1, -1, true),
    (1, 1, true),
    (-1, 1, true),
];

/// A tentative visit record sitting in the heap. May be superseded by a
/// better record for the same cell and discarded when popped (a "stale
/// entry") - this is how the search avoids a decrease-key operation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrontierNode {
    x: u16,
    y: u16,
    parent: i32,
    distance: f32,
}

impl FrontierNode {
    fn flat_index(&self, width: usize) -> usize {
        self.y as usize * width + self.x as usize
    }
}

/// Orders frontier nodes by `distance_travelled + squared_euclidean(node,
/// target)`, ascending - the head of the heap is always the node minimizing
/// that sum. The target is mutable so the same heap can be re-targeted
/// between searches without reallocating.
#[derive(Debug)]
struct FrontierComparator {
    target_x: i32,
    target_y: i32,
}

impl FrontierComparator {
    fn priority(&self, node: &FrontierNode) -> f32 {
        let dx = (node.x as i32 - self.target_x) as f32;
        let dy = (node.y as i32 - self.target_y) as f32;
        node.distance + dx * dx + dy * dy
    }
}

impl HeapComparator<FrontierNode> for FrontierComparator {
    fn compare(&self, a: &FrontierNode, b: &FrontierNode) -> Ordering {
        // Lower priority should sit above higher priority, so the comparison
        // is reversed relative to a typical max-heap.
        self.priority(b)
            .partial_cmp(&self.priority(a))
            .unwrap_or(Ordering::Equal)
    }
}

/// Runs flood fill and target searches over a fixed-size grid of traversal
/// costs.
///
/// A `Pathfinder` is created once per grid and reused across searches - its
/// predecessor, distance, and heap buffers are reset at the start of every
/// call to [`flood_fill`](Pathfinder::flood_fill) or
/// [`find_path`](Pathfinder::find_path) rather than reallocated.
#[derive(Debug)]
pub struct Pathfinder {
    width: usize,
    height: usize,
    cost: Vec<f32>,
    predecessor: Vec<i32>,
    distance: Vec<f32>,
    heap: BinaryHeap<FrontierNode, FrontierComparator>,
}

impl Pathfinder {
    /// Builds a pathfinder over a `width * height` grid of traversal costs.
    ///
    /// `cost` is row-major with y as the outer index (`cost[y * width + x]`).
    /// The caller must pre-populate the outer ring (`x == 0`, `x == width -
    /// 1`, `y == 0`, `y == height - 1`) with `f32::INFINITY` - the inner
    /// search loop relies on that border to keep neighbor indexing in
    /// bounds without per-step checks.
    ///
    /// Returns [`GridError::ZeroSizedGrid`] if either dimension is zero, or
    /// [`GridError::BufferLenMismatch`] if `cost.len() != width * height`.
    pub fn new(width: usize, height: usize, cost: Vec<f32>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSizedGrid);
        }
        let expected = width * height;
        if cost.len() != expected {
            return Err(GridError::BufferLenMismatch {
                expected,
                actual: cost.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cost,
            predecessor: vec![-1; expected],
            distance: vec![0.0; expected],
            heap: BinaryHeap::with_capacity(
                width.max(height) * 4,
                FrontierComparator {
                    target_x: 0,
                    target_y: 0,
                },
            ),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The best-known cumulative cost to `cell`, if it was reached during
    /// the last search.
    pub fn distance_to(&self, cell: IVec2) -> Option<f32> {
        let idx = self.flat_index(cell)?;
        (self.predecessor[idx] != -1).then(|| self.distance[idx])
    }

    /// Relaxes every cell reachable from `sources`, populating the
    /// predecessor and distance fields with no target to steer toward.
    /// Returns `false` without searching if any source lies on the
    /// impassable border.
    pub fn flood_fill(&mut self, sources: &[IVec2]) -> bool {
        self.search(sources, None)
    }

    /// Searches from `sources` toward `target`, short-circuiting as soon as
    /// `target` is reached. Returns `false` if any source or the target
    /// lies on the border, or if the target is unreachable.
    pub fn find_path(&mut self, sources: &[IVec2], target: IVec2) -> bool {
        self.search(sources, Some(target))
    }

    fn search(&mut self, sources: &[IVec2], target: Option<IVec2>) -> bool {
        let span = debug_span!(
            "grid_search",
            width = self.width,
            height = self.height,
            sources = sources.len(),
            flood_fill = target.is_none()
        );
        let _enter = span.enter();

        if sources.is_empty() {
            warn!("search called with no sources");
            return false;
        }
        for &source in sources {
            if !self.in_interior(source) {
                warn!(x = source.x, y = source.y, "source rejected: on the impassable border");
                return false;
            }
        }
        if let Some(target) = target {
            if !self.in_interior(target) {
                warn!(x = target.x, y = target.y, "target rejected: on the impassable border");
                return false;
            }
        }

        self.predecessor.fill(-1);
        self.heap.clear();
        let (target_x, target_y) = target.map_or((0, 0), |t| (t.x, t.y));
        *self.heap.comparator_mut() = FrontierComparator { target_x, target_y };

        if let Some(target) = target {
            if let Some(source) = sources.iter().find(|&&s| s == target) {
                // Short-circuits the search entirely, but still commits the
                // same self-parented root marker a source gets during a
                // normal run, so extraction sees a single-waypoint result.
                let idx = self.flat_index_unchecked(*source);
                self.predecessor[idx] = idx as i32;
                self.distance[idx] = 0.0;
                debug!(x = target.x, y = target.y, "target equals a source, identity path");
                return true;
            }
        }

        for &source in sources {
            let idx = self.flat_index_unchecked(source) as i32;
            self.heap.push(FrontierNode {
                x: source.x as u16,
                y: source.y as u16,
                // Self-parented rather than -1, so a source is indistinguishable
                // from any other committed cell once popped: the stale-entry
                // skip below keys off "predecessor is still -1" to mean
                // unvisited, and a source that looked unvisited after its own
                // commit would let every one of its neighbors repush it,
                // forming a source -> neighbor -> source cycle.
                parent: idx,
                distance: 0.0,
            });
        }

        while let Some(head) = self.heap.pop() {
            let idx = head.flat_index(self.width);

            if self.predecessor[idx] != -1 && self.distance[idx] < head.distance {
                trace!(idx, "stale frontier entry skipped");
                continue;
            }

            self.predecessor[idx] = head.parent;
            self.distance[idx] = head.distance;

            for &(dx, dy, diagonal) in NEIGHBOR_OFFSETS.iter() {
                let nx = head.x as i32 + dx;
                let ny = head.y as i32 + dy;
                let n_idx = ny as usize * self.width + nx as usize;
                let n_cost = self.cost[n_idx];

                let move_cost = if diagonal {
                    let horiz_idx = head.y as usize * self.width + nx as usize;
                    let vert_idx = ny as usize * self.width + head.x as usize;
                    n_cost + self.cost[horiz_idx] / 3.0 + self.cost[vert_idx] / 3.0
                } else {
                    n_cost
                };

                if let Some(target) = target {
                    // A cardinal hop onto the target short-circuits
                    // unconditionally; a diagonal hop only does if its
                    // corner-cost composite is finite.
                    if nx == target.x && ny == target.y && (!diagonal || move_cost.is_finite()) {
                        let step = if diagonal { SQRT_2 } else { 1.0 };
                        let t_idx = target.y as usize * self.width + target.x as usize;
                        self.predecessor[t_idx] = idx as i32;
                        self.distance[t_idx] = head.distance + move_cost + step;
                        debug!(x = target.x, y = target.y, "target reached");
                        return true;
                    }
                }

                if move_cost.is_finite() {
                    let step = if diagonal { SQRT_2 } else { 1.0 };
                    self.heap.push(FrontierNode {
                        x: nx as u16,
                        y: ny as u16,
                        parent: idx as i32,
                        distance: head.distance + move_cost + step,
                    });
                }
            }
        }

        target.is_none()
    }

    /// Walks the predecessor field backward from `target`, appending
    /// `target`, then each cell where the direction of travel changes, then
    /// finally the source, to `out`. Returns `false` if `target` was never
    /// reached during the last search.
    pub fn get_path(&self, target: IVec2, out: &mut Vec<IVec2>) -> bool {
        let Some(t_idx) = self.flat_index(target) else {
            return false;
        };
        if self.predecessor[t_idx] == -1 {
            return false;
        }

        out.push(target);

        let mut current_idx = t_idx;
        let mut current_pos = target;
        let mut prev_delta: Option<IVec2> = None;

        loop {
            let pred_idx = self.predecessor[current_idx];
            // A root is either the legacy "never committed" sentinel (should
            // not occur on a cell we just confirmed is reachable, but is
            // checked regardless) or a self-parented source. Either way the
            // walk must stop here rather than trust the chain to terminate
            // on its own - a self-parent left uncaught would spin forever.
            if pred_idx < 0 || pred_idx as usize == current_idx {
                if prev_delta.is_some() {
                    out.push(current_pos);
                }
                return true;
            }
            let pred_idx = pred_idx as usize;
            let pred_pos = self.unflat_index(pred_idx);
            let delta = current_pos - pred_pos;

            if let Some(prev) = prev_delta {
                if prev != delta {
                    out.push(current_pos);
                }
            }

            prev_delta = Some(delta);
            current_idx = pred_idx;
            current_pos = pred_pos;
        }
    }

    /// Releases the pathfinder's buffers. Equivalent to dropping it, spelled
    /// out for parity with callers used to an explicit teardown call.
    pub fn dispose(self) {
        debug!(width = self.width, height = self.height, "pathfinder released");
    }

    fn in_interior(&self, cell: IVec2) -> bool {
        cell.x >= 1
            && cell.x <= self.width as i32 - 2
            && cell.y >= 1
            && cell.y <= self.height as i32 - 2
    }

    fn flat_index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x as usize >= self.width || cell.y as usize >= self.height {
            return None;
        }
        Some(self.flat_index_unchecked(cell))
    }

    fn flat_index_unchecked(&self, cell: IVec2) -> usize {
        cell.y as usize * self.width + cell.x as usize
    }

    fn unflat_index(&self, idx: usize) -> IVec2 {
        IVec2::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
