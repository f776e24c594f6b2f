use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::{Debug, Display},
    ops::{Deref, DerefMut},
};

use crate::error::{Result, SolveError};
use crate::grid::{GridMap, Point};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, totally ordered (used to break ties in the frontier) and not references (hence 'static)
pub trait NodeReference: Copy + Ord + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is inside the map
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the traversable neighbors of the provided node. Every move costs 1.
    fn neighbors_of(&self, node: Self::Reference) -> impl Iterator<Item = Self::Reference>;

    /// Lower bound on the number of moves between two nodes, must never overestimate
    fn estimate(&self, from: Self::Reference, to: Self::Reference) -> usize;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

/// The objects that we store in the priority queue
#[derive(Debug)]
struct ToVisit<R: NodeReference> {
    // cost so far plus the estimate to the goal
    estimate: usize,
    cost: usize,
    point: R,
}

impl<R: NodeReference> Ord for ToVisit<R> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // lowest estimate first, ties go to the smallest point
        self.estimate
            .cmp(&other.estimate)
            .then_with(|| self.point.cmp(&other.point))
            .reverse() // reverse for BinaryHeap to be a min-heap
    }
}

impl<R: NodeReference> PartialOrd for ToVisit<R> {
    fn partial_cmp(&self, other: &ToVisit<R>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: NodeReference> PartialEq for ToVisit<R> {
    fn eq(&self, other: &ToVisit<R>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: NodeReference> Eq for ToVisit<R> {}

#[derive(Clone, Copy, Debug)]
pub struct VisitedItem<R> {
    pub cost: usize,
    pub from: Option<R>,
}

#[derive(Clone, Copy, Debug)]
pub struct Visited<R>(Option<VisitedItem<R>>);

impl<R> Default for Visited<R> {
    fn default() -> Self {
        Visited(None)
    }
}
impl<R> Deref for Visited<R> {
    type Target = Option<VisitedItem<R>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<R> DerefMut for Visited<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
impl<R> Display for Visited<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(item) => write!(f, "{:03} ", item.cost),
            None => write!(f, "{:3} ", ""),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult<R> {
    pub path: Vec<R>,
    pub start: R,
    pub goal: R,
    pub total_cost: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R> {
    Computing,
    NoPathFound,
    PathFound(PathResult<R>),
}

impl<R> PathFinderState<R> {
    pub fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// A* search from `start` to `goal`. The finder owns its frontier and visited storage, both are
/// dropped together with it.
#[derive(Debug)]
pub struct PathFinder<
    R: NodeReference,
    S: MapStorage<Visited<R>, Reference = R>,
    M: MapTrait<Reference = R, Storage<Visited<R>> = S>,
> {
    start: R,
    goal: R,
    visited: S,
    visit_list: BinaryHeap<ToVisit<R>>,
    state: PathFinderState<R>,
    expanded: usize,
    _map: std::marker::PhantomData<M>,
}

impl<
        R: NodeReference,
        S: MapStorage<Visited<R>, Reference = R>,
        M: MapTrait<Reference = R, Storage<Visited<R>> = S>,
    > PathFinder<R, S, M>
{
    pub fn new(map: &M, start: R, goal: R) -> Self {
        let mut visited: S = map.create_storage::<Visited<R>>();
        *visited.get_mut(start) = Visited(Some(VisitedItem {
            cost: 0,
            from: None,
        }));

        Self {
            start,
            goal,
            visited,
            visit_list: BinaryHeap::from([ToVisit {
                estimate: map.estimate(start, goal),
                cost: 0,
                point: start,
            }]),
            state: PathFinderState::Computing,
            expanded: 0,
            _map: std::marker::PhantomData,
        }
    }

    pub fn finish(mut self, map: &M) -> PathFinderState<R> {
        loop {
            match self.step(map) {
                PathFinderState::Computing => {}
                s => return s,
            }
        }
    }

    pub fn step(&mut self, map: &M) -> PathFinderState<R> {
        if self.state.is_done() {
            return self.state.clone();
        }

        let Some(visit) = self.visit_list.pop() else {
            log::debug!(
                "frontier exhausted after expanding {} nodes, {:?} is unreachable",
                self.expanded,
                self.goal
            );
            self.state = PathFinderState::NoPathFound;
            return self.state.clone();
        };

        // a cheaper route to this point was recorded after this entry was queued
        if let Visited(Some(item)) = self.visited.get(visit.point) {
            if item.cost < visit.cost {
                return self.state.clone();
            }
        }

        self.expanded += 1;

        if visit.point == self.goal {
            let path = self.backtrack();

            log::debug!(
                "found goal {:?}: cost={} expanded={}",
                self.goal,
                visit.cost,
                self.expanded
            );

            self.state = PathFinderState::PathFound(PathResult {
                path,
                total_cost: visit.cost,
                start: self.start,
                goal: self.goal,
            });

            return self.state.clone();
        }

        let tentative = visit.cost + 1;

        for point in map.neighbors_of(visit.point) {
            let improves = match self.visited.get(point) {
                Visited(Some(item)) => tentative < item.cost,
                Visited(None) => true,
            };

            if improves {
                *self.visited.get_mut(point) = Visited(Some(VisitedItem {
                    cost: tentative,
                    from: Some(visit.point),
                }));
                self.visit_list.push(ToVisit {
                    estimate: tentative + map.estimate(point, self.goal),
                    cost: tentative,
                    point,
                });
            }
        }

        self.state.clone()
    }

    /// Walks the predecessor links from the goal back to the start
    fn backtrack(&self) -> Vec<R> {
        let mut path: Vec<R> = vec![self.goal];
        let mut current = self.goal;

        while let Visited(Some(VisitedItem {
            from: Some(from), ..
        })) = self.visited.get(current)
        {
            path.push(from);
            current = from;
        }

        path.reverse();
        path
    }

    pub fn state(&self) -> &PathFinderState<R> {
        &self.state
    }

    pub fn get_visited(&self) -> &S {
        &self.visited
    }

    /// Number of nodes taken off the frontier and expanded so far
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn start(&self) -> R {
        self.start
    }

    pub fn goal(&self) -> R {
        self.goal
    }
}

/// Finds a shortest path between two walkable cells of the map.
///
/// Both endpoints are checked before the search starts, a wall or out-of-bounds endpoint yields
/// [`SolveError::InvalidEndpoint`]. If the goal cannot be reached, [`SolveError::NoPath`] is
/// returned.
pub fn find_path(map: &GridMap, start: Point, goal: Point) -> Result<PathResult<Point>> {
    for point in [start, goal] {
        if !map.is_valid(point) {
            return Err(SolveError::InvalidEndpoint {
                point,
                reason: "outside of the map",
            });
        }
        if !map.is_open(point) {
            return Err(SolveError::InvalidEndpoint {
                point,
                reason: "not a walkable cell",
            });
        }
    }

    match PathFinder::new(map, start, goal).finish(map) {
        PathFinderState::PathFound(result) => Ok(result),
        _ => Err(SolveError::NoPath { start, goal }),
    }
}
