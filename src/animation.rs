use crate::cell::{CellId, CellState};
use crate::grid::CellGrid;
use crate::render::Renderer;
use crate::search::TraversalEvent;
use std::time::Duration;

pub const STEP_DELAY: Duration = Duration::from_millis(100);
pub const BEFORE_PATH_DELAY: Duration = Duration::from_millis(500);
pub const PATH_STEP_DELAY: Duration = Duration::from_millis(200);
pub const START_ENDPOINT_DELAY: Duration = Duration::from_millis(300);
pub const END_ENDPOINT_DELAY: Duration = Duration::from_millis(100);

/// Pacing of the replay. Delays are waited before the frame they belong to is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Before each traversal step.
    pub step: Duration,
    /// Between the end of the traversal and the first path cell.
    pub before_path: Duration,
    /// Before each path cell.
    pub path_step: Duration,
    pub start_endpoint: Duration,
    pub end_endpoint: Duration,
}

impl Default for AnimationTimings {
    fn default() -> AnimationTimings {
        AnimationTimings {
            step: STEP_DELAY,
            before_path: BEFORE_PATH_DELAY,
            path_step: PATH_STEP_DELAY,
            start_endpoint: START_ENDPOINT_DELAY,
            end_endpoint: END_ENDPOINT_DELAY,
        }
    }
}

impl AnimationTimings {
    /// No waiting at all, for tests and headless runs.
    pub fn instant() -> AnimationTimings {
        AnimationTimings {
            step: Duration::ZERO,
            before_path: Duration::ZERO,
            path_step: Duration::ZERO,
            start_endpoint: Duration::ZERO,
            end_endpoint: Duration::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Pause(Duration),
    Paint {
        delay: Duration,
        cell: CellId,
        state: CellState,
    },
}

impl Frame {
    pub fn delay(&self) -> Duration {
        match *self {
            Frame::Pause(delay) | Frame::Paint { delay, .. } => delay,
        }
    }
}

/// Ordered frames replaying a traversal and, if the goal was found, its path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    pub frames: Vec<Frame>,
}

impl Timeline {
    /// Traversal events on `start` or `goal` are skipped so the endpoints keep their
    /// marking while the search runs. The path is painted from the goal back to the start,
    /// after which both endpoints are marked again.
    pub fn build(
        events: &[TraversalEvent],
        path: Option<&[CellId]>,
        start: CellId,
        goal: CellId,
        timings: &AnimationTimings,
    ) -> Timeline {
        let mut frames = events
            .iter()
            .filter(|e| e.cell() != start && e.cell() != goal)
            .map(|e| Frame::Paint {
                delay: timings.step,
                cell: e.cell(),
                state: match e {
                    TraversalEvent::Backtracked { .. } => CellState::Backtracked,
                    _ => CellState::Frontier,
                },
            })
            .collect::<Vec<_>>();
        if let Some(path) = path {
            frames.push(Frame::Pause(timings.before_path));
            frames.extend(path.iter().rev().map(|&cell| Frame::Paint {
                delay: timings.path_step,
                cell,
                state: CellState::Path,
            }));
            frames.push(Frame::Paint {
                delay: timings.start_endpoint,
                cell: start,
                state: CellState::Endpoint,
            });
            frames.push(Frame::Paint {
                delay: timings.end_endpoint,
                cell: goal,
                state: CellState::Endpoint,
            });
        }
        Timeline { frames }
    }
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    pub fn total_delay(&self) -> Duration {
        self.frames.iter().map(Frame::delay).sum()
    }
    /// Applies every frame to `grid` in order, letting `renderer` wait out each delay and
    /// draw each painted cell.
    pub fn play<R: Renderer + ?Sized>(&self, grid: &mut CellGrid, renderer: &mut R) {
        for frame in &self.frames {
            renderer.pause(frame.delay());
            if let Frame::Paint { cell, state, .. } = *frame {
                grid.paint(cell, state);
                if let Some(cell) = grid.cell(cell) {
                    renderer.paint(cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(frames: &[Frame]) -> Vec<(usize, CellState)> {
        frames
            .iter()
            .filter_map(|f| match *f {
                Frame::Paint { cell, state, .. } => Some((cell.0, state)),
                Frame::Pause(_) => None,
            })
            .collect()
    }

    #[test]
    fn successful_run_paints_path_and_endpoints() {
        let events = [2, 4, 3, 5]
            .map(|c| TraversalEvent::Discovered {
                cell: CellId(c),
                level: 1,
            })
            .to_vec();
        let path = [1, 2, 5].map(CellId);
        let timings = AnimationTimings::default();
        let timeline = Timeline::build(&events, Some(&path[..]), CellId(1), CellId(5), &timings);
        assert_eq!(
            ids(&timeline.frames),
            vec![
                (2, CellState::Frontier),
                (4, CellState::Frontier),
                (3, CellState::Frontier),
                (5, CellState::Path),
                (2, CellState::Path),
                (1, CellState::Path),
                (1, CellState::Endpoint),
                (5, CellState::Endpoint),
            ]
        );
        // 3 steps, the pause, 3 path cells and both endpoints.
        assert_eq!(timeline.total_delay(), Duration::from_millis(300 + 500 + 600 + 300 + 100));
    }

    #[test]
    fn unreachable_run_has_no_path_frames() {
        let events = vec![
            TraversalEvent::Visited {
                cell: CellId(1),
                depth: 0,
            },
            TraversalEvent::Visited {
                cell: CellId(2),
                depth: 1,
            },
            TraversalEvent::Backtracked { cell: CellId(2) },
            TraversalEvent::Backtracked { cell: CellId(1) },
        ];
        let timeline = Timeline::build(
            &events,
            None,
            CellId(1),
            CellId(9),
            &AnimationTimings::instant(),
        );
        assert_eq!(
            ids(&timeline.frames),
            vec![(2, CellState::Frontier), (2, CellState::Backtracked)]
        );
        assert_eq!(timeline.total_delay(), Duration::ZERO);
    }
}
