use grid_traversal::{
    Algorithm, AnimationTimings, Cell, CellId, Controller, EditMode, GridSize, LogSink, Renderer,
    Simulation, Sleeping,
};
use std::time::Duration;

// Draws a wall across an 8x8 grid with a gap on the right, then lets both traversals find
// their way from the top left to the bottom left corner:
//  ________
// |S       |
// |        |
// |####### |
// |        |
// |E       |
// ...
// Run with RUST_LOG=info to see the run log.

/// Prints every painted cell as it changes.
struct Printer;

impl Renderer for Printer {
    fn pause(&mut self, _: Duration) {}
    fn paint(&mut self, cell: &Cell) {
        println!(
            "({}, {}) -> {}",
            cell.row,
            cell.col,
            cell.state.class_name()
        );
    }
}

fn main() {
    env_logger::init();
    let timings = AnimationTimings {
        step: Duration::from_millis(20),
        before_path: Duration::from_millis(100),
        path_step: Duration::from_millis(40),
        start_endpoint: Duration::from_millis(60),
        end_endpoint: Duration::from_millis(20),
    };
    for algorithm in Algorithm::ALL {
        let sim = Simulation::new(GridSize::default()).with_timings(timings);
        let mut controller = Controller::new(sim, LogSink);
        controller.select_algorithm(algorithm);
        controller.select_mode(EditMode::ToggleWall);
        for col in 0..7 {
            controller.click(CellId(2 * 8 + col + 1));
        }
        controller.select_mode(EditMode::SetStart);
        controller.click(CellId(1));
        controller.select_mode(EditMode::SetEnd);
        controller.click(CellId(4 * 8 + 1));

        println!("{}:\n{}", algorithm, controller.simulation());
        let outcome = controller.run(&mut Sleeping::new(Printer));
        println!("{}", controller.simulation());
        if let Some(path) = outcome.as_ref().and_then(|o| o.path()) {
            println!("Path of {} cells\n", path.len());
        }
    }
}
