use crate::cell::CellId;
use core::fmt;

/// Reasons an edit or a run request is refused. None of them change any state. The
/// [Display](fmt::Display) text is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationError {
    MissingStart,
    MissingDestination,
    MissingAlgorithm,
    /// Start or destination was placed on a wall.
    WallSelected(CellId),
    /// The start was placed on the destination.
    StartIsDestination(CellId),
    /// The destination was placed on the start.
    DestinationIsStart(CellId),
    UnknownCell(CellId),
    /// The grid is locked from the moment a run starts until it is reset.
    RunInProgress,
    InvalidGridSize(usize),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::MissingStart => write!(f, "Please select Start Node"),
            SimulationError::MissingDestination => write!(f, "Please select End Node"),
            SimulationError::MissingAlgorithm => write!(f, "Please select an algorithm"),
            SimulationError::WallSelected(_) => write!(f, "Selected Node is a wall"),
            SimulationError::StartIsDestination(_) => {
                write!(f, "Destination Node cannot be Start Node")
            }
            SimulationError::DestinationIsStart(_) => {
                write!(f, "Start Node cannot be Destination Node")
            }
            SimulationError::UnknownCell(id) => write!(f, "Node {} is not on the grid", id.0),
            SimulationError::RunInProgress => write!(f, "Reset the grid before making changes"),
            SimulationError::InvalidGridSize(size) => {
                write!(f, "Grid size {} is not supported", size)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
