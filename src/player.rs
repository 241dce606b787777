use crate::common::{BoardError, Coordinate, ShotOutcome};

/// Interface implemented by whatever chooses a side's shots.
///
/// The engine calls [`MoveSource::request_coordinate`] until the returned
/// coordinate is a legal shot, reporting each rejection in between.
pub trait MoveSource {
    /// Choose the next cell to fire at on the opponent's board.
    fn request_coordinate(&mut self) -> anyhow::Result<Coordinate>;

    /// Inform the source that `target` was refused and a new one is needed.
    fn shot_rejected(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the source of the result of its last legal shot.
    fn shot_resolved(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

impl<M: MoveSource + ?Sized> MoveSource for alloc::boxed::Box<M> {
    fn request_coordinate(&mut self) -> anyhow::Result<Coordinate> {
        (**self).request_coordinate()
    }

    fn shot_rejected(&mut self, target: Coordinate, error: &BoardError) {
        (**self).shot_rejected(target, error)
    }

    fn shot_resolved(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).shot_resolved(target, outcome)
    }
}
