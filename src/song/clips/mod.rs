pub mod audio;
pub mod notes;

use uuid::Uuid;

use crate::time::TimeValue;

pub type ClipId = Uuid;

/// Capability every clip kind has to offer so that one interval engine can
/// maintain any of them on a track.
///
/// All positions on one clip share a single unit (seconds for audio tracks,
/// pulses for MIDI tracks); the engine never converts them. `duplicate` hands
/// out a distinct entity (fresh id); the payload may stay shared by reference
/// as long as trimming the copy cannot affect the original's bounds.
pub trait TimelineClip {
  fn id(&self) -> ClipId;

  fn timeline_start(&self) -> TimeValue;

  fn timeline_end(&self) -> TimeValue;

  /// Moves the start edge, leaving the end edge in place. The payload window
  /// follows the edge: material under the cut-away head is gone.
  fn trim_start_to(&mut self, start: TimeValue);

  /// Moves the end edge, leaving the start edge in place.
  fn set_end(&mut self, end: TimeValue);

  /// Moves the whole clip to start at `start`, preserving its length and its
  /// payload alignment. Relocation is not a trim: nothing is cut away.
  fn relocate_to(&mut self, start: TimeValue);

  fn duplicate(&self) -> Self
  where
    Self: Sized;
}
