use std::cmp::Ordering;
use std::slice::Iter;

use log::debug;

use crate::song::clips::{ClipId, TimelineClip};
use crate::song::track::invariant::{self, InvariantError};
use crate::time::TimeValue;

/// What a destructive edit did to a track, for the caller to propagate change
/// notifications from. Clips removed outright come back by value; clips that
/// survived with trimmed edges and clones produced by splits are reported by
/// id.
pub struct TrackEdit<C> {
  pub removed: Vec<C>,
  pub modified: Vec<ClipId>,
  pub created: Vec<ClipId>,
}

impl<C> TrackEdit<C> {
  pub fn is_empty(&self) -> bool {
    self.removed.is_empty() && self.modified.is_empty() && self.created.is_empty()
  }
}

impl<C> Default for TrackEdit<C> {
  fn default() -> TrackEdit<C> {
    TrackEdit {
      removed: Vec::new(),
      modified: Vec::new(),
      created: Vec::new(),
    }
  }
}

/// Ordered collection of clips on one track, kept sorted by start and free of
/// overlaps across every mutation. All positions share the track's native
/// unit; no operation converts units.
pub struct ClipTrack<C>
where
  C: TimelineClip,
{
  clips: Vec<C>,
}

impl<C> ClipTrack<C>
where
  C: TimelineClip,
{
  pub fn new() -> ClipTrack<C> {
    ClipTrack { clips: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.clips.len()
  }

  pub fn is_empty(&self) -> bool {
    self.clips.is_empty()
  }

  pub fn clips(&self) -> &[C] {
    self.clips.as_slice()
  }

  pub fn iter(&self) -> Iter<C> {
    self.clips.iter()
  }

  pub fn clip(&self, id: ClipId) -> Option<&C> {
    self.clips.iter().find(|clip| clip.id() == id)
  }

  /// Mutable access for callers that edit a clip in place (a drag changing
  /// its start). After changing the start the caller must re-home the clip
  /// with `move_clip` before any other operation.
  pub fn clip_mut(&mut self, id: ClipId) -> Option<&mut C> {
    self.clips.iter_mut().find(|clip| clip.id() == id)
  }

  pub fn check_invariant(&self) -> Result<(), InvariantError> {
    invariant::check(&self.clips)
  }

  /// Destructive insert: whatever occupied the new clip's range is cleared
  /// first, then the clip is spliced in at its sort position. A clip starting
  /// exactly where an existing clip starts goes before it.
  pub fn insert(&mut self, clip: C) -> TrackEdit<C> {
    let start = clip.timeline_start();
    let end = clip.timeline_end();
    let edit = self.delete_time(start, end);
    let index = self.insert_index(&start);
    self.clips.insert(index, clip);
    debug!("insert [{}, {}) at index {}", start, end, index);
    self.validate();
    edit
  }

  /// Clears the time range `[start, end)` across the whole track.
  ///
  /// Clips fully inside the range are removed; a clip losing its head is
  /// trimmed forward to `end`; a clip losing its tail is trimmed back to
  /// `start`; a clip containing the whole range is split, keeping the
  /// original on the left and a clone on the right. Trimming a start changes
  /// the sort key, so those clips are pulled out and the sequence is
  /// re-sorted in one stable pass at the end rather than spliced one by one.
  ///
  /// `start == end` is a no-op. `start > end` is a caller bug and panics.
  pub fn delete_time(&mut self, start: TimeValue, end: TimeValue) -> TrackEdit<C> {
    match start.cmp_same_unit(&end) {
      Ordering::Greater => panic!("invalid deletion range: {} > {}", start, end),
      Ordering::Equal => return TrackEdit::default(),
      Ordering::Less => {}
    }

    let mut edit = TrackEdit::default();
    let mut kept: Vec<C> = Vec::with_capacity(self.clips.len());
    let mut displaced: Vec<C> = Vec::new();

    for mut clip in self.clips.drain(..) {
      let clip_start = clip.timeline_start();
      let clip_end = clip.timeline_end();
      let overlaps = clip_start.cmp_same_unit(&end) == Ordering::Less
        && start.cmp_same_unit(&clip_end) == Ordering::Less;
      if !overlaps {
        kept.push(clip);
        continue;
      }

      let covers_start = start.cmp_same_unit(&clip_start) != Ordering::Greater;
      let covers_end = clip_end.cmp_same_unit(&end) != Ordering::Greater;
      match (covers_start, covers_end) {
        (true, true) => {
          // Fully inside the range.
          edit.removed.push(clip);
        }
        (true, false) => {
          // Head deleted; the start moves, so the clip must re-sort.
          clip.trim_start_to(end);
          edit.modified.push(clip.id());
          displaced.push(clip);
        }
        (false, true) => {
          // Tail deleted; sort position is stable.
          clip.set_end(start);
          edit.modified.push(clip.id());
          kept.push(clip);
        }
        (false, false) => {
          // Range inside the clip: split, keep the original on the left.
          let mut tail = clip.duplicate();
          tail.trim_start_to(end);
          clip.set_end(start);
          edit.modified.push(clip.id());
          edit.created.push(tail.id());
          kept.push(clip);
          displaced.push(tail);
        }
      }
    }

    kept.extend(displaced);
    kept.sort_by(|a, b| a.timeline_start().cmp_same_unit(&b.timeline_start()));
    self.clips = kept;

    debug!(
      "delete [{}, {}): {} removed, {} modified, {} created",
      start,
      end,
      edit.removed.len(),
      edit.modified.len(),
      edit.created.len()
    );
    self.validate();
    edit
  }

  /// Removes a clip by identity. Returns None when the clip is not on this
  /// track, so calling it twice is harmless.
  pub fn remove_clip(&mut self, id: ClipId) -> Option<C> {
    let index = self.clips.iter().position(|clip| clip.id() == id)?;
    let clip = self.clips.remove(index);
    self.validate();
    Some(clip)
  }

  /// Splits a clip in two at `at`, keeping the original on the left and
  /// splicing a clone right after it. Returns the ids of both halves, or None
  /// when the clip is unknown or `at` falls outside its bounds; an
  /// out-of-range split is an ordinary user action, not an error.
  pub fn split_clip(&mut self, id: ClipId, at: TimeValue) -> Option<(ClipId, ClipId)> {
    let index = self.clips.iter().position(|clip| clip.id() == id)?;
    let clip_start = self.clips[index].timeline_start();
    let clip_end = self.clips[index].timeline_end();
    if at.cmp_same_unit(&clip_start) == Ordering::Less
      || clip_end.cmp_same_unit(&at) == Ordering::Less
    {
      return None;
    }

    let mut tail = self.clips[index].duplicate();
    tail.trim_start_to(at);
    self.clips[index].set_end(at);
    let right = tail.id();
    self.clips.insert(index + 1, tail);
    debug!("split {} at {}", id, at);
    self.validate();
    Some((id, right))
  }

  /// Appends a clip right after the last one, relocating it there regardless
  /// of the start it arrived with and preserving its length. Cannot overlap
  /// anything by construction.
  pub fn push_clip(&mut self, mut clip: C) -> ClipId {
    let base = match self.clips.last() {
      Some(last) => last.timeline_end(),
      None => TimeValue::zero(clip.timeline_start().get_unit()),
    };
    clip.relocate_to(base);
    let id = clip.id();
    self.clips.push(clip);
    debug!("push {} at {}", id, base);
    self.validate();
    id
  }

  /// Re-homes a clip whose start was mutated in place back to the index that
  /// keeps the sequence sorted. Positions are not recomputed; the same clip
  /// object is re-spliced before the first clip with an equal or later start.
  /// The clip must already be a member; an empty track or an unknown id is a
  /// caller bug and panics.
  pub fn move_clip(&mut self, id: ClipId) {
    if self.clips.is_empty() {
      panic!("cannot move clip {} within an empty track", id);
    }
    let old_index = match self.clips.iter().position(|clip| clip.id() == id) {
      Some(index) => index,
      None => panic!("clip {} is not on this track", id),
    };
    let moved = self.clips.remove(old_index);
    let index = self.insert_index(&moved.timeline_start());
    self.clips.insert(index, moved);
    debug!("move {} to index {}", id, index);
    self.validate();
  }

  /// First index whose clip starts at or after `start`; equal starts resolve
  /// to before the existing clip.
  fn insert_index(&self, start: &TimeValue) -> usize {
    self
      .clips
      .iter()
      .position(|clip| clip.timeline_start().cmp_same_unit(start) != Ordering::Less)
      .unwrap_or_else(|| self.clips.len())
  }

  fn validate(&self) {
    if cfg!(debug_assertions) {
      if let Err(error) = invariant::check(&self.clips) {
        panic!("track invariant broken: {}", error);
      }
    }
  }
}

impl<C> Default for ClipTrack<C>
where
  C: TimelineClip,
{
  fn default() -> ClipTrack<C> {
    ClipTrack::new()
  }
}
