use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::song::clips::{ClipId, TimelineClip};
use crate::time::{TimeUnit, TimeValue};

#[derive(Debug, Clone, Copy)]
pub struct Note {
  pub key: u8,
  pub velocity: u8,
  pub start: TimeValue,
  pub length: TimeValue,
}

impl Note {
  pub fn new(key: u8, velocity: u8, start: TimeValue, length: TimeValue) -> Note {
    assert_eq!(start.get_unit(), TimeUnit::Pulses);
    assert_eq!(length.get_unit(), TimeUnit::Pulses);
    Note {
      key,
      velocity,
      start,
      length,
    }
  }
}

/// Note material shared between the clips cut from it.
pub struct NotesSource {
  notes: Vec<Note>,
}

impl NotesSource {
  pub fn new(notes: Vec<Note>) -> NotesSource {
    NotesSource { notes }
  }

  pub fn get_notes(&self) -> &[Note] {
    self.notes.as_slice()
  }
}

/// A region of a note sequence placed on the timeline. Positions are in
/// pulses.
pub struct NotesClip {
  id: ClipId,
  name: String,
  start: TimeValue,
  end: TimeValue,
  source: Arc<RwLock<NotesSource>>,
}

impl NotesClip {
  pub fn new<T>(
    name: T,
    start: TimeValue,
    end: TimeValue,
    source: Arc<RwLock<NotesSource>>,
  ) -> NotesClip
  where
    T: Into<String>,
  {
    assert_eq!(start.get_unit(), TimeUnit::Pulses);
    assert_eq!(end.get_unit(), TimeUnit::Pulses);
    NotesClip {
      id: Uuid::new_v4(),
      name: name.into(),
      start,
      end,
      source,
    }
  }

  pub fn get_name(&self) -> &str {
    self.name.as_str()
  }

  pub fn set_name<T>(&mut self, name: T)
  where
    T: Into<String>,
  {
    self.name = name.into();
  }

  pub fn get_source(&self) -> &Arc<RwLock<NotesSource>> {
    &self.source
  }
}

impl TimelineClip for NotesClip {
  fn id(&self) -> ClipId {
    self.id
  }

  fn timeline_start(&self) -> TimeValue {
    self.start
  }

  fn timeline_end(&self) -> TimeValue {
    self.end
  }

  fn trim_start_to(&mut self, start: TimeValue) {
    self.start = start;
  }

  fn set_end(&mut self, end: TimeValue) {
    self.end = end;
  }

  fn relocate_to(&mut self, start: TimeValue) {
    let length = self.end - self.start;
    self.start = start;
    self.end = start + length;
  }

  fn duplicate(&self) -> NotesClip {
    NotesClip {
      id: Uuid::new_v4(),
      name: self.name.clone(),
      start: self.start,
      end: self.end,
      source: Arc::clone(&self.source),
    }
  }
}

#[cfg(test)]
mod test {

  use std::sync::{Arc, RwLock};

  use super::{Note, NotesClip, NotesSource};
  use crate::song::clips::TimelineClip;
  use crate::time::TimeValue;

  fn source() -> Arc<RwLock<NotesSource>> {
    let notes = vec![
      Note::new(60, 100, TimeValue::pulses(0.0), TimeValue::pulses(24.0)),
      Note::new(64, 100, TimeValue::pulses(24.0), TimeValue::pulses(24.0)),
    ];
    Arc::new(RwLock::new(NotesSource::new(notes)))
  }

  #[test]
  pub fn trim_edges() {
    let mut clip = NotesClip::new("riff", TimeValue::pulses(0.0), TimeValue::pulses(96.0), source());
    clip.trim_start_to(TimeValue::pulses(24.0));
    clip.set_end(TimeValue::pulses(72.0));
    assert_eq!(clip.timeline_start(), TimeValue::pulses(24.0));
    assert_eq!(clip.timeline_end(), TimeValue::pulses(72.0));
  }

  #[test]
  pub fn duplicate_shares_source() {
    let clip = NotesClip::new("riff", TimeValue::pulses(0.0), TimeValue::pulses(96.0), source());
    let copy = clip.duplicate();
    assert_ne!(clip.id(), copy.id());
    assert!(Arc::ptr_eq(clip.get_source(), copy.get_source()));
  }
}
