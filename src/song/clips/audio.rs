use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::song::clips::{ClipId, TimelineClip};
use crate::time::{Seconds, TimeUnit, TimeValue};

/// Decoded audio material shared between the clips cut from it.
pub struct AudioSource {
  sample_rate: u32,
  channels: u16,
  data: Vec<f32>,
}

impl AudioSource {
  pub fn new(sample_rate: u32, channels: u16, data: Vec<f32>) -> AudioSource {
    AudioSource {
      sample_rate,
      channels,
      data,
    }
  }

  pub fn get_sample_rate(&self) -> u32 {
    self.sample_rate
  }

  pub fn get_channels(&self) -> u16 {
    self.channels
  }

  pub fn duration(&self) -> Seconds {
    let frames = self.data.len() / usize::from(self.channels).max(1);
    frames as Seconds / Seconds::from(self.sample_rate)
  }
}

/// A region of an audio source placed on the timeline. Positions are in
/// seconds. Trimming the start edge advances `source_offset` by the same
/// amount so the material under the surviving part keeps playing unchanged.
pub struct AudioClip {
  id: ClipId,
  name: String,
  start: TimeValue,
  end: TimeValue,
  source: Arc<RwLock<AudioSource>>,
  source_offset: Seconds,
}

impl AudioClip {
  pub fn new<T>(
    name: T,
    start: TimeValue,
    end: TimeValue,
    source: Arc<RwLock<AudioSource>>,
  ) -> AudioClip
  where
    T: Into<String>,
  {
    assert_eq!(start.get_unit(), TimeUnit::Seconds);
    assert_eq!(end.get_unit(), TimeUnit::Seconds);
    AudioClip {
      id: Uuid::new_v4(),
      name: name.into(),
      start,
      end,
      source,
      source_offset: 0.0,
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

  pub fn get_source(&self) -> &Arc<RwLock<AudioSource>> {
    &self.source
  }

  pub fn get_source_offset(&self) -> Seconds {
    self.source_offset
  }
}

impl TimelineClip for AudioClip {
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
    let delta = start - self.start;
    self.source_offset += delta.get_value();
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

  fn duplicate(&self) -> AudioClip {
    AudioClip {
      id: Uuid::new_v4(),
      name: self.name.clone(),
      start: self.start,
      end: self.end,
      source: Arc::clone(&self.source),
      source_offset: self.source_offset,
    }
  }
}

#[cfg(test)]
mod test {

  use std::sync::{Arc, RwLock};

  use super::{AudioClip, AudioSource};
  use crate::song::clips::TimelineClip;
  use crate::time::TimeValue;

  fn source() -> Arc<RwLock<AudioSource>> {
    Arc::new(RwLock::new(AudioSource::new(44100, 2, vec![0.0; 44100 * 2])))
  }

  #[test]
  pub fn source_duration() {
    let source = AudioSource::new(44100, 2, vec![0.0; 44100 * 2]);
    assert_eq!(source.duration(), 1.0);
  }

  #[test]
  pub fn trim_start_advances_source_offset() {
    let mut clip = AudioClip::new("take", TimeValue::seconds(2.0), TimeValue::seconds(6.0), source());
    clip.trim_start_to(TimeValue::seconds(3.5));
    assert_eq!(clip.timeline_start(), TimeValue::seconds(3.5));
    assert_eq!(clip.timeline_end(), TimeValue::seconds(6.0));
    assert_eq!(clip.get_source_offset(), 1.5);
  }

  #[test]
  pub fn relocate_keeps_length_and_source_offset() {
    let mut clip = AudioClip::new("take", TimeValue::seconds(2.0), TimeValue::seconds(6.0), source());
    clip.trim_start_to(TimeValue::seconds(3.0));
    clip.relocate_to(TimeValue::seconds(10.0));
    assert_eq!(clip.timeline_start(), TimeValue::seconds(10.0));
    assert_eq!(clip.timeline_end(), TimeValue::seconds(13.0));
    assert_eq!(clip.get_source_offset(), 1.0);
  }

  #[test]
  pub fn duplicate_is_a_distinct_entity() {
    let clip = AudioClip::new("take", TimeValue::seconds(0.0), TimeValue::seconds(1.0), source());
    let copy = clip.duplicate();
    assert_ne!(clip.id(), copy.id());
    assert_eq!(copy.timeline_start(), clip.timeline_start());
    assert_eq!(copy.timeline_end(), clip.timeline_end());
    assert!(Arc::ptr_eq(clip.get_source(), copy.get_source()));
  }
}
