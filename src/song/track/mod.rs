pub mod audio;
pub mod clip_track;
pub mod invariant;
pub mod notes;

pub use self::audio::AudioTrack;
pub use self::clip_track::{ClipTrack, TrackEdit};
pub use self::invariant::InvariantError;
pub use self::notes::MidiTrack;

pub enum TrackMedia {
  Audio(AudioTrack),
  Midi(MidiTrack),
}

pub struct Track {
  name: String,
  mute: bool,
  solo: bool,

  pub media: TrackMedia,
}

impl Track {
  pub fn new<T>(name: T, media: TrackMedia) -> Track
  where
    T: Into<String>,
  {
    Track {
      name: name.into(),
      mute: false,
      solo: false,
      media,
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

  pub fn is_muted(&self) -> bool {
    self.mute
  }

  pub fn set_muted(&mut self, mute: bool) {
    self.mute = mute;
  }

  pub fn is_solo(&self) -> bool {
    self.solo
  }

  pub fn set_solo(&mut self, solo: bool) {
    self.solo = solo;
  }
}
