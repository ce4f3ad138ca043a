pub mod clips;
pub mod track;

use crate::config::Config;
use crate::time::Tempo;

use self::track::Track;

pub const DEFAULT_TEMPO: u16 = 120;

/// The project: a named list of tracks plus the current tempo, which is
/// handed to time conversions at call time and never cached anywhere below.
pub struct Song {
  name: String,
  tempo: Tempo,
  tracks: Vec<Track>,
}

impl Song {
  pub fn new<T>(name: T, tempo: Tempo) -> Song
  where
    T: Into<String>,
  {
    Song {
      name: name.into(),
      tempo,
      tracks: Vec::new(),
    }
  }

  pub fn from_config(config: &Config) -> Song {
    Song::new(
      config.project.name.clone(),
      Tempo::new(config.project.tempo),
    )
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

  pub fn get_tempo(&self) -> Tempo {
    self.tempo
  }

  pub fn set_tempo(&mut self, tempo: Tempo) {
    self.tempo = tempo;
  }

  pub fn add_track(&mut self, track: Track) -> usize {
    self.tracks.push(track);
    self.tracks.len() - 1
  }

  pub fn get_tracks(&self) -> &[Track] {
    self.tracks.as_slice()
  }

  pub fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
    self.tracks.get_mut(index)
  }
}
