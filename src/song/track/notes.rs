use crate::song::clips::notes::NotesClip;
use crate::song::track::ClipTrack;

/// Track holding note regions; all clip positions are in pulses.
pub struct MidiTrack {
  clips: ClipTrack<NotesClip>,
}

impl MidiTrack {
  pub fn new() -> MidiTrack {
    MidiTrack {
      clips: ClipTrack::new(),
    }
  }

  pub fn clips(&self) -> &ClipTrack<NotesClip> {
    &self.clips
  }

  pub fn clips_mut(&mut self) -> &mut ClipTrack<NotesClip> {
    &mut self.clips
  }
}

impl Default for MidiTrack {
  fn default() -> MidiTrack {
    MidiTrack::new()
  }
}
