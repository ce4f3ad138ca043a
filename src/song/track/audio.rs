use crate::song::clips::audio::AudioClip;
use crate::song::track::ClipTrack;

/// Track holding audio regions; all clip positions are in seconds.
pub struct AudioTrack {
  clips: ClipTrack<AudioClip>,
}

impl AudioTrack {
  pub fn new() -> AudioTrack {
    AudioTrack {
      clips: ClipTrack::new(),
    }
  }

  pub fn clips(&self) -> &ClipTrack<AudioClip> {
    &self.clips
  }

  pub fn clips_mut(&mut self) -> &mut ClipTrack<AudioClip> {
    &mut self.clips
  }
}

impl Default for AudioTrack {
  fn default() -> AudioTrack {
    AudioTrack::new()
  }
}
