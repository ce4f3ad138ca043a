use std::cmp::Ordering;

use failure::Fail;

use crate::song::clips::TimelineClip;
use crate::time::TimeValue;

#[derive(Debug, Fail)]
pub enum InvariantError {
  #[fail(display = "clip {} has negative length: [{}, {})", index, start, end)]
  NegativeLength {
    index: usize,
    start: TimeValue,
    end: TimeValue,
  },

  #[fail(display = "clips out of order at {}: start {} after start {}", index, start, prev_start)]
  OutOfOrder {
    index: usize,
    prev_start: TimeValue,
    start: TimeValue,
  },

  #[fail(display = "clips overlap at {}: start {} before previous end {}", index, start, prev_end)]
  Overlap {
    index: usize,
    prev_end: TimeValue,
    start: TimeValue,
  },
}

/// Confirms the sequence is sorted by start and free of overlaps in a single
/// pass. Every mutating track operation must leave this holding; a failure
/// here is an engine bug, not user error.
pub fn check<C>(clips: &[C]) -> Result<(), InvariantError>
where
  C: TimelineClip,
{
  let mut prev: Option<(TimeValue, TimeValue)> = None;
  for (index, clip) in clips.iter().enumerate() {
    let start = clip.timeline_start();
    let end = clip.timeline_end();
    if end.cmp_same_unit(&start) == Ordering::Less {
      return Err(InvariantError::NegativeLength { index, start, end });
    }
    if let Some((prev_start, prev_end)) = prev {
      if start.cmp_same_unit(&prev_start) == Ordering::Less {
        return Err(InvariantError::OutOfOrder {
          index,
          prev_start,
          start,
        });
      }
      if start.cmp_same_unit(&prev_end) == Ordering::Less {
        return Err(InvariantError::Overlap {
          index,
          prev_end,
          start,
        });
      }
    }
    prev = Some((start, end));
  }
  Ok(())
}

#[cfg(test)]
mod test {

  use std::sync::{Arc, RwLock};

  use super::{check, InvariantError};
  use crate::song::clips::audio::{AudioClip, AudioSource};
  use crate::time::TimeValue;

  fn clip(start: f64, end: f64) -> AudioClip {
    let source = Arc::new(RwLock::new(AudioSource::new(44100, 1, Vec::new())));
    AudioClip::new("clip", TimeValue::seconds(start), TimeValue::seconds(end), source)
  }

  #[test]
  pub fn empty_is_valid() {
    assert!(check::<AudioClip>(&[]).is_ok());
  }

  #[test]
  pub fn sorted_adjacent_is_valid() {
    let clips = vec![clip(0.0, 2.0), clip(2.0, 5.0), clip(7.0, 9.0)];
    assert!(check(&clips).is_ok());
  }

  #[test]
  pub fn detects_out_of_order() {
    let clips = vec![clip(5.0, 6.0), clip(0.0, 2.0)];
    match check(&clips) {
      Err(InvariantError::OutOfOrder { index, .. }) => assert_eq!(index, 1),
      other => panic!("expected out of order, got {:?}", other.err()),
    }
  }

  #[test]
  pub fn detects_overlap() {
    let clips = vec![clip(0.0, 3.0), clip(2.0, 5.0)];
    match check(&clips) {
      Err(InvariantError::Overlap { index, .. }) => assert_eq!(index, 1),
      other => panic!("expected overlap, got {:?}", other.err()),
    }
  }

  #[test]
  pub fn detects_negative_length() {
    let clips = vec![clip(3.0, 1.0)];
    assert!(check(&clips).is_err());
  }
}
