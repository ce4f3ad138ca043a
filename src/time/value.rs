use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::time::Tempo;

pub const PPQN: u64 = 24;

pub const BEATS_PER_BAR: u64 = 4;

pub const PULSES_PER_BAR: u64 = PPQN * BEATS_PER_BAR;

const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
  Seconds,
  Pulses,
  Bars,
}

/// A timeline position or length tagged with its unit.
///
/// Same-unit arithmetic and comparison go through the `Add`/`Sub`/`PartialOrd`
/// operator impls and never need a tempo. Anything crossing units goes through
/// the tempo-taking methods (`to_unit`, `add`, `sub`, `compare`), which convert
/// the second operand into the first operand's unit before combining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeValue {
  value: f64,
  unit: TimeUnit,
}

impl TimeValue {
  pub fn new(value: f64, unit: TimeUnit) -> TimeValue {
    TimeValue { value, unit }
  }

  pub fn seconds(value: f64) -> TimeValue {
    TimeValue::new(value, TimeUnit::Seconds)
  }

  pub fn pulses(value: f64) -> TimeValue {
    TimeValue::new(value, TimeUnit::Pulses)
  }

  pub fn bars(value: f64) -> TimeValue {
    TimeValue::new(value, TimeUnit::Bars)
  }

  pub fn zero(unit: TimeUnit) -> TimeValue {
    TimeValue::new(0.0, unit)
  }

  pub fn get_value(&self) -> f64 {
    self.value
  }

  pub fn get_unit(&self) -> TimeUnit {
    self.unit
  }

  /// Converts into `target` using `tempo`. Same-unit conversion is the
  /// identity and ignores the tempo.
  ///
  /// Seconds map to pulses truncating (`floor`), matching MIDI-resolution
  /// quantization, so a seconds -> pulses -> seconds round trip may lose up
  /// to one pulse-width.
  pub fn to_unit(&self, target: TimeUnit, tempo: Tempo) -> TimeValue {
    if self.unit == target {
      return *self;
    }
    TimeValue::new(Self::from_pulses(self.to_pulses(tempo), target, tempo), target)
  }

  pub fn add(&self, rhs: TimeValue, tempo: Tempo) -> TimeValue {
    *self + rhs.to_unit(self.unit, tempo)
  }

  pub fn sub(&self, rhs: TimeValue, tempo: Tempo) -> TimeValue {
    *self - rhs.to_unit(self.unit, tempo)
  }

  pub fn compare(&self, rhs: TimeValue, tempo: Tempo) -> Ordering {
    let rhs = rhs.to_unit(self.unit, tempo);
    self
      .value
      .partial_cmp(&rhs.value)
      .unwrap_or(Ordering::Equal)
  }

  /// Same-unit total order. Mixing units here is a caller bug: positions on
  /// one track share a single unit, so this panics instead of converting.
  pub fn cmp_same_unit(&self, other: &TimeValue) -> Ordering {
    assert_eq!(
      self.unit, other.unit,
      "cannot compare time values of different units without a tempo"
    );
    self
      .value
      .partial_cmp(&other.value)
      .unwrap_or(Ordering::Equal)
  }

  fn to_pulses(&self, tempo: Tempo) -> f64 {
    match self.unit {
      TimeUnit::Pulses => self.value,
      TimeUnit::Bars => self.value * PULSES_PER_BAR as f64,
      TimeUnit::Seconds => {
        (self.value * PPQN as f64 * f64::from(tempo) / SECONDS_PER_MINUTE).floor()
      }
    }
  }

  fn from_pulses(pulses: f64, target: TimeUnit, tempo: Tempo) -> f64 {
    match target {
      TimeUnit::Pulses => pulses,
      TimeUnit::Bars => pulses / PULSES_PER_BAR as f64,
      TimeUnit::Seconds => pulses * SECONDS_PER_MINUTE / (PPQN as f64 * f64::from(tempo)),
    }
  }
}

impl PartialOrd for TimeValue {
  fn partial_cmp(&self, other: &TimeValue) -> Option<Ordering> {
    if self.unit == other.unit {
      self.value.partial_cmp(&other.value)
    } else {
      None
    }
  }
}

impl Add for TimeValue {
  type Output = TimeValue;
  fn add(self, rhs: TimeValue) -> TimeValue {
    assert_eq!(self.unit, rhs.unit, "cannot add time values of different units without a tempo");
    TimeValue::new(self.value + rhs.value, self.unit)
  }
}

impl AddAssign for TimeValue {
  fn add_assign(&mut self, rhs: TimeValue) {
    *self = *self + rhs;
  }
}

impl Sub for TimeValue {
  type Output = TimeValue;
  fn sub(self, rhs: TimeValue) -> TimeValue {
    assert_eq!(
      self.unit, rhs.unit,
      "cannot subtract time values of different units without a tempo"
    );
    TimeValue::new(self.value - rhs.value, self.unit)
  }
}

impl SubAssign for TimeValue {
  fn sub_assign(&mut self, rhs: TimeValue) {
    *self = *self - rhs;
  }
}

impl fmt::Display for TimeValue {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.unit {
      TimeUnit::Seconds => write!(f, "{}s", self.value),
      TimeUnit::Pulses => write!(f, "{}p", self.value),
      TimeUnit::Bars => write!(f, "{}b", self.value),
    }
  }
}

#[cfg(test)]
mod test {

  use std::cmp::Ordering;

  use super::{TimeUnit, TimeValue, PPQN, PULSES_PER_BAR};
  use crate::time::Tempo;

  #[test]
  pub fn new() {
    let time = TimeValue::new(1.5, TimeUnit::Seconds);
    assert_eq!(time.get_value(), 1.5);
    assert_eq!(time.get_unit(), TimeUnit::Seconds);
  }

  #[test]
  pub fn seconds_to_pulses() {
    let tempo = Tempo::new(120);
    let pulses = TimeValue::seconds(1.0).to_unit(TimeUnit::Pulses, tempo);
    // 1s at 120 BPM = 2 beats = 48 pulses
    assert_eq!(pulses, TimeValue::pulses(48.0));
  }

  #[test]
  pub fn seconds_to_pulses_truncates() {
    let tempo = Tempo::new(120);
    let pulses = TimeValue::seconds(0.51).to_unit(TimeUnit::Pulses, tempo);
    // 0.51 * 48 = 24.48 pulses, floored
    assert_eq!(pulses, TimeValue::pulses(24.0));
  }

  #[test]
  pub fn pulses_to_seconds() {
    let tempo = Tempo::new(120);
    let seconds = TimeValue::pulses(48.0).to_unit(TimeUnit::Seconds, tempo);
    assert_eq!(seconds, TimeValue::seconds(1.0));
  }

  #[test]
  pub fn bars_to_pulses() {
    let tempo = Tempo::new(97);
    let pulses = TimeValue::bars(2.0).to_unit(TimeUnit::Pulses, tempo);
    assert_eq!(pulses, TimeValue::pulses(2.0 * PULSES_PER_BAR as f64));
  }

  #[test]
  pub fn pulses_to_bars() {
    let tempo = Tempo::new(97);
    let bars = TimeValue::pulses(144.0).to_unit(TimeUnit::Bars, tempo);
    assert_eq!(bars, TimeValue::bars(1.5));
  }

  #[test]
  pub fn same_unit_conversion_is_identity() {
    let tempo = Tempo::new(140);
    let time = TimeValue::seconds(0.333);
    assert_eq!(time.to_unit(TimeUnit::Seconds, tempo), time);
  }

  #[test]
  pub fn round_trip_within_one_pulse() {
    for &tempo_value in &[60u16, 97, 120, 178] {
      let tempo = Tempo::new(tempo_value);
      let pulse_width = 60.0 / (PPQN as f64 * f64::from(tempo));
      for &s in &[0.0, 0.123, 1.0, 2.71828, 17.5] {
        let back = TimeValue::seconds(s)
          .to_unit(TimeUnit::Pulses, tempo)
          .to_unit(TimeUnit::Seconds, tempo);
        let diff = (s - back.get_value()).abs();
        assert!(diff <= pulse_width, "{} -> {} at {} BPM", s, back, tempo_value);
      }
    }
  }

  #[test]
  pub fn add_same_unit() {
    let result = TimeValue::pulses(100.0) + TimeValue::pulses(50.0);
    assert_eq!(result, TimeValue::pulses(150.0));
  }

  #[test]
  pub fn sub_same_unit() {
    let result = TimeValue::seconds(3.5) - TimeValue::seconds(1.25);
    assert_eq!(result, TimeValue::seconds(2.25));
  }

  #[test]
  #[should_panic]
  pub fn add_mixed_units_panics() {
    let _ = TimeValue::seconds(1.0) + TimeValue::pulses(1.0);
  }

  #[test]
  pub fn add_cross_unit_with_tempo() {
    let tempo = Tempo::new(120);
    let result = TimeValue::seconds(1.0).add(TimeValue::pulses(48.0), tempo);
    assert_eq!(result, TimeValue::seconds(2.0));
  }

  #[test]
  pub fn compare_cross_unit() {
    let tempo = Tempo::new(120);
    let one_second = TimeValue::seconds(1.0);
    assert_eq!(one_second.compare(TimeValue::pulses(24.0), tempo), Ordering::Greater);
    assert_eq!(one_second.compare(TimeValue::pulses(48.0), tempo), Ordering::Equal);
    assert_eq!(one_second.compare(TimeValue::bars(1.0), tempo), Ordering::Less);
  }

  #[test]
  pub fn partial_ord_same_unit() {
    assert!(TimeValue::pulses(10.0) < TimeValue::pulses(20.0));
    assert!(TimeValue::pulses(20.0) >= TimeValue::pulses(20.0));
  }

  #[test]
  pub fn partial_ord_mixed_units_is_none() {
    let seconds = TimeValue::seconds(1.0);
    let pulses = TimeValue::pulses(1.0);
    assert_eq!(seconds.partial_cmp(&pulses), None);
  }

  #[test]
  pub fn cmp_same_unit() {
    let time1 = TimeValue::seconds(1.0);
    let time2 = TimeValue::seconds(2.0);
    assert_eq!(time1.cmp_same_unit(&time2), Ordering::Less);
    assert_eq!(time2.cmp_same_unit(&time1), Ordering::Greater);
    assert_eq!(time1.cmp_same_unit(&time1), Ordering::Equal);
  }

  #[test]
  #[should_panic]
  pub fn cmp_same_unit_mixed_units_panics() {
    TimeValue::seconds(1.0).cmp_same_unit(&TimeValue::bars(1.0));
  }

  #[test]
  pub fn display() {
    assert_eq!(format!("{}", TimeValue::seconds(1.5)), "1.5s");
    assert_eq!(format!("{}", TimeValue::pulses(96.0)), "96p");
    assert_eq!(format!("{}", TimeValue::bars(2.0)), "2b");
  }
}
