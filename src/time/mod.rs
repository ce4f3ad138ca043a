pub mod tempo;
pub mod value;

pub use self::tempo::Tempo;
pub use self::value::{TimeUnit, TimeValue, PPQN, PULSES_PER_BAR};

pub type Seconds = f64;
