//! Numeric counter animation and number formatting.

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};

/// Tick interval of counter animations (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Duration used for the dashboard's stat counters.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1000);

/// Format an integer with `,` thousands separators.
///
/// ```
/// assert_eq!(dashkit::animation::format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse the integer a counter element displays.
///
/// Separators are ignored and trailing text is dropped (`"1,250 SAR"` is
/// 1250). Anything without a leading integer reads as 0.
pub fn parse_counter(text: &str) -> i64 {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim_start();

    let sign_len = usize::from(cleaned.starts_with(['-', '+']));
    let digits_len = cleaned[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cleaned.len() - sign_len);

    cleaned[..sign_len + digits_len].parse().unwrap_or(0)
}

/// One rendered step of a counter animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub text: String,
    /// The animation has reached its end value.
    pub done: bool,
}

impl CounterFrame {
    fn new(value: i64, done: bool) -> Self {
        Self {
            value,
            text: format_number(value),
            done,
        }
    }
}

/// Counts a number from `start` to `end` in [`FRAME_INTERVAL`] steps.
///
/// Each tick adds a fixed increment; the value snaps to `end` on the first
/// tick that reaches or passes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: i64,
    pub end: i64,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// Count up from zero over [`COUNTER_DURATION`].
    pub fn to(end: i64) -> Self {
        Self::new(0, end, COUNTER_DURATION)
    }

    fn increment(&self) -> f64 {
        let frames = self.duration.as_secs_f64() / FRAME_INTERVAL.as_secs_f64();
        (self.end - self.start) as f64 / frames
    }

    /// The frame shown after `tick` ticks (tick 0 is the start value).
    pub fn frame(&self, tick: u32) -> CounterFrame {
        if tick == 0 {
            return CounterFrame::new(self.start, false);
        }

        let increment = self.increment();
        let current = self.start as f64 + increment * f64::from(tick);
        let reached = !increment.is_finite()
            || increment == 0.0
            || (increment > 0.0 && current >= self.end as f64)
            || (increment < 0.0 && current <= self.end as f64);

        if reached {
            CounterFrame::new(self.end, true)
        } else {
            CounterFrame::new(current.round() as i64, false)
        }
    }

    /// Run the animation on the tokio clock, handing each frame's text to
    /// `sink`. Returns after the final frame.
    pub async fn run(self, mut sink: impl FnMut(String)) {
        drive_frames(|tick| {
            let frame = self.frame(tick);
            sink(frame.text);
            frame.done
        })
        .await;
    }
}

/// Call `step` with tick 1, 2, ... every [`FRAME_INTERVAL`] until it returns
/// `true`.
pub async fn drive_frames(mut step: impl FnMut(u32) -> bool) {
    let mut ticker = interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately.
    ticker.tick().await;

    let mut tick = 0u32;
    loop {
        ticker.tick().await;
        tick += 1;
        if step(tick) {
            break;
        }
    }
}
