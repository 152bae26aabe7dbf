//! Wall-clock time value and digit-wheel arithmetic.
//!
//! A [`Time`] is edited one BCD digit at a time:
//! ```text
//!   H H : M M
//!   0 1   2 3   ← Digit index
//! ```
//! Each digit has fixed bounds, except hour-units which is capped to 3
//! while hour-tens is 2. The bounds live in one table ([`DIGIT_BOUNDS`]);
//! [`Time::adjust`] is the only routine that walks it.

use core::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Hour and minute of a 24-hour clock. Always a legal time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    hours: u8,
    minutes: u8,
}

/// Digit positions of an `HH:MM` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    HourTens = 0,
    HourUnits = 1,
    MinuteTens = 2,
    MinuteUnits = 3,
}

/// Direction of a single digit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

/// Upper bound that replaces the normal one while a sibling digit holds a
/// given value.
#[derive(Clone, Copy, Debug)]
pub struct Cap {
    pub sibling: Digit,
    pub when: u8,
    pub max: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct DigitBounds {
    pub min: u8,
    pub max: u8,
    pub cap: Option<Cap>,
}

/// Per-digit bounds, indexed by [`Digit`].
pub const DIGIT_BOUNDS: [DigitBounds; 4] = [
    DigitBounds { min: 0, max: 2, cap: None },
    DigitBounds {
        min: 0,
        max: 9,
        cap: Some(Cap { sibling: Digit::HourTens, when: 2, max: 3 }),
    },
    DigitBounds { min: 0, max: 5, cap: None },
    DigitBounds { min: 0, max: 9, cap: None },
];

impl Digit {
    pub const ALL: [Digit; 4] = [
        Digit::HourTens,
        Digit::HourUnits,
        Digit::MinuteTens,
        Digit::MinuteUnits,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next digit to the right, wrapping to hour-tens.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Next digit to the left, wrapping to minute-units.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }
}

fn upper_bound(digits: &[u8; 4], digit: Digit) -> u8 {
    let bounds = &DIGIT_BOUNDS[digit.index()];
    match bounds.cap {
        Some(cap) if digits[cap.sibling.index()] == cap.when => cap.max,
        _ => bounds.max,
    }
}

impl Time {
    pub const MIDNIGHT: Time = Time { hours: 0, minutes: 0 };

    /// Returns `None` unless `hours < 24` and `minutes < 60`.
    pub const fn new(hours: u8, minutes: u8) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    pub const fn hours(self) -> u8 {
        self.hours
    }

    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Minutes since midnight.
    pub const fn total_minutes(self) -> u16 {
        self.hours as u16 * 60 + self.minutes as u16
    }

    /// Minutes from `self` until the next occurrence of `target`.
    ///
    /// Always in `1..=1440`: an equal or earlier target means tomorrow.
    pub fn minutes_until(self, target: Time) -> u16 {
        let now = self.total_minutes();
        let then = target.total_minutes();
        if then <= now {
            then + MINUTES_PER_DAY - now
        } else {
            then - now
        }
    }

    pub fn digits(self) -> [u8; 4] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
        ]
    }

    pub fn digit(self, digit: Digit) -> u8 {
        self.digits()[digit.index()]
    }

    fn from_digits(d: [u8; 4]) -> Self {
        Self {
            hours: d[0] * 10 + d[1],
            minutes: d[2] * 10 + d[3],
        }
    }

    /// Step one digit, wrapping inside its bounds, then re-clamp every
    /// digit whose cap depends on the one that changed.
    pub fn adjust(self, digit: Digit, step: Step) -> Self {
        let mut d = self.digits();
        let i = digit.index();
        let min = DIGIT_BOUNDS[i].min;
        let max = upper_bound(&d, digit);

        d[i] = match step {
            Step::Increment if d[i] >= max => min,
            Step::Increment => d[i] + 1,
            Step::Decrement if d[i] <= min => max,
            Step::Decrement => d[i] - 1,
        };

        for other in Digit::ALL {
            let cap = upper_bound(&d, other);
            if d[other.index()] > cap {
                d[other.index()] = cap;
            }
        }

        Self::from_digits(d)
    }
}

/// `HH:MM`, zero padded.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
