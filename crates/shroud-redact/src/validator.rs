//! Content validators that confirm a pattern match is plausible

use std::fmt;

/// Validation strategy attached to a pattern.
///
/// Validators are total: anything they cannot make sense of is rejected,
/// which leaves the candidate text unredacted.
#[derive(Clone, Copy, Default)]
pub enum Validator {
    /// Every match is accepted
    #[default]
    None,

    /// Payment-card style digit run passing the Luhn checksum
    Luhn,

    /// Caller-supplied predicate
    Custom(fn(&str) -> bool),
}

impl Validator {
    pub fn validate(&self, candidate: &str) -> bool {
        match self {
            Validator::None => true,
            Validator::Luhn => luhn_valid(candidate),
            Validator::Custom(check) => check(candidate),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Validator::None => "none",
            Validator::Luhn => "luhn",
            Validator::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Luhn checksum over the digits of `number`, ignoring any other characters.
/// Only 13 to 19 digit sequences can pass.
pub fn luhn_valid(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    checksum % 10 == 0
}
