use std::fmt::{Display, Formatter};

/// Number of digits in the one-time password.
pub const OTP_LENGTH: usize = 6;

/// Digit slots of the one-time password, every slot is either empty or holds a single numeral.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct OtpDigits([Option<char>; OTP_LENGTH]);

impl OtpDigits {
    /// Stores numeral in the slot with the specified index. Non-numerals are rejected.
    pub fn set(&mut self, index: usize, digit: char) -> bool {
        match self.0.get_mut(index) {
            Some(slot) if digit.is_ascii_digit() => {
                *slot = Some(digit);
                true
            }
            _ => false,
        }
    }

    /// Clears the slot with the specified index, returns `false` if it was already empty.
    pub fn clear(&mut self, index: usize) -> bool {
        self.0
            .get_mut(index)
            .and_then(|slot| slot.take())
            .is_some()
    }

    /// Clears all slots.
    pub fn clear_all(&mut self) {
        self.0 = [None; OTP_LENGTH];
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied().flatten()
    }

    /// Number of non-empty slots.
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled() == OTP_LENGTH
    }

    /// Returns the code to submit, only if all slots are filled.
    pub fn code(&self) -> Option<String> {
        self.0.iter().copied().collect()
    }
}

impl Display for OtpDigits {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, slot) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", slot.unwrap_or('_'))?;
        }

        Ok(())
    }
}
