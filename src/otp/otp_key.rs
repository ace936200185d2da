/// Key input of the OTP entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OtpKey {
    /// Character typed into the focused slot.
    Char(char),
    Backspace,
    ArrowLeft,
    ArrowRight,
    /// Focuses the slot with the specified index, selecting its content.
    Focus(usize),
}
