/// Cooperative termination check, polled once per loop iteration.
pub trait QuitSignal {
    fn should_terminate(&mut self) -> bool;
}

/// Never requests termination.
pub struct NeverQuit;

impl QuitSignal for NeverQuit {
    fn should_terminate(&mut self) -> bool {
        false
    }
}

/// Whether a raw key code from a key poll names `key`.
///
/// Only the low byte is compared; backends may set modifier bits above it.
/// Negative codes mean no key was pressed.
pub fn is_key(code: i32, key: char) -> bool {
    code >= 0 && (code & 0xFF) as u32 == key as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_q(113, true)]
    #[case::q_with_high_bits(0x10_0071, true)]
    #[case::no_key(-1, false)]
    #[case::other_key(b'x' as i32, false)]
    #[case::upper_q(b'Q' as i32, false)]
    fn test_is_key(#[case] code: i32, #[case] expected: bool) {
        assert_eq!(is_key(code, 'q'), expected);
    }

    #[test]
    fn test_never_quit() {
        let mut signal = NeverQuit;
        assert!(!signal.should_terminate());
        assert!(!signal.should_terminate());
    }
}
