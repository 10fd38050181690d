use super::RanOutOfAttempts;

/// Calls `gen` until it produces a value, giving up after `attempts` calls
pub(in super) fn attempt<T, F>(attempts: usize, mut gen: F) -> Result<T, RanOutOfAttempts>
    where F: FnMut() -> Option<T>,
{
    (0..attempts).find_map(|_| gen()).ok_or(RanOutOfAttempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_success() {
        let mut calls = 0;
        let value = attempt(10, || {
            calls += 1;
            if calls == 3 { Some(calls * 10) } else { None }
        });
        assert_eq!(value.ok(), Some(30));
        assert_eq!(calls, 3);
    }

    #[test]
    fn gives_up_after_budget() {
        let mut calls = 0;
        let value: Result<(), _> = attempt(5, || { calls += 1; None });
        assert!(value.is_err());
        assert_eq!(calls, 5);

        assert!(attempt(0, || Some(())).is_err());
    }
}
