// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in [`Ok`]. With no arguments it evaluates to `Ok(())`.
///
/// ```
/// use termglow::ok;
/// fn unit() -> Result<(), ()> { ok!() }
/// fn value() -> Result<u8, ()> { ok!(42) }
/// assert_eq!(unit(), Ok(()));
/// assert_eq!(value(), Ok(42));
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
