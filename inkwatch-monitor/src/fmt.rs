//! Logging macros
//!
//! Forward to `defmt` with the `defmt` feature enabled. Without it the
//! arguments are still evaluated by reference and then dropped, so host
//! builds need no global logger.
#![macro_use]
#![allow(unused_macros)]

macro_rules! log_with {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::$level!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($($arg:tt)*) => { log_with!(debug, $($arg)*) };
}

macro_rules! info {
    ($($arg:tt)*) => { log_with!(info, $($arg)*) };
}

macro_rules! warn {
    ($($arg:tt)*) => { log_with!(warn, $($arg)*) };
}

macro_rules! error {
    ($($arg:tt)*) => { log_with!(error, $($arg)*) };
}
