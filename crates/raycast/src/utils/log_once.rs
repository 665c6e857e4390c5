//! Logging helpers for code that runs once per ray.
//!
//! A problem hit while shading is usually hit by every pixel, so these macros
//! only log the first occurence of each call site.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            if log::log_enabled!(target: $target, $lvl) {
                log::log!(target: $target, $lvl, $($arg)+);
            }
        });
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => (
        $crate::log_once!(target: $target, log::Level::Warn, $($arg)+)
    );
    ($($arg:tt)+) => (
        $crate::log_once!(log::Level::Warn, $($arg)+)
    );
}

#[macro_export]
macro_rules! error_once {
    (target: $target:expr, $($arg:tt)+) => (
        $crate::log_once!(target: $target, log::Level::Error, $($arg)+)
    );
    ($($arg:tt)+) => (
        $crate::log_once!(log::Level::Error, $($arg)+)
    );
}
