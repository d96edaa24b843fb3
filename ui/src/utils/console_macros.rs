/// Macros for timestamped browser console logging
/// These wrap gloo_console and format eagerly so only plain strings cross into
/// JS. Only call them from code that runs in the browser; target-independent
/// logic logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_timestamped {
    ($level:ident, $fmt:expr) => {
        $crate::__macro_support::gloo_console::$level!(format!(
            "[{}] {}",
            $crate::__macro_support::js_sys::Date::now(),
            $fmt
        ))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::__macro_support::gloo_console::$level!(format!(
            "[{}] {}",
            $crate::__macro_support::js_sys::Date::now(),
            format!($fmt, $($arg)*)
        ))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::__console_timestamped!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::__console_timestamped!(warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::__console_timestamped!(error, $($arg)*)
    };
}
