#[allow(dead_code)]
pub fn log(level: &str, args: std::fmt::Arguments<'_>) {
    eprintln!("[{}] {}", level, args);
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log_trace")]
        {
            $crate::logger::log("TRACE", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(any(feature = "log_trace", feature = "log_debug"))]
        {
            $crate::logger::log("DEBUG", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(any(feature = "log_trace", feature = "log_debug", feature = "log_info"))]
        {
            $crate::logger::log("INFO", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(any(
            feature = "log_trace",
            feature = "log_debug",
            feature = "log_info",
            feature = "log_warn"
        ))]
        {
            $crate::logger::log("WARN", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(any(
            feature = "log_trace",
            feature = "log_debug",
            feature = "log_info",
            feature = "log_warn",
            feature = "log_error"
        ))]
        {
            $crate::logger::log("ERROR", format_args!($($arg)*));
        }
    }};
}
