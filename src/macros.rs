//! Variadic print macros.

/// Print each value with no separators.
///
/// ```
/// let s = latchprint::build_string(|p| {
///     latchprint::prt!(p, "a", 1, 'b');
/// });
/// assert_eq!(s, "a1b");
/// ```
#[macro_export]
macro_rules! prt {
    ($p:expr $(, $arg:expr)* $(,)?) => {
        $p.print(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Print each value with no separators, then a newline.
#[macro_export]
macro_rules! prtln {
    ($p:expr $(, $arg:expr)* $(,)?) => {
        $p.println(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Print a formatted string.
#[macro_export]
macro_rules! prtf {
    ($p:expr, $($arg:tt)*) => {
        $p.printf(::std::format_args!($($arg)*))
    };
}

/// Print a formatted string, then a newline.
///
/// ```
/// let s = latchprint::build_string(|p| {
///     latchprint::prtfln!(p, "foobar {}", 10);
/// });
/// assert_eq!(s, "foobar 10\n");
/// ```
#[macro_export]
macro_rules! prtfln {
    ($p:expr, $($arg:tt)*) => {
        $p.printfln(::std::format_args!($($arg)*))
    };
}
