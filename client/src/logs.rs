use colored::Color;

/// Format a key/value pair with optional color overrides.
///
/// Requires the `colored::Colorize` trait to be in scope.
///
/// Forms, where `key_color` and `value_color` are `LogColor` values:
/// - fmt_kv!(key, value)
/// - fmt_kv!(key, value, key_color)
/// - fmt_kv!(key, value, key_color, value_color)
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $crate::LogColor::Accent, $crate::LogColor::Dim)
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $key_color, $crate::LogColor::Dim)
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {{
        let __k = ::std::string::ToString::to_string(&$key);
        let __v = ::std::string::ToString::to_string(&$value);
        ::std::format!("{}: {}", __k.color($key_color), __v.color($value_color))
    }};
}

/// Prints a key/value pair with optional color overrides, in the same forms as [`fmt_kv!`].
#[macro_export]
macro_rules! print_kv {
    ($key:expr, $value:expr $(,)?) => {
        ::std::println!("{}", $crate::fmt_kv!($key, $value))
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        ::std::println!("{}", $crate::fmt_kv!($key, $value, $key_color))
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {
        ::std::println!(
            "{}",
            $crate::fmt_kv!($key, $value, $key_color, $value_color)
        )
    };
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Header,
    Accent,
    Info,
    Warning,
    Error,
    Gray,
    Dim,
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn fmt_divider() -> String { "------------------------------------------------------------------".into() }

    pub fn log_divider() { println!("{}", fmt_divider()); }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Header  => Color::TrueColor { r: 186, g: 85,  b: 211 },
                LogColor::Accent  => Color::TrueColor { r: 255, g: 200, b: 100 },
                LogColor::Info    => Color::TrueColor { r: 80,  g: 160, b: 255 },
                LogColor::Warning => Color::TrueColor { r: 210, g: 120, b: 0   },
                LogColor::Error   => Color::TrueColor { r: 235, g: 40,  b: 60  },
                LogColor::Gray    => Color::TrueColor { r: 180, g: 180, b: 180 },
                LogColor::Dim     => Color::TrueColor { r: 110, g: 110, b: 110 },
            }
        }
    }
}

pub use unformatted::*;

#[cfg(test)]
mod tests {
    use colored::Colorize;

    use super::*;

    #[test]
    fn test_fmt_and_print_kv_forms() {
        let _ = fmt_kv!("address", "abc");
        let _ = fmt_kv!("address", "abc", LogColor::Info);
        let _ = fmt_kv!("address", "abc", LogColor::Info, LogColor::Gray);
        print_kv!("address", "abc");
        print_kv!("address", "abc", LogColor::Warning);
        print_kv!("address", "abc", LogColor::Warning, LogColor::Dim);
        log_divider();
    }
}
