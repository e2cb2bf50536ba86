// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`.
/// `join!(a)` is just `s!(a)`; more pieces are appended in order.
#[macro_export]
macro_rules! join {
    ($only:expr $(,)?) => {
        ::std::string::String::from($only)
    };
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_appends_in_order() {
        assert_eq!(join!("Grand", " ", "Hotel"), "Grand Hotel");
        assert_eq!(join!("solo"), "solo");
        assert_eq!(s!(), "");
    }
}
