// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Compile a CSS selector, mapping the parse error into `ScrapeError::Selector`.
#[macro_export]
macro_rules! sel {
    ($css:expr) => {
        ::scraper::Selector::parse($css)
            .map_err(|e| $crate::error::ScrapeError::Selector {
                css: ::std::string::String::from($css),
                msg: e.to_string(),
            })
    };
}
