//! Helper macros


/// Count the number of comma separated expressions
// mutliple version to limit recursion
#[macro_export]
macro_rules! count_exprs {
    ($_a:expr, $_b:expr, $_c:expr, $_d:expr, $_e:expr,
     $_f:expr, $_g:expr, $_h:expr, $_i:expr, $_j:expr,
     $($rest:expr),+ $(,)?) => {
        10usize + $crate::count_exprs!($($rest),+)
    };
    ($_a:expr, $_b:expr, $_c:expr, $_d:expr, $_e:expr,
     $($rest:expr),+ $(,)?) => {
        5usize + $crate::count_exprs!($($rest),+)
    };
    ($_first:expr, $($rest:expr),+ $(,)?) => {
        1usize + $crate::count_exprs!($($rest),+)
    };
    ($_first:expr $(,)?) => {
        1usize
    };
    () => {
        0usize
    };
}

/// Get the name of the surrounding function
#[macro_export]
macro_rules! func_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn count_exprs_counts_all_arities() {
        assert_eq!(count_exprs!(), 0);
        assert_eq!(count_exprs!(1), 1);
        assert_eq!(count_exprs!(1, 2, 3,), 3);
        assert_eq!(count_exprs!(1, 2, 3, 4, 5, 6, 7), 7);
        assert_eq!(count_exprs!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22), 23);
    }

    #[test]
    fn func_name_strips_helper() {
        let name = func_name!();
        assert!(name.ends_with("func_name_strips_helper"));
    }
}
