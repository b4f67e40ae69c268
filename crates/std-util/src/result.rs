/// Unwraps the `Err` variant of a `Result`, panicking with the `Ok` value
/// (and an optional formatted message) otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps the `Ok` variant of a `Result`, panicking with the error's
/// display output (and an optional formatted message) otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(e) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Ok`; error={}", e);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}
