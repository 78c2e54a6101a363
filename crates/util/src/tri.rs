//! Macros related to [`Option`] and [`Result`]

/// Macro for easy error logging.
///
/// Used on [`Result`], if it is [`Err`], log the pretty printed error value using
/// [`tracing::error`], and if context is provided, it is added after the error value.
/// The context can be string literal, or a format string with arguments.
///
/// This macro doesn't affect the input [`Result`], and it is returned as is.
///
/// This macro should only be use at top level code to avoid double logging
/// ```
/// # use util::ctx;
/// use anyhow::Result;
///
/// fn build_fragment() -> Result<String> {
///     // ...
///     # Ok("<div/>".to_string())
/// }
///
/// fn publish(fragment: &str) -> Result<()> {
///     // ...
///     # Ok(())
/// }
///
/// fn build_then_publish() -> Result<()> {
///     let fragment = ctx!(build_fragment());
///     if let Ok(fragment) = fragment {
///         ctx!(publish(&fragment), "Failed to publish fragment")?;
///     }
///     Ok(())
/// }
/// ```
///
/// [`Err`]: std::result::Result::Err
#[macro_export]
macro_rules! ctx {
    ($result:expr) => {
        $result.map_err(|why| {
            ::tracing::error!("{:#}", why);
            why
        })
    };
    ($result:expr, $ctx:literal) => {
        $result.map_err(|why| {
            ::tracing::error!("{}: {:#}", $ctx, why);
            why
        })
    };
    ($result:expr, $($ctx:tt)+) => {
        $result.map_err(|why| {
            let ctx = ::std::format!($($ctx)+);
            ::tracing::error!("{}: {:#}", ctx, why);
            why
        })
    };
}

/// Same as the [`ctx`] macro but logged at warn level
///
/// [`ctx`] crate::ctx
#[macro_export]
macro_rules! ctxw {
    ($result:expr) => {
        $result.map_err(|why| {
            ::tracing::warn!("{:#}", why);
            why
        })
    };
    ($result:expr, $ctx:literal) => {
        $result.map_err(|why| {
            ::tracing::warn!("{}: {:#}", $ctx, why);
            why
        })
    };
    ($result:expr, $($ctx:tt)+) => {
        $result.map_err(|why| {
            let ctx = ::std::format!($($ctx)+);
            ::tracing::warn!("{}: {:#}", ctx, why);
            why
        })
    };
}

/// Unwraps [`Ok`] otherwise evaluates specified expression.
///
/// This macro behaves similar to [`Result::unwrap_or`].
///
/// If a context was given, it will log the error value along with the context via
/// [`tracing::error`] if the value is [`Err`].
/// The context can be string literal, or a format string with arguments.
/// ```
/// # use util::ok;
/// use anyhow::Result;
///
/// struct Loader;
///
/// impl Loader {
///     fn new() -> Result<Self> {
///         // ...
///         # Ok(Loader)
///     }
///
///     fn user_count(&self) -> Result<i64> {
///         // ...
///         # Ok(1)
///     }
/// }
///
/// fn user_count(default: i64) -> Option<i64> {
///     let loader = ok!(Loader::new(), "Failed to get loader", return None);
///     let count = ok!(loader.user_count(), default);
///     Some(count)
/// }
/// ```
///
/// [`Ok`]: std::result::Result::Ok
/// [`Err`]: std::result::Result::Err
#[macro_export]
macro_rules! ok {
    ($arg:expr, $fail:expr) => {
        match $arg {
            Ok(v) => v,
            Err(_) => $fail,
        }
    };
    ($arg:expr, $ctx:literal, $fail:expr) => {
        match $arg {
            Ok(v) => v,
            Err(why) => {
                ::tracing::error!("{}: {:#}", $ctx, why);
                $fail
            }
        }
    };
}

/// Unwraps [`Some`] otherwise evaluates specified expression.
///
/// This macro behaves similar to [`Option::unwrap_or`].
///
/// Return unwrapped Some value otherwise return specified expression
/// If a context was given, it will log the context via [`tracing::error`] if the
/// value is [`None`].
/// The context can be string literal, or a format string with arguments.
/// ```
/// # use util::some;
/// struct Roster;
///
/// impl Roster {
///     fn new() -> Option<Self> {
///         // ...
///         # Some(Roster)
///     }
///
///     fn first_name(&self) -> Option<String> {
///         // ...
///         # Some("MfAmazon".to_string())
///     }
/// }
///
/// fn first_name() -> Option<String> {
///     let roster = some!(Roster::new(), "Failed to get roster", return None);
///     Some(some!(roster.first_name(), String::new()))
/// }
/// ```
///
/// [`Some`]: std::option::Option::Some
/// [`None`]: std::option::Option::None
#[macro_export]
macro_rules! some {
    ($arg:expr, $fail:expr) => {
        match $arg {
            Some(v) => v,
            None => $fail,
        }
    };
    ($arg:expr, $ctx:literal, $fail:expr) => {
        match $arg {
            Some(v) => v,
            None => {
                ::tracing::error!($ctx);
                $fail
            }
        }
    };
}
