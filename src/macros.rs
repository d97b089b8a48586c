#[cfg(feature = "tracing")]
macro_rules! btrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "bitree", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! btrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "bitree", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "bitree", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bwarn {
    ($($tt:tt)*) => {};
}
