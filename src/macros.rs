// originally by https://github.com/smoltcp-rs/smoltcp/blob/master/src/macros.rs
#[cfg(not(test))]
#[cfg(feature = "log")]
macro_rules! cs_log {
    (trace, $($arg:expr),*) => { log::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { log::debug!($($arg),*) };
    (warn, $($arg:expr),*) => { log::warn!($($arg),*) };
}

#[cfg(test)]
#[cfg(feature = "log")]
macro_rules! cs_log {
    (trace, $($arg:expr),*) => { println!($($arg),*) };
    (debug, $($arg:expr),*) => { println!($($arg),*) };
    (warn, $($arg:expr),*) => { println!($($arg),*) };
}

#[cfg(not(feature = "log"))]
macro_rules! cs_log {
    ($level:ident, $($arg:expr),*) => {{ $( let _ = $arg; )* }}
}

macro_rules! cs_trace {
    ($($arg:expr),*) => (cs_log!(trace, $($arg),*));
}

macro_rules! cs_debug {
    ($($arg:expr),*) => (cs_log!(debug, $($arg),*));
}

macro_rules! cs_warn {
    ($($arg:expr),*) => (cs_log!(warn, $($arg),*));
}
