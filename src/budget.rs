//! Concurrency budget derivation
//!
//! Every probe holds an open connection, so the worker-pool width is bounded
//! by the process file-descriptor ceiling. A 0.7 margin reserves descriptors
//! for stdio, the report connection, and anything else the process holds open.

/// Fraction of the descriptor ceiling available to probe workers
const FD_HEADROOM: f64 = 0.7;

/// Discover the soft file-descriptor limit for this process
///
/// Returns `None` when the limit cannot be discovered; that is a degraded
/// mode, not an error.
#[cfg(unix)]
pub fn fd_ceiling() -> Option<u64> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: getrlimit writes into the rlimit struct we own and returns
    // non-zero on failure, which we check before reading it.
    let rc = unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut limit) };
    if rc == 0 {
        Some(limit.rlim_cur)
    } else {
        None
    }
}

/// Discover the soft file-descriptor limit for this process
#[cfg(not(unix))]
pub fn fd_ceiling() -> Option<u64> {
    None
}

/// Compute the effective worker count for a run
///
/// Returns `configured` when the ceiling is unavailable or not binding,
/// otherwise `floor(ceiling * 0.7)`. Never returns zero.
pub fn effective_workers(configured: usize, ceiling: Option<u64>) -> usize {
    let effective = match ceiling {
        Some(fd) if (fd as usize) < configured => (fd as f64 * FD_HEADROOM).floor() as usize,
        _ => configured,
    };
    effective.max(1)
}
