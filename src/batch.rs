//! Conversion of many fragments at once.
//!
//! Each fragment gets its own session; results come back in input order.
//! With the `parallel` feature the work is spread over rayon's global pool.

use crate::error::RenderError;
use crate::renderer::XhtmlRenderer;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Renders every fragment, keeping failures per fragment.
#[cfg(feature = "parallel")]
pub fn render_batch<S>(renderer: &XhtmlRenderer, fragments: &[S]) -> Vec<Result<String, RenderError>>
where
    S: AsRef<str> + Sync,
{
    log::debug!(
        "Rendering {} fragments on {} threads",
        fragments.len(),
        rayon::current_num_threads()
    );
    fragments
        .par_iter()
        .map(|fragment| renderer.render(fragment.as_ref()))
        .collect()
}

/// Renders every fragment, keeping failures per fragment.
#[cfg(not(feature = "parallel"))]
pub fn render_batch<S>(renderer: &XhtmlRenderer, fragments: &[S]) -> Vec<Result<String, RenderError>>
where
    S: AsRef<str> + Sync,
{
    fragments
        .iter()
        .map(|fragment| renderer.render(fragment.as_ref()))
        .collect()
}

/// Sizes rayon's global pool. Call it before the first batch; `0` keeps
/// rayon's default of one thread per core.
#[cfg(feature = "parallel")]
pub fn configure_thread_pool(num_threads: usize) {
    if num_threads == 0 {
        return;
    }
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        log::warn!("Failed to configure the global thread pool: {}. Using default.", e);
    } else {
        log::debug!("Configured the global thread pool with {} threads", num_threads);
    }
}
