//! Lazy lists with a memoizing force engine.
//!
//! This crate provides:
//! - [`Thunk`] and [`Pair`]: deferred list cells with process-unique identities
//! - [`Env`]: the evaluation environment owning the memoization cache, and
//!   [`EnvRef`], the handle thunks hold, which carries the constructors
//!   (`link`, `delayed_link`, `list`, `updating`, `deferred`)
//! - [`Knot`]: the placeholder used to define a list in terms of itself
//! - [`Value`]: a dynamic element type for heterogeneous lists
//! - structural equality, `Display` rendering and a pull iterator
//!
//! Combinators (`map_n`, `filter_n`, `take`, ...) live in `lazy_ops` and are
//! built only on the public surface here.
//!
//! # Evaluation
//!
//! Nothing is computed when a list is built. Forcing a thunk runs its body
//! once, stores the resulting cell under the thunk's identity, and answers
//! later forces from the cache:
//!
//! ```text
//! let env = Env::new();
//! let naturals = env.updating(0, |n| n + 1);
//! assert_eq!(naturals.head(), Some(0));
//! ```

mod compare;
mod config;
mod env;
mod errors;
mod id;
mod iter;
mod knot;
mod render;
mod thunk;
mod value;

use std::sync::Once;

pub use config::{EnvConfig, MEMO_ENV_VAR};
pub use env::{CacheStats, Env, EnvRef};
pub use errors::ListError;
pub use id::ThunkId;
pub use iter::ListIter;
pub use knot::Knot;
pub use thunk::{Forced, Pair, Thunk};
pub use value::Value;

/// Bound shared by every list element.
///
/// Cells are shared between handles, the cache and (for the channel adapter)
/// threads, so elements must be cloneable and thread-safe.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// Build a finite list: `list![env; 1, 2, 3]`.
#[macro_export]
macro_rules! list {
    ($env:expr; $($item:expr),* $(,)?) => {
        $env.list(::std::vec![$($item),*])
    };
}

/// Build a finite list of [`Value`]s, converting each item with `Value::from`:
/// `values![env; 1, "a", 2.5]`.
#[macro_export]
macro_rules! values {
    ($env:expr; $($item:expr),* $(,)?) => {
        $env.list(::std::vec![$($crate::Value::from($item)),*])
    };
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for debug output.
///
/// Safe to call multiple times. Only installs when `RUST_LOG` is set, e.g.
/// `RUST_LOG=lazy_core=trace` to see every cache hit and miss.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("a global subscriber was already installed");
            }
        }
    });
}
