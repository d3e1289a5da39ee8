//! Secret lookup handle.
//!
//! `Secrets` owns the locate and resolve pipeline plus a memoized
//! `ConfigMap`. The map is built on first access, shared by every caller
//! after that, and rebuilt only after [`Secrets::reset`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::core::cipher::{Cipher, Ecies};
use crate::core::config::Options;
use crate::core::decoder::Decoder;
use crate::core::domain::{Candidate, ConfigMap};
use crate::core::environ::{Environ, ProcessEnv};
use crate::core::locator::Locator;
use crate::core::types::Assignment;

/// Lazily resolved secrets for one environment
///
/// ```no_run
/// use dotenv_decrypt::Secrets;
///
/// let secrets = Secrets::from_env();
/// let url = secrets.get("DATABASE_URL");
/// for line in secrets.all() {
///     println!("{}", line);
/// }
/// ```
pub struct Secrets<E = ProcessEnv, C = Ecies> {
    locator: Locator,
    decoder: Decoder<C>,
    env: E,
    cache: Mutex<Option<Arc<ConfigMap>>>,
}

impl Secrets {
    /// Secrets from the process environment and current directory.
    pub fn from_env() -> Self {
        Self::new(Options::default())
    }

    /// Secrets from the process environment with custom options.
    pub fn new(options: Options) -> Self {
        Self::with_parts(options, ProcessEnv, Ecies)
    }
}

impl<E: Environ> Secrets<E, Ecies> {
    /// Secrets read from an explicit environment source.
    pub fn with_env(options: Options, env: E) -> Self {
        Self::with_parts(options, env, Ecies)
    }
}

impl<E: Environ, C: Cipher> Secrets<E, C> {
    pub fn with_parts(options: Options, env: E, cipher: C) -> Self {
        Self {
            locator: Locator::new(&options),
            decoder: Decoder::new(cipher),
            env,
            cache: Mutex::new(None),
        }
    }

    /// Value of `name`, or the empty string if it is not configured.
    pub fn get(&self, name: &str) -> String {
        self.map().get(name).unwrap_or_default().to_string()
    }

    /// Every resolved variable as `NAME=value`, in file order.
    pub fn all(&self) -> Vec<Assignment> {
        self.map().assignments()
    }

    /// The resolved map, building it on first access.
    ///
    /// Concurrent first callers block until a single resolution finishes
    /// and then share its result.
    pub fn map(&self) -> Arc<ConfigMap> {
        let mut cache = self.lock();
        if let Some(map) = cache.as_ref() {
            return Arc::clone(map);
        }

        let map = Arc::new(self.resolve());
        *cache = Some(Arc::clone(&map));
        map
    }

    /// Drop the memoized map so the next access resolves again.
    pub fn reset(&self) {
        debug!("resetting secrets cache");
        self.lock().take();
    }

    /// Candidates currently present in the environment. Never cached.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.locator.locate(&self.env)
    }

    pub fn decoder(&self) -> &Decoder<C> {
        &self.decoder
    }

    fn resolve(&self) -> ConfigMap {
        let candidates = self.candidates();
        self.decoder.resolve(&candidates)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<ConfigMap>>> {
        // The slot holds either nothing or a finished map, so a poisoned
        // lock never exposes partial state.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E, C> std::fmt::Debug for Secrets<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}
