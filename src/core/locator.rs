//! Key discovery.
//!
//! Scans the environment for private keys and derives the env file each key
//! belongs to: `DOTENV_PRIVATE_KEY` maps to `.env`, and
//! `DOTENV_PRIVATE_KEY_QA_TEST` maps to `.env.qa.test`.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::core::config::{CandidateOrder, Options};
use crate::core::domain::Candidate;
use crate::core::environ::Environ;

/// Derives candidates from environment variables
#[derive(Debug, Clone)]
pub struct Locator {
    dir: PathBuf,
    prefix: String,
    default_file: String,
    order: CandidateOrder,
}

impl Locator {
    pub fn new(options: &Options) -> Self {
        Self {
            dir: options.dir.clone(),
            prefix: options.prefix.clone(),
            default_file: options.default_file.clone(),
            order: options.order,
        }
    }

    /// Env file name for a key variable, or `None` if the name does not
    /// follow the naming convention.
    ///
    /// ```
    /// use dotenv_decrypt::core::config::Options;
    /// use dotenv_decrypt::core::locator::Locator;
    ///
    /// let locator = Locator::new(&Options::default());
    /// assert_eq!(locator.file_name("DOTENV_PRIVATE_KEY").as_deref(), Some(".env"));
    /// assert_eq!(
    ///     locator.file_name("DOTENV_PRIVATE_KEY_QA_TEST").as_deref(),
    ///     Some(".env.qa.test")
    /// );
    /// ```
    pub fn file_name(&self, var: &str) -> Option<String> {
        let rest = var.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            return Some(self.default_file.clone());
        }

        let suffix = rest.strip_prefix('_')?;
        Some(format!(
            "{}.{}",
            self.default_file,
            suffix.to_lowercase().replace('_', ".")
        ))
    }

    /// Candidates for every non-empty key variable in `env`.
    ///
    /// An empty result is the normal outcome when no keys are configured.
    pub fn locate<E: Environ + ?Sized>(&self, env: &E) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = env
            .vars()
            .into_iter()
            .filter(|(var, _)| var.starts_with(self.prefix.as_str()))
            .filter_map(|(var, key)| {
                if key.is_empty() {
                    debug!(var = %var, "skipping empty key");
                    return None;
                }
                let Some(file) = self.file_name(&var) else {
                    debug!(var = %var, "skipping variable outside key naming convention");
                    return None;
                };
                let path = self.dir.join(file);
                debug!(var = %var, path = %path.display(), "found key");
                Some(Candidate::new(var, path, key))
            })
            .collect();

        if self.order == CandidateOrder::Lexical {
            candidates.sort_by(|a, b| a.var().cmp(b.var()));
        }

        if candidates.is_empty() {
            debug!(prefix = %self.prefix, "no private key found");
        } else if candidates.len() > 1 {
            warn!(
                keys = candidates.len(),
                order = ?self.order,
                "multiple private keys found in environment"
            );
        }

        candidates
    }
}
