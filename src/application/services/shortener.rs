//! Short code allocation and resolution service.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::code_generator::{CodeGenerator, RandomCodeGenerator};
use crate::domain::entities::{CodeBlockList, ShortRecord};
use crate::domain::error::ShortenerError;
use crate::domain::validator::CodeValidator;

/// Number of generated candidates tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Default length of generated short codes.
pub const DEFAULT_SHORTCODE_LENGTH: usize = 6;

/// Settings fixed at construction time.
#[derive(Debug, Clone)]
pub struct ShortenerConfig {
    pub shortcode_length: usize,
    pub code_block_list: CodeBlockList,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            shortcode_length: DEFAULT_SHORTCODE_LENGTH,
            code_block_list: CodeBlockList::default(),
        }
    }
}

/// Service owning the code → URL mapping.
///
/// Each code is either absent or bound; the only transition is absent → bound
/// and it lasts for the lifetime of the instance. Records live in memory only.
///
/// # Concurrency
///
/// [`Self::shorten`] holds the write lock across the whole
/// check → generate/accept → insert sequence, so two concurrent callers can
/// never claim the same code. [`Self::resolve`] only takes the read lock.
pub struct Shortener<G: CodeGenerator = RandomCodeGenerator> {
    records: RwLock<HashMap<String, ShortRecord>>,
    config: ShortenerConfig,
    validator: CodeValidator,
    generator: G,
}

impl Shortener {
    /// Creates a shortener backed by [`RandomCodeGenerator`].
    pub fn new(config: ShortenerConfig) -> Self {
        Self::with_generator(config, RandomCodeGenerator)
    }
}

impl<G: CodeGenerator> Shortener<G> {
    /// Creates a shortener drawing candidate codes from `generator`.
    pub fn with_generator(config: ShortenerConfig, generator: G) -> Self {
        let validator = CodeValidator::new(&config.code_block_list);

        Self {
            records: RwLock::new(HashMap::new()),
            config,
            validator,
            generator,
        }
    }

    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    /// Binds `url` to a custom or freshly generated short code.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided (and non-empty), it is used verbatim or
    ///   the call fails; there is no fallback to generation
    /// - Otherwise up to [`MAX_GENERATION_ATTEMPTS`] random candidates of
    ///   `shortcode_length` characters are tried
    ///
    /// Both kinds must be admissible (see [`CodeValidator`]) and unused.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::CodeRestricted`] if the custom code is malformed,
    ///   block-listed, or taken
    /// - [`ShortenerError::GenerationExhausted`] if no generated candidate passed
    /// - [`ShortenerError::RetrievalFailed`] if the record is missing right after insert
    pub fn shorten(
        &self,
        url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortRecord, ShortenerError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        let code = match custom_code.filter(|c| !c.is_empty()) {
            Some(custom) => {
                if !self.is_available(&records, custom) {
                    return Err(ShortenerError::CodeRestricted {
                        code: custom.to_string(),
                    });
                }
                custom.to_string()
            }
            None => self.generate_unique_code(&records)?,
        };

        records.insert(code.clone(), ShortRecord::new(code.clone(), url));

        read_back(&records, &code)
    }

    /// Looks up the record bound to `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::CodeNotFound`] if the code is not bound.
    pub fn resolve(&self, code: &str) -> Result<ShortRecord, ShortenerError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        records
            .get(code)
            .cloned()
            .ok_or_else(|| ShortenerError::CodeNotFound {
                code: code.to_string(),
            })
    }

    /// Number of bound codes.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_available(&self, records: &HashMap<String, ShortRecord>, code: &str) -> bool {
        self.validator.is_admissible(code) && !records.contains_key(code)
    }

    fn generate_unique_code(
        &self,
        records: &HashMap<String, ShortRecord>,
    ) -> Result<String, ShortenerError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = self.generator.generate(self.config.shortcode_length);

            if self.is_available(records, &code) {
                return Ok(code);
            }
        }

        Err(ShortenerError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

/// Re-reads a just-inserted record.
///
/// Unreachable while the write lock is held across insert and read; kept so a
/// broken invariant surfaces as an error instead of a panic.
fn read_back(
    records: &HashMap<String, ShortRecord>,
    code: &str,
) -> Result<ShortRecord, ShortenerError> {
    records
        .get(code)
        .cloned()
        .ok_or_else(|| ShortenerError::RetrievalFailed {
            code: code.to_string(),
        })
}
