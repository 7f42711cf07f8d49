use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::compiler::JsEmitter;

pub const FACTORY_PREFIX: &str = "i18nResources";
pub const DEFINABLE_PARAM: &str = "modDef";

static ISSUED: AtomicU64 = AtomicU64::new(0);

/// Generated registration function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationResult {
    pub name: String,
    pub code: String,
    pub resource_count: usize,
    pub error_count: usize,
}

impl CompilationResult {
    /// The function body with the generated name blanked out, for comparing
    /// two passes.
    pub fn normalized_code(&self) -> String {
        self.code.replace(&self.name, FACTORY_PREFIX)
    }
}

pub struct ModuleFactory;

impl ModuleFactory {
    /// `i18nResources_<millis>_<random>_<seq>`, all base 36.
    ///
    /// Time and random parts make clashes between separate processes
    /// unlikely; the sequence number rules them out inside one process.
    pub fn new_name() -> String {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let seq = ISSUED.fetch_add(1, Ordering::Relaxed);
        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u64(millis);
        hasher.write_u64(seq);
        let random = hasher.finish() & 0xffff_ffff;
        format!(
            "{}_{}_{}_{}",
            FACTORY_PREFIX,
            to_base36(millis),
            to_base36(random),
            to_base36(seq)
        )
    }

    /// Wrap per-root statement blocks into `function <name>(modDef) { ... }`.
    pub fn wrap(name: &str, root_blocks: &[String]) -> String {
        let mut emitter = JsEmitter::new();
        emitter.open_block(&format!("function {}({})", name, DEFINABLE_PARAM));
        for block in root_blocks {
            for line in block.lines() {
                emitter.write_line(line);
            }
        }
        emitter.close_block();
        emitter.finish()
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).to_string()
}
