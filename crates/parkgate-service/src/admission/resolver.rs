//! Wall-code resolution.
//!
//! Two legacy code formats coexist in the field: a structured QR payload
//! (`CAMPUS:<id>` or `CAMPUS:<id>|BLOCK:<id>`) and older printed strings
//! whose leading characters are the campus short code. Resolution runs an
//! ordered chain of strategies; the structured payload always wins, an
//! exact registry match is tried next, and the short-code prefix is the
//! last resort. Resolution is a pure lookup with no side effects.

use std::sync::Arc;

use parkgate_core::result::AppResult;
use parkgate_core::types::scope::Scope;

use super::store::AdmissionStore;

/// Resolves scanned code strings to a campus/block scope.
#[derive(Clone)]
pub struct CodeResolver {
    store: Arc<dyn AdmissionStore>,
    campus_code_length: usize,
}

impl CodeResolver {
    /// Create a new resolver.
    pub fn new(store: Arc<dyn AdmissionStore>, campus_code_length: usize) -> Self {
        Self {
            store,
            campus_code_length,
        }
    }

    /// Resolve a scanned string, returning `None` when no strategy matches
    /// a campus that actually exists. Never fails the scan itself; an
    /// unresolvable code is the caller's denial to make.
    pub async fn resolve(&self, code: &str) -> AppResult<Option<Scope>> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }

        if let Some(scope) = self.resolve_structured(code).await? {
            return Ok(Some(scope));
        }
        if let Some(scope) = self.resolve_registered(code).await? {
            return Ok(Some(scope));
        }
        self.resolve_prefix(code).await
    }

    /// Strategy 1: structured payload embedded in the code string.
    async fn resolve_structured(&self, code: &str) -> AppResult<Option<Scope>> {
        let Some((campus_id, block_id)) = parse_structured(code) else {
            return Ok(None);
        };
        if self.store.find_campus(campus_id).await?.is_none() {
            return Ok(None);
        }

        // A block that does not belong to the named campus degrades to
        // campus-wide scope; the campus is what gates admission.
        if let Some(block_id) = block_id {
            let block = self.store.find_block(block_id).await?;
            if block.is_some_and(|b| b.campus_id == campus_id) {
                return Ok(Some(Scope::block(campus_id, block_id)));
            }
        }
        Ok(Some(Scope::campus(campus_id)))
    }

    /// Strategy 2: exact match against the wall-code registry.
    async fn resolve_registered(&self, code: &str) -> AppResult<Option<Scope>> {
        Ok(self.store.find_wall_code(code).await?.map(|entry| Scope {
            campus_id: entry.campus_id,
            block_id: entry.block_id,
        }))
    }

    /// Strategy 3: leading characters as campus short code.
    async fn resolve_prefix(&self, code: &str) -> AppResult<Option<Scope>> {
        let Some(prefix) = code.get(..self.campus_code_length) else {
            return Ok(None);
        };
        Ok(self
            .store
            .find_campus_by_short_code(prefix)
            .await?
            .map(|campus| Scope::campus(campus.id)))
    }
}

/// Parse the structured payload format: `CAMPUS:<id>`, optionally followed
/// by `|BLOCK:<id>`. Segment order is not significant; unknown segments
/// are ignored. Returns `None` when no campus marker is present.
fn parse_structured(code: &str) -> Option<(i64, Option<i64>)> {
    let mut campus_id = None;
    let mut block_id = None;

    for segment in code.split('|') {
        let segment = segment.trim();
        if let Some(value) = segment.strip_prefix("CAMPUS:") {
            campus_id = value.trim().parse::<i64>().ok();
        } else if let Some(value) = segment.strip_prefix("BLOCK:") {
            block_id = value.trim().parse::<i64>().ok();
        }
    }

    campus_id.map(|id| (id, block_id))
}
