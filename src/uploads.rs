//! Upload tracking
//!
//! At most one image upload per product may be in flight. Uploads for
//! different products proceed independently.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashSet;

use crate::products::ProductId;

type Uploading = FxHashSet<ProductId>;

/// Products with an upload in flight.
#[derive(Debug, Clone, Default)]
pub struct UploadTracker {
    uploading: Arc<Mutex<Uploading>>,
}

impl UploadTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Uploading> {
        self.uploading.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark an upload as started.
    ///
    /// Returns `None` when the product already has an upload in flight. The
    /// mark is cleared when the returned guard drops, whatever the outcome.
    pub fn begin(&self, id: &ProductId) -> Option<UploadGuard> {
        if !self.lock().insert(id.clone()) {
            return None;
        }

        Some(UploadGuard {
            tracker: self.clone(),
            id: id.clone(),
        })
    }

    /// Whether the product has an upload in flight.
    pub fn is_uploading(&self, id: &ProductId) -> bool {
        self.lock().contains(id)
    }

    /// Number of uploads in flight.
    pub fn in_flight(&self) -> usize {
        self.lock().len()
    }
}

/// Clears the upload mark on drop.
#[derive(Debug)]
pub struct UploadGuard {
    tracker: UploadTracker,
    id: ProductId,
}

impl UploadGuard {
    /// Product being uploaded
    pub fn id(&self) -> &ProductId {
        &self.id
    }
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        self.tracker.lock().remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn second_upload_for_same_product_is_refused() -> TestResult {
        let tracker = UploadTracker::new();
        let id = ProductId::from("3");

        let guard = tracker.begin(&id).ok_or("first upload refused")?;

        assert!(tracker.is_uploading(&id));
        assert!(tracker.begin(&id).is_none());

        drop(guard);

        assert!(!tracker.is_uploading(&id));
        assert!(tracker.begin(&id).is_some());

        Ok(())
    }

    #[test]
    fn different_products_upload_independently() -> TestResult {
        let tracker = UploadTracker::new();

        let first = tracker.begin(&ProductId::from("1")).ok_or("refused")?;
        let second = tracker.begin(&ProductId::from("2")).ok_or("refused")?;

        assert_eq!(tracker.in_flight(), 2);
        assert_eq!(first.id(), &ProductId::from("1"));

        drop(second);

        assert_eq!(tracker.in_flight(), 1);
        assert!(tracker.is_uploading(&ProductId::from("1")));

        Ok(())
    }
}
