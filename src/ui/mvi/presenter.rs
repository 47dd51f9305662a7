//! Lifecycle holder shared by presenters.

use std::sync::{Arc, Weak};

/// A component bound to an optional, externally-owned view.
///
/// The UI layer owns the view through an `Arc`; the presenter only keeps a
/// `Weak`. The view counts as absent after [`detach_view`](Self::detach_view)
/// or once the UI drops its last strong handle.
///
/// Every attach and detach bumps the binding generation. Work that finishes
/// later captures the generation up front and resolves the view through
/// [`view_if_current`](Self::view_if_current), so it never reaches a view
/// that was detached or replaced in the meantime.
pub struct BasePresenter<V: ?Sized> {
    view: Option<Weak<V>>,
    generation: u64,
}

impl<V: ?Sized> BasePresenter<V> {
    /// Construct bound to `view`.
    pub fn new(view: &Arc<V>) -> Self {
        Self {
            view: Some(Arc::downgrade(view)),
            generation: 1,
        }
    }

    /// Bind `view`, replacing any previously bound view.
    pub fn attach_view(&mut self, view: &Arc<V>) {
        self.view = Some(Arc::downgrade(view));
        self.generation += 1;
    }

    /// Drop the view reference. Returns whether a view was attached.
    pub fn detach_view(&mut self) -> bool {
        let was_attached = self.view.take().is_some();
        self.generation += 1;
        was_attached
    }

    /// Currently bound view, if it is still alive.
    pub fn view(&self) -> Option<Arc<V>> {
        self.view.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_bound(&self) -> bool {
        self.view().is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bound view, but only if nothing was attached or detached since
    /// `generation` was captured.
    pub fn view_if_current(&self, generation: u64) -> Option<Arc<V>> {
        if generation != self.generation {
            return None;
        }
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Named {
        fn name(&self) -> &'static str;
    }

    struct Screen(&'static str);

    impl Named for Screen {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn new_is_bound() {
        let view = Arc::new(Screen("first"));
        let base = BasePresenter::new(&view);
        assert!(base.is_bound());
        assert_eq!(base.view().map(|v| v.0), Some("first"));
    }

    #[test]
    fn detach_clears_view_and_bumps_generation() {
        let view = Arc::new(Screen("first"));
        let mut base = BasePresenter::new(&view);
        let before = base.generation();

        assert!(base.detach_view());
        assert!(!base.is_bound());
        assert!(base.generation() > before);
        assert!(!base.detach_view());
    }

    #[test]
    fn dropped_view_counts_as_absent() {
        let view = Arc::new(Screen("first"));
        let base = BasePresenter::new(&view);
        drop(view);
        assert!(base.view().is_none());
    }

    #[test]
    fn presenter_does_not_keep_view_alive() {
        let view = Arc::new(Screen("first"));
        let _base = BasePresenter::new(&view);
        assert_eq!(Arc::strong_count(&view), 1);
    }

    #[test]
    fn stale_generation_is_rejected() {
        let first = Arc::new(Screen("first"));
        let second = Arc::new(Screen("second"));
        let mut base = BasePresenter::new(&first);
        let captured = base.generation();

        base.attach_view(&second);

        assert!(base.view_if_current(captured).is_none());
        let current = base.generation();
        assert_eq!(base.view_if_current(current).map(|v| v.0), Some("second"));
    }

    #[test]
    fn works_with_trait_objects() {
        let view: Arc<dyn Named> = Arc::new(Screen("dyn"));
        let base: BasePresenter<dyn Named> = BasePresenter::new(&view);
        assert_eq!(base.view().map(|v| v.name()), Some("dyn"));
    }
}
