//! Idempotent native listener bookkeeping.
//!
//! Listeners must be attached before the first gesture and fully removed
//! before the carousel is dropped, otherwise a late callback mutates state
//! that no longer exists.

/// Native events the carousel listens to on its item strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 7] = [
        ListenerKind::MouseDown,
        ListenerKind::MouseMove,
        ListenerKind::MouseUp,
        ListenerKind::TouchStart,
        ListenerKind::TouchMove,
        ListenerKind::TouchEnd,
        ListenerKind::TouchCancel,
    ];

    /// DOM event type name.
    pub fn event_type(self) -> &'static str {
        match self {
            ListenerKind::MouseDown => "mousedown",
            ListenerKind::MouseMove => "mousemove",
            ListenerKind::MouseUp => "mouseup",
            ListenerKind::TouchStart => "touchstart",
            ListenerKind::TouchMove => "touchmove",
            ListenerKind::TouchEnd => "touchend",
            ListenerKind::TouchCancel => "touchcancel",
        }
    }

    /// Every carousel listener may call `preventDefault`: start suppresses
    /// the native drag, move/end suppress scrolling during a swipe.
    pub fn options(self) -> ListenerOptions {
        ListenerOptions::non_passive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
}

impl ListenerOptions {
    pub fn non_passive() -> Self {
        Self { passive: false }
    }
}

/// Whatever owns the native element: a DOM node wrapper, or a recorder in
/// tests.
pub trait ListenerHost {
    fn add_listener(&mut self, kind: ListenerKind, options: ListenerOptions);
    fn remove_listener(&mut self, kind: ListenerKind, options: ListenerOptions);
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    attached: bool,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Adds every carousel listener. Returns `false` if already attached.
    pub fn attach(&mut self, host: &mut impl ListenerHost) -> bool {
        if self.attached {
            return false;
        }
        for kind in ListenerKind::ALL {
            host.add_listener(kind, kind.options());
        }
        self.attached = true;
        log::debug!("carousel listeners attached");
        true
    }

    /// Removes every carousel listener. Returns `false` if none were attached.
    pub fn detach(&mut self, host: &mut impl ListenerHost) -> bool {
        if !self.attached {
            return false;
        }
        for kind in ListenerKind::ALL {
            host.remove_listener(kind, kind.options());
        }
        self.attached = false;
        log::debug!("carousel listeners detached");
        true
    }
}

impl Drop for ListenerRegistry {
    fn drop(&mut self) {
        if self.attached {
            log::warn!("listener registry dropped while listeners are still attached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingHost {
        active: HashMap<ListenerKind, ListenerOptions>,
        calls: usize,
    }

    impl ListenerHost for RecordingHost {
        fn add_listener(&mut self, kind: ListenerKind, options: ListenerOptions) {
            self.calls += 1;
            self.active.insert(kind, options);
        }

        fn remove_listener(&mut self, kind: ListenerKind, _options: ListenerOptions) {
            self.calls += 1;
            self.active.remove(&kind);
        }
    }

    #[test]
    fn attach_and_detach_are_idempotent() {
        let mut host = RecordingHost::default();
        let mut registry = ListenerRegistry::new();

        assert!(registry.attach(&mut host));
        assert!(!registry.attach(&mut host));
        assert_eq!(host.active.len(), 7);
        assert_eq!(host.calls, 7);

        assert!(registry.detach(&mut host));
        assert!(!registry.detach(&mut host));
        assert!(host.active.is_empty());
        assert_eq!(host.calls, 14);
        assert!(!registry.is_attached());
    }

    #[test]
    fn move_and_end_listeners_are_not_passive() {
        let mut host = RecordingHost::default();
        let mut registry = ListenerRegistry::new();
        registry.attach(&mut host);

        assert!(!host.active[&ListenerKind::TouchMove].passive);
        assert!(!host.active[&ListenerKind::TouchEnd].passive);
        assert_eq!(ListenerKind::TouchMove.event_type(), "touchmove");
        registry.detach(&mut host);
    }
}
