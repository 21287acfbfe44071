//! Fire-and-forget notifications for collaborators
//!
//! Listeners run in registration order. A panicking listener is caught and
//! logged; it never reaches the code that emitted the event.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::str::FromStr;

use fxhash::FxHashMap;
use indexmap::IndexMap;

use crate::facade::ArabicMathOptions;
use crate::render::RenderContext;

/// Events exposed by [`ArabicMath`](crate::ArabicMath).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BeforeRender,
    AfterRender,
    OptionsChange,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::BeforeRender => "before:render",
            EventKind::AfterRender => "after:render",
            EventKind::OptionsChange => "options:change",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before:render" => Ok(EventKind::BeforeRender),
            "after:render" => Ok(EventKind::AfterRender),
            "options:change" => Ok(EventKind::OptionsChange),
            other => Err(format!("unknown event '{}'", other)),
        }
    }
}

/// Data handed to listeners.
#[derive(Debug, Clone, Copy)]
pub enum EventPayload<'a> {
    Render {
        equation: &'a str,
        context: &'a RenderContext,
    },
    OptionsChange(&'a ArabicMathOptions),
}

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn Fn(&EventPayload<'_>)>;

/// Listener registry owned by one [`ArabicMath`](crate::ArabicMath) instance.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: FxHashMap<EventKind, IndexMap<ListenerId, Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, kind: EventKind, listener: impl Fn(&EventPayload<'_>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .insert(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.listeners
            .get_mut(&kind)
            .map_or(false, |map| map.shift_remove(&id).is_some())
    }

    pub fn emit(&self, kind: EventKind, payload: &EventPayload<'_>) {
        let Some(listeners) = self.listeners.get(&kind) else {
            return;
        };
        for (id, listener) in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(payload))).is_err() {
                log::warn!("listener {:?} for '{}' panicked; ignored", id, kind);
            }
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, IndexMap::len)
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .listeners
            .iter()
            .map(|(kind, map)| (kind.name(), map.len()))
            .collect();
        counts.sort();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
