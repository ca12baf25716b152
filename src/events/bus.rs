//! Publish/subscribe channel with a real-only filtering mode

use crate::Result;

use super::event::{ExecutionContext, GameEvent};

/// Handler for published events.
///
/// Handlers receive the event together with the execution context tags.
/// Handlers registered through [`EventBus::subscribe`] see every emission
/// including simulated ones; handlers registered through
/// [`EventBus::subscribe_real`] never see a simulated emission, which is the
/// structural guarantee that look-ahead rollouts cannot leak into
/// side-effecting consumers.
pub trait EventHandler: Send {
    fn handle(&mut self, event: &GameEvent, ctx: &ExecutionContext) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubscriptionMode {
    All,
    RealOnly,
}

struct Subscription {
    mode: SubscriptionMode,
    handler: Box<dyn EventHandler>,
}

/// Dispatches typed events to registered handlers.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus {
            subscriptions: Vec::new(),
        }
    }

    /// Subscribe to every emission, simulated ones included.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.subscriptions.push(Subscription {
            mode: SubscriptionMode::All,
            handler,
        });
    }

    /// Subscribe to committed emissions only.
    pub fn subscribe_real(&mut self, handler: Box<dyn EventHandler>) {
        self.subscriptions.push(Subscription {
            mode: SubscriptionMode::RealOnly,
            handler,
        });
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Deliver `event` to every matching handler.
    ///
    /// Delivery always reaches all matching handlers; the first handler
    /// error is returned afterwards so one failing consumer cannot starve
    /// the others.
    pub fn emit(&mut self, event: GameEvent, ctx: &ExecutionContext) -> Result<()> {
        let mut first_error = None;
        for sub in &mut self.subscriptions {
            if sub.mode == SubscriptionMode::RealOnly && ctx.is_simulation {
                continue;
            }
            if let Err(e) = sub.handler.handle(&event, ctx) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
