/// Topics listeners can subscribe to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Topic {
    MinesRemaining,
    GameLost,
    GameWon,
}

/// Board state change published to listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    MinesRemainingChanged(i32),
    GameLost,
    GameWon,
}

impl BoardEvent {
    pub const fn topic(&self) -> Topic {
        match self {
            Self::MinesRemainingChanged(_) => Topic::MinesRemaining,
            Self::GameLost => Topic::GameLost,
            Self::GameWon => Topic::GameWon,
        }
    }
}

type Handler = Box<dyn FnMut(&BoardEvent)>;

/// Synchronous publish/subscribe. Handlers of a topic run in subscription
/// order, on the emitting call stack; delivery is never deferred.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<(Topic, Handler)>,
}

impl EventBus {
    pub fn subscribe(&mut self, topic: Topic, handler: impl FnMut(&BoardEvent) + 'static) {
        self.handlers.push((topic, Box::new(handler)));
    }

    pub fn emit(&mut self, event: BoardEvent) {
        log::trace!("Emitting {:?}", event);
        for (topic, handler) in self.handlers.iter_mut() {
            if *topic == event.topic() {
                handler(&event);
            }
        }
    }
}
