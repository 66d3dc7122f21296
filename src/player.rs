use std::{thread, time::Duration};

use log::trace;

use crate::config::Config;
use crate::step::Step;

/// Player paces recorded [`Step`]s for a human watching the walkthrough.
///
/// The tree applies every step synchronously, pacing is entirely up to
/// the player. A zero delay replays everything back to back.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    delay: Duration,
}

impl Player {
    pub fn new(delay: Duration) -> Player {
        Player { delay }
    }

    pub fn from_config(config: &Config) -> Player {
        Player::new(config.step_delay())
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Hand each step to `render`, waiting the configured delay between
    /// two consecutive steps. Return the number of steps played.
    pub fn play<K, I, F>(&self, steps: I, mut render: F) -> usize
    where
        I: IntoIterator<Item = Step<K>>,
        F: FnMut(&Step<K>),
    {
        let mut n = 0;
        for step in steps {
            if n > 0 && self.delay > Duration::from_secs(0) {
                trace!("pause {:?} before step {}", self.delay, n);
                thread::sleep(self.delay);
            }
            render(&step);
            n += 1;
        }
        n
    }
}
