//! Display surface that hands updates to the main thread.

use std::sync::mpsc;

use arpakai_sim::ports::DisplaySurface;

/// One change to the on-screen labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUpdate {
    SecondsRemaining(u32),
    Score(u32),
    RoundEnded { final_score: u32 },
}

impl DisplayUpdate {
    /// Text shown for this update.
    pub fn render(&self) -> String {
        match self {
            DisplayUpdate::SecondsRemaining(seconds) => format!("00 : {seconds}"),
            DisplayUpdate::Score(score) => format!("Score: {score}"),
            DisplayUpdate::RoundEnded { final_score } => {
                format!("Round over! Final score: {final_score}")
            }
        }
    }
}

/// Sends every update over a channel; the receiver owns presentation.
pub struct ChannelDisplay {
    tx: mpsc::Sender<DisplayUpdate>,
}

impl ChannelDisplay {
    pub fn new(tx: mpsc::Sender<DisplayUpdate>) -> Self {
        Self { tx }
    }

    fn send(&self, update: DisplayUpdate) {
        if self.tx.send(update).is_err() {
            log::trace!("display receiver gone, dropping {:?}", update);
        }
    }
}

impl DisplaySurface for ChannelDisplay {
    fn show_seconds_remaining(&mut self, seconds: u32) {
        self.send(DisplayUpdate::SecondsRemaining(seconds));
    }

    fn show_score(&mut self, score: u32) {
        self.send(DisplayUpdate::Score(score));
    }

    fn round_ended(&mut self, final_score: u32) {
        self.send(DisplayUpdate::RoundEnded { final_score });
    }
}
