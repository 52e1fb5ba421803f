//! Round timer thread: sends `GameLoopCommand::Tick` once per period.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::state::GameLoopCommand;

/// Handle to a running round timer. Dropping it stops the timer.
pub struct RoundTimer {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RoundTimer {
    /// Spawn a timer thread that ticks every `period` until stopped or the
    /// receiving side hangs up.
    pub fn spawn(tx: mpsc::Sender<GameLoopCommand>, period: Duration) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = std::thread::Builder::new()
            .name("arpakai-round-timer".into())
            .spawn(move || loop {
                std::thread::sleep(period);
                if thread_stop.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(GameLoopCommand::Tick).is_err() {
                    break;
                }
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Stop ticking. The thread exits after its current sleep.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        // Detach: joining would block for up to one period.
        self.handle.take();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}

/// Start the once-per-period round countdown feeding `tx`.
pub fn spawn_round_timer(
    tx: mpsc::Sender<GameLoopCommand>,
    period: Duration,
) -> std::io::Result<RoundTimer> {
    RoundTimer::spawn(tx, period)
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
