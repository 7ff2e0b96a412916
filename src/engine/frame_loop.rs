use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

pub const MIN_FPS: u8 = 15;
pub const MAX_FPS: u8 = 60;

/// Cancellable repeating frame task.
///
/// While armed, the task sends one event per frame period. Cancelling clears
/// the armed flag before aborting, so a tick that already woke up never sends.
#[derive(Debug)]
pub struct FrameLoop {
    armed: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl FrameLoop {
    /// Spawns the ticker on the current tokio runtime.
    pub fn spawn<E, F>(tx: mpsc::Sender<E>, fps: u8, make_event: F) -> Self
    where
        E: Send + 'static,
        F: Fn() -> E + Send + 'static,
    {
        let armed = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&armed);
        let period = frame_period(fps);
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if !flag.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(make_event()).await.is_err() {
                    break;
                }
            }
        });
        Self {
            armed,
            task: Some(task),
        }
    }

    /// Armed handle without a task, for hosts that pump ticks themselves.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            armed: Arc::new(AtomicBool::new(true)),
            task: None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    pub fn cancel(&mut self) {
        self.armed.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[must_use]
pub fn frame_period(fps: u8) -> Duration {
    let fps = fps.clamp(MIN_FPS, MAX_FPS);
    Duration::from_micros(1_000_000 / u64::from(fps))
}
