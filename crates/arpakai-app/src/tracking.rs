//! Externally driven tracking session.
//!
//! There is no camera here: whoever holds a clone sets the pose and
//! status, and the controller reads them through `TrackingSession`.

use std::sync::{Arc, Mutex, MutexGuard};

use glam::Vec3;

use arpakai_core::enums::TrackingStatus;
use arpakai_core::types::CameraPose;
use arpakai_sim::ports::TrackingSession;

#[derive(Debug, Default)]
struct TrackingFeed {
    pose: Option<CameraPose>,
    status: TrackingStatus,
    running: bool,
}

/// Shared, settable pose source. Clones share one feed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTracking {
    feed: Arc<Mutex<TrackingFeed>>,
}

impl ScriptedTracking {
    pub fn new() -> Self {
        Self::default()
    }

    fn feed(&self) -> MutexGuard<'_, TrackingFeed> {
        match self.feed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn set_pose(&self, pose: CameraPose) {
        let mut feed = self.feed();
        feed.pose = Some(pose);
        feed.status = TrackingStatus::Normal;
    }

    /// Point the camera from `position` along `forward`.
    pub fn look(&self, position: Vec3, forward: Vec3) {
        self.set_pose(CameraPose::looking_to(position, forward));
    }

    /// Lose the pose, e.g. when tracking is interrupted.
    pub fn clear_pose(&self, status: TrackingStatus) {
        let mut feed = self.feed();
        feed.pose = None;
        feed.status = status;
    }

    pub fn is_running(&self) -> bool {
        self.feed().running
    }
}

impl TrackingSession for ScriptedTracking {
    fn current_camera_pose(&self) -> Option<CameraPose> {
        let feed = self.feed();
        if feed.running {
            feed.pose
        } else {
            None
        }
    }

    fn status(&self) -> TrackingStatus {
        self.feed().status.clone()
    }

    fn start(&mut self) {
        self.feed().running = true;
        log::debug!("Tracking session started");
    }

    fn pause(&mut self) {
        self.feed().running = false;
        log::debug!("Tracking session paused");
    }
}
