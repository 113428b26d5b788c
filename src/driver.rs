//! Frame loop lifecycle
//!
//! Owns the drift state between frames and tracks the host's pending
//! frame request so teardown can cancel it. The host provides the actual
//! scheduling (requestAnimationFrame, a timer, a plain loop).

use crate::achievement::{Achievement, recent};
use crate::settings::DriftSettings;
use crate::sim::{DriftState, Viewport, tick};

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Frames are being requested and stepped
    Animating,
    /// No frames pending; state is frozen
    Stopped,
}

/// Opaque id for a scheduled frame (requestAnimationFrame's return value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Drift animation loop
#[derive(Debug)]
pub struct FrameLoop {
    settings: DriftSettings,
    phase: LoopPhase,
    state: DriftState,
    /// Achievements backing the current cards, same order
    achievements: Vec<Achievement>,
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn new(settings: DriftSettings) -> Self {
        Self {
            settings,
            phase: LoopPhase::Stopped,
            state: DriftState {
                seed: 0,
                frame: 0,
                cards: Vec::new(),
            },
            achievements: Vec::new(),
            pending: None,
        }
    }

    /// Replace the card set from a new achievement snapshot
    ///
    /// Returns a previously scheduled frame that the caller must cancel.
    /// An empty snapshot stops the loop.
    pub fn load(&mut self, achievements: &[Achievement], seed: u64) -> Option<FrameHandle> {
        let stale = self.pending.take();

        self.achievements = recent(achievements, self.settings.recent_limit);
        self.state = DriftState::spawn(&self.achievements, seed, &self.settings);

        if self.state.is_empty() {
            if self.phase == LoopPhase::Animating {
                log::info!("No achievements to show, drift stopped");
            }
            self.phase = LoopPhase::Stopped;
        } else {
            log::info!(
                "Spawned {} achievement cards (seed {})",
                self.state.len(),
                seed
            );
            self.phase = LoopPhase::Animating;
        }

        stale
    }

    /// Handle one fired frame
    ///
    /// Returns whether the host should schedule another.
    pub fn on_frame(&mut self, viewport: Viewport) -> bool {
        self.pending = None;
        if self.phase != LoopPhase::Animating {
            return false;
        }
        tick(&mut self.state, viewport, &self.settings);
        true
    }

    /// Record the handle of the next scheduled frame
    pub fn scheduled(&mut self, handle: FrameHandle) {
        self.pending = Some(handle);
    }

    /// Stop for good; returns the frame the caller must cancel
    pub fn teardown(&mut self) -> Option<FrameHandle> {
        if self.phase == LoopPhase::Animating {
            log::info!("Drift stopped after {} frames", self.state.frame);
        }
        self.phase = LoopPhase::Stopped;
        self.pending.take()
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == LoopPhase::Animating
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Latest published state
    pub fn state(&self) -> &DriftState {
        &self.state
    }

    /// Achievements in card order
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn settings(&self) -> &DriftSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievements(n: usize) -> Vec<Achievement> {
        (0..n)
            .map(|i| Achievement::new(format!("a{}", i), "Done", format!("2026-01-{:02}", i + 1)))
            .collect()
    }

    #[test]
    fn test_starts_stopped() {
        let mut frame_loop = FrameLoop::new(DriftSettings::default());
        assert_eq!(frame_loop.phase(), LoopPhase::Stopped);
        assert!(!frame_loop.on_frame(Viewport::default()));
    }

    #[test]
    fn test_load_applies_recent_limit() {
        let mut frame_loop = FrameLoop::new(DriftSettings::default());
        frame_loop.load(&achievements(12), 1);
        assert_eq!(frame_loop.state().len(), 8);
        // Newest first
        assert_eq!(frame_loop.achievements()[0].id, "a11");
        assert_eq!(frame_loop.state().cards[0].id, "a11");
    }

    #[test]
    fn test_load_returns_stale_handle() {
        let mut frame_loop = FrameLoop::new(DriftSettings::default());
        assert_eq!(frame_loop.load(&achievements(2), 1), None);
        frame_loop.scheduled(FrameHandle(7));
        assert_eq!(frame_loop.load(&achievements(3), 2), Some(FrameHandle(7)));
        assert_eq!(frame_loop.pending(), None);
        assert_eq!(frame_loop.state().frame, 0);
    }

    #[test]
    fn test_empty_load_stops() {
        let mut frame_loop = FrameLoop::new(DriftSettings::default());
        frame_loop.load(&achievements(2), 1);
        assert!(frame_loop.is_animating());
        frame_loop.load(&[], 1);
        assert_eq!(frame_loop.phase(), LoopPhase::Stopped);
        assert!(!frame_loop.on_frame(Viewport::default()));
    }
}
