/// Focus queue result type
use super::song::Song;
use serde::{Deserialize, Serialize};

/// A randomly assembled, duration-bounded playback sequence
///
/// Regenerated on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusQueue {
    /// Songs in playback order
    pub songs: Vec<Song>,

    /// Session length the caller asked for, in minutes
    pub requested_minutes: f64,

    /// Session length the caller asked for, in whole seconds
    pub requested_seconds: u64,

    /// Sum of the durations of `songs`, in seconds
    pub actual_seconds: u64,
}

impl FocusQueue {
    /// Number of songs in the queue
    pub fn count(&self) -> usize {
        self.songs.len()
    }

    /// Whether no song fit the requested duration
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Achieved duration in minutes, rounded to two decimals
    pub fn actual_minutes(&self) -> f64 {
        (self.actual_seconds as f64 / 60.0 * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(requested_minutes: f64, requested_seconds: u64) -> FocusQueue {
        FocusQueue {
            songs: Vec::new(),
            requested_minutes,
            requested_seconds,
            actual_seconds: 0,
        }
    }

    #[test]
    fn empty_queue() {
        let queue = queue(25.0, 1500);
        assert!(queue.is_empty());
        assert_eq!(queue.count(), 0);
        assert_eq!(queue.actual_seconds, 0);
        assert_eq!(queue.requested_seconds, 1500);
    }

    #[test]
    fn actual_minutes_rounds_to_two_decimals() {
        let mut queue = queue(30.0, 1800);
        queue.actual_seconds = 1001;
        assert!((queue.actual_minutes() - 16.68).abs() < f64::EPSILON);
    }
}
