//! Focus queue generation
//!
//! A focus queue is a random playback sequence for a timed listening
//! session. Its total duration never exceeds the requested session length.
//!
//! Algorithm:
//! 1. Convert the requested minutes to whole seconds (the budget)
//! 2. Shuffle the candidate pool (Fisher-Yates, so every draw is uniform
//!    and without replacement)
//! 3. Walk the shuffled pool once, taking every song that still fits the
//!    remaining budget and skipping the ones that don't
//! 4. Stop early once no remaining candidate can fit

use melo_core::{CatalogStore, FocusQueue, MeloError, Result, Song};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Budget in whole seconds for a session of `duration_minutes`
///
/// Rejects non-finite and non-positive values. Durations are whole seconds,
/// so flooring the budget never excludes a queue that would have fit.
pub fn target_seconds(duration_minutes: f64) -> Result<u64> {
    if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
        return Err(MeloError::validation(format!(
            "duration must be a positive number of minutes, got {duration_minutes}"
        )));
    }

    // Float-to-int casts saturate
    Ok((duration_minutes * 60.0).floor() as u64)
}

/// Pick a random subset of `candidates` whose durations sum to at most `budget_seconds`
///
/// Songs with zero duration and repeated ids are dropped before drawing.
/// Returns the songs in draw order together with their total duration.
pub fn select_within_budget<R: Rng + ?Sized>(
    mut candidates: Vec<Song>,
    budget_seconds: u64,
    rng: &mut R,
) -> (Vec<Song>, u64) {
    let mut seen = HashSet::new();
    candidates.retain(|song| song.has_positive_duration() && seen.insert(song.id.clone()));

    candidates.shuffle(rng);

    // shortest[i] = shortest duration among candidates[i..]
    let mut shortest = vec![u64::MAX; candidates.len() + 1];
    for i in (0..candidates.len()).rev() {
        shortest[i] = shortest[i + 1].min(u64::from(candidates[i].duration));
    }

    let mut remaining = budget_seconds;
    let mut queue = Vec::new();

    for (i, song) in candidates.into_iter().enumerate() {
        if remaining < shortest[i] {
            break;
        }

        let duration = u64::from(song.duration);
        if duration <= remaining {
            remaining -= duration;
            queue.push(song);
        }
    }

    (queue, budget_seconds - remaining)
}

/// Generate a focus queue using a fresh per-call random source
pub async fn generate(catalog: &dyn CatalogStore, duration_minutes: f64) -> Result<FocusQueue> {
    let budget = target_seconds(duration_minutes)?;
    let candidates = catalog.find_all_with_positive_duration().await?;

    let mut rng = rand::thread_rng();
    Ok(assemble(duration_minutes, budget, candidates, &mut rng))
}

/// Generate a focus queue drawing from `rng`
pub async fn generate_with_rng<R: Rng + ?Sized>(
    catalog: &dyn CatalogStore,
    duration_minutes: f64,
    rng: &mut R,
) -> Result<FocusQueue> {
    let budget = target_seconds(duration_minutes)?;
    let candidates = catalog.find_all_with_positive_duration().await?;

    Ok(assemble(duration_minutes, budget, candidates, rng))
}

fn assemble<R: Rng + ?Sized>(
    duration_minutes: f64,
    budget: u64,
    candidates: Vec<Song>,
    rng: &mut R,
) -> FocusQueue {
    let pool_size = candidates.len();
    let (songs, actual_seconds) = select_within_budget(candidates, budget, rng);

    tracing::debug!(
        budget,
        pool_size,
        picked = songs.len(),
        actual_seconds,
        "Focus queue generated"
    );

    FocusQueue {
        songs,
        requested_minutes: duration_minutes,
        requested_seconds: budget,
        actual_seconds,
    }
}
