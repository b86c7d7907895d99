//! Stress-word selection
//!
//! Merges the semantic and grammatical candidate channels into one
//! ascending, duplicate-free set of words to animate. The channels take
//! turns so neither dominates; a minimum word gap keeps beat gestures
//! from crowding; iconic trigger words are sovereign: they are always
//! selected and evict a too-close beat pick that precedes them.
//!
//! Ties between the channels are resolved by alternation order, not by
//! any ranking magnitude. The compiler re-checks spacing on the emitted
//! timeline; this stage only shapes the candidate set.

use gestura_catalog::IconicKind;
use gestura_core::Language;

use crate::{CandidateSource, StressCandidate};

/// Selector tuning.
#[derive(Clone, Copy, Debug)]
pub struct SelectorConfig {
    /// Minimum word-index distance between two selected beat words.
    pub minimum_gap: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig { minimum_gap: 7 }
    }
}

/// Why a word was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerReason {
    /// Matched an iconic trigger vocabulary; gets that fixed template.
    Iconic(IconicKind),
    /// Ranked by a candidate channel; gets a beat template.
    Beat(CandidateSource),
}

/// A word chosen to carry a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub word_index: usize,
    pub reason: TriggerReason,
}

/// Two-cursor merge state over the candidate channels.
///
/// Alternation is first-class state, not a loop counter, so tests can
/// drive and inspect it.
#[derive(Clone, Copy, Debug)]
pub struct MergeState {
    pub semantic_cursor: usize,
    pub grammatical_cursor: usize,
    /// Whose turn it is. The grammatical channel opens.
    pub turn: CandidateSource,
    /// Word index of the most recent selection, iconic or beat.
    pub last_position: Option<usize>,
}

impl Default for MergeState {
    fn default() -> Self {
        MergeState {
            semantic_cursor: 0,
            grammatical_cursor: 0,
            turn: CandidateSource::Grammatical,
            last_position: None,
        }
    }
}

/// Merge the two candidate channels into the final selection set.
///
/// Both inputs must be ascending by word index (see
/// [`sanitize`](crate::sanitize)). The output is ascending and
/// duplicate-free; on a duplicate index the first pick wins.
pub fn select_stress_words(
    language: Language,
    semantic: &[StressCandidate],
    grammatical: &[StressCandidate],
    config: &SelectorConfig,
) -> Vec<Selection> {
    let mut state = MergeState::default();
    merge_channels(&mut state, language, semantic, grammatical, config)
}

/// Run the merge from an explicit state.
///
/// The state is left at its final cursors, so callers and tests can
/// observe how the channels interleaved.
pub fn merge_channels(
    state: &mut MergeState,
    language: Language,
    semantic: &[StressCandidate],
    grammatical: &[StressCandidate],
    config: &SelectorConfig,
) -> Vec<Selection> {
    let mut picks: Vec<Selection> = Vec::new();

    loop {
        let semantic_done = state.semantic_cursor >= semantic.len();
        let grammatical_done = state.grammatical_cursor >= grammatical.len();
        if semantic_done && grammatical_done {
            break;
        }
        // an exhausted channel forfeits its remaining turns
        if semantic_done {
            state.turn = CandidateSource::Grammatical;
        } else if grammatical_done {
            state.turn = CandidateSource::Semantic;
        }

        let candidate = match state.turn {
            CandidateSource::Semantic => {
                let candidate = &semantic[state.semantic_cursor];
                state.semantic_cursor += 1;
                candidate
            }
            CandidateSource::Grammatical => {
                let candidate = &grammatical[state.grammatical_cursor];
                state.grammatical_cursor += 1;
                candidate
            }
        };

        if let Some(kind) = IconicKind::for_word(&candidate.text, language) {
            evict_crowded_beat(&mut picks, candidate.word_index, config.minimum_gap);
            picks.push(Selection {
                word_index: candidate.word_index,
                reason: TriggerReason::Iconic(kind),
            });
            state.last_position = Some(candidate.word_index);
            // iconic picks keep the turn
            continue;
        }

        if let Some(last) = state.last_position {
            if candidate.word_index.abs_diff(last) < config.minimum_gap {
                // crowded: skip without yielding the turn
                continue;
            }
        }

        picks.push(Selection {
            word_index: candidate.word_index,
            reason: TriggerReason::Beat(state.turn),
        });
        state.last_position = Some(candidate.word_index);
        state.turn = state.turn.other();
    }

    dedup_first_wins(&mut picks);
    picks.sort_by_key(|selection| selection.word_index);
    picks
}

/// Iconic priority: a beat pick in the word window just before an iconic
/// word loses its slot to the iconic gesture.
fn evict_crowded_beat(picks: &mut Vec<Selection>, iconic_index: usize, minimum_gap: usize) {
    let preceding = picks
        .iter()
        .enumerate()
        .filter(|(_, pick)| {
            matches!(pick.reason, TriggerReason::Beat(_)) && pick.word_index < iconic_index
        })
        .max_by_key(|(_, pick)| pick.word_index)
        .map(|(position, _)| position);

    if let Some(position) = preceding {
        if iconic_index - picks[position].word_index < minimum_gap {
            let evicted = picks.remove(position);
            tracing::debug!(
                evicted = evicted.word_index,
                iconic = iconic_index,
                "iconic trigger evicted a crowded beat pick"
            );
        }
    }
}

fn dedup_first_wins(picks: &mut Vec<Selection>) {
    let mut seen: Vec<usize> = Vec::with_capacity(picks.len());
    picks.retain(|selection| {
        if seen.contains(&selection.word_index) {
            false
        } else {
            seen.push(selection.word_index);
            true
        }
    });
}
