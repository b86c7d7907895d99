//! Property suites for the engine's hard invariants.

use std::sync::Arc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gestura_catalog::{GestureCatalog, GestureTemplate, TemplateFrame};
use gestura_core::{Joint, Language, Pose, PoseDelta, TrackTime};
use gestura_engine::{
    compile_track, select_stress_words, CandidateSource, CompilerConfig, GestureEngine,
    ScheduledGesture, SelectorConfig, StressCandidate, Utterance,
};

const WORDS: &[&str] = &[
    "hallo", "ik", "je", "doei", "robot", "mooi", "huis", "fiets", "boom", "vandaag", "verhaal",
    "zee", "wolk", "groot", "klein", "vertelt",
];

fn candidates(
    words: &[&str],
    mask: &[bool],
    source: CandidateSource,
) -> Vec<StressCandidate> {
    words
        .iter()
        .enumerate()
        .filter(|(index, _)| mask.get(*index).copied().unwrap_or(false))
        .map(|(index, word)| StressCandidate::new(index, *word, source))
        .collect()
}

proptest! {
    /// Monotonicity, duration bound, and completeness hold for any input.
    #[test]
    fn synchronized_tracks_hold_the_core_invariants(
        word_picks in proptest::collection::vec(0..WORDS.len(), 1..40),
        semantic_mask in proptest::collection::vec(any::<bool>(), 40),
        grammatical_mask in proptest::collection::vec(any::<bool>(), 40),
        seed in any::<u64>(),
    ) {
        let words: Vec<&str> = word_picks.iter().map(|&pick| WORDS[pick]).collect();
        let text = words.join(" ");
        let semantic = candidates(&words, &semantic_mask, CandidateSource::Semantic);
        let grammatical = candidates(&words, &grammatical_mask, CandidateSource::Grammatical);

        let engine = GestureEngine::new(Arc::new(GestureCatalog::builtin()));
        let plan = engine
            .synchronize(
                &text,
                Language::Dutch,
                semantic,
                grammatical,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

        prop_assert!(plan.track.is_monotonic());
        if let Some(last) = plan.track.last_time() {
            prop_assert!(last <= plan.speech_duration);
            prop_assert!(plan.track.frames[0].at >= TrackTime::ZERO);
        }
        for keyframe in plan.track.iter() {
            for joint in Joint::ALL {
                prop_assert!(keyframe.pose.angle(joint).is_finite());
            }
        }
    }

    /// The selector's output is ascending and duplicate-free for any
    /// pair of ascending candidate channels.
    #[test]
    fn selections_are_ascending_and_duplicate_free(
        word_picks in proptest::collection::vec(0..WORDS.len(), 1..40),
        semantic_mask in proptest::collection::vec(any::<bool>(), 40),
        grammatical_mask in proptest::collection::vec(any::<bool>(), 40),
    ) {
        let words: Vec<&str> = word_picks.iter().map(|&pick| WORDS[pick]).collect();
        let semantic = candidates(&words, &semantic_mask, CandidateSource::Semantic);
        let grammatical = candidates(&words, &grammatical_mask, CandidateSource::Grammatical);

        let picks = select_stress_words(
            Language::Dutch,
            &semantic,
            &grammatical,
            &SelectorConfig::default(),
        );

        prop_assert!(picks
            .windows(2)
            .all(|pair| pair[0].word_index < pair[1].word_index));
    }

    /// The compiler keeps emitted gestures at least `minimum_gap` words
    /// apart, whatever schedule it is handed.
    #[test]
    fn emitted_gestures_respect_the_word_gap(
        indices in proptest::collection::btree_set(0usize..40, 0..12),
    ) {
        // single-frame markers: the delta value names the word index, so
        // emitted frames can be traced back to their gesture
        let templates: Vec<GestureTemplate> = indices
            .iter()
            .map(|&word_index| {
                GestureTemplate::new(
                    format!("marker {word_index}"),
                    vec![TemplateFrame::new(
                        TrackTime::ZERO,
                        PoseDelta::new().with(Joint::HeadYaw, word_index as f32),
                    )],
                )
            })
            .collect();
        let scheduled: Vec<ScheduledGesture> = indices
            .iter()
            .zip(&templates)
            .map(|(&word_index, template)| ScheduledGesture { word_index, template })
            .collect();

        let utterance = Utterance::analyze(&vec!["woord"; 40].join(" "), Language::Dutch);
        let config = CompilerConfig::default();
        let track = compile_track(&scheduled, &utterance, &Pose::rest(), &config).unwrap();

        let emitted: Vec<usize> = track
            .iter()
            .filter(|frame| frame.delta.len() == 1)
            .filter_map(|frame| frame.delta.get(Joint::HeadYaw))
            .map(|value| value as usize)
            .collect();

        prop_assert!(emitted
            .windows(2)
            .all(|pair| pair[1] - pair[0] >= config.minimum_gap));
    }
}
