//! End-to-end pipeline tests over the builtin catalog.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use gestura_catalog::GestureCatalog;
use gestura_core::{Joint, Language, TrackTime};
use gestura_engine::{CandidateSource, GestureEngine, StressCandidate};

fn engine() -> GestureEngine {
    GestureEngine::new(Arc::new(GestureCatalog::builtin()))
}

#[test]
fn greeting_utterance_waves_and_fits_the_speech_window() {
    // "hallo" is an iconic greeting; "robot" is ranked by the tagger but
    // sits so close to the end that its beat cannot finish in time
    let plan = engine()
        .synchronize(
            "Hallo ik ben een robot",
            Language::Dutch,
            vec![StressCandidate::new(0, "hallo", CandidateSource::Semantic)],
            vec![StressCandidate::new(3, "een", CandidateSource::Grammatical)],
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();

    assert_eq!(plan.speech_duration, TrackTime::from_millis(1554));

    // only the wave plays: three keyframes, arm fully raised first
    let times: Vec<i64> = plan.track.iter().map(|frame| frame.at.as_millis()).collect();
    assert_eq!(times, vec![550, 825, 1100]);
    assert_eq!(plan.track.frames[0].pose.angle(Joint::LeftUpperPitch), -2.0);

    assert!(plan.track.is_monotonic());
    assert!(plan.track.last_time().unwrap() <= plan.speech_duration);
}

#[test]
fn crowded_beat_candidates_collapse_to_one_gesture() {
    // both channels rank words two positions apart; the second pick is
    // inside the minimum gap and is skipped
    let plan = engine()
        .synchronize(
            "de robot vertelt vandaag een mooi verhaal over de zee",
            Language::Dutch,
            vec![StressCandidate::new(3, "vandaag", CandidateSource::Semantic)],
            vec![StressCandidate::new(1, "robot", CandidateSource::Grammatical)],
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();

    // one gesture's worth of keyframes, nothing else
    assert!(!plan.track.is_empty());
    assert!(plan.track.len() <= 3);
    assert!(plan.track.is_monotonic());
}

#[test]
fn every_keyframe_pose_specifies_every_joint() {
    let plan = engine()
        .synchronize(
            "ik wil je vandaag een heel lang verhaal vertellen over de grote \
             blauwe zee en de kleine witte wolken die erboven hangen",
            Language::Dutch,
            vec![
                StressCandidate::new(7, "verhaal", CandidateSource::Semantic),
                StressCandidate::new(15, "zee", CandidateSource::Semantic),
            ],
            vec![
                StressCandidate::new(0, "ik", CandidateSource::Grammatical),
                StressCandidate::new(19, "witte", CandidateSource::Grammatical),
            ],
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();

    assert!(!plan.track.is_empty());
    for keyframe in plan.track.iter() {
        for joint in Joint::ALL {
            assert!(keyframe.pose.angle(joint).is_finite());
        }
    }
}

#[test]
fn unsupported_language_tag_fails_before_tokenizing() {
    let err = "fr".parse::<Language>().unwrap_err();
    assert!(matches!(
        err,
        gestura_core::GestureError::InvalidLanguage(tag) if tag == "fr"
    ));
}
