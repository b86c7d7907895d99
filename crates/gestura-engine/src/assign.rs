//! Gesture assignment
//!
//! Iconic selections map one-to-one to their fixed templates. Beat
//! selections draw from a pool shuffled once per utterance and consumed
//! round-robin, so a long utterance reuses the pool in the same shuffled
//! order rather than repeating one gesture.

use rand::seq::SliceRandom;
use rand::Rng;

use gestura_catalog::{GestureCatalog, GestureTemplate};
use gestura_core::{GestureError, GestureResult};

use crate::{Selection, TriggerReason};

/// A selection bound to its concrete template.
#[derive(Clone, Debug)]
pub struct ScheduledGesture<'a> {
    pub word_index: usize,
    pub template: &'a GestureTemplate,
}

/// Bind each selection to a template.
///
/// Assignment itself never fails; an empty beat pool is a configuration
/// error surfaced before any selection is looked at.
pub fn assign_gestures<'a, R: Rng + ?Sized>(
    selections: &[Selection],
    catalog: &'a GestureCatalog,
    rng: &mut R,
) -> GestureResult<Vec<ScheduledGesture<'a>>> {
    if catalog.beats().is_empty() {
        return Err(GestureError::EmptyGesturePool);
    }

    let mut pool: Vec<&GestureTemplate> = catalog.beats().iter().collect();
    pool.shuffle(rng);

    let mut scheduled = Vec::with_capacity(selections.len());
    let mut beats_drawn = 0usize;

    for selection in selections {
        let template = match selection.reason {
            TriggerReason::Iconic(kind) => catalog.iconic(kind),
            TriggerReason::Beat(_) => {
                let template = pool[beats_drawn % pool.len()];
                beats_drawn += 1;
                template
            }
        };
        scheduled.push(ScheduledGesture {
            word_index: selection.word_index,
            template,
        });
    }

    Ok(scheduled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CandidateSource;
    use gestura_catalog::IconicKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn beat(word_index: usize) -> Selection {
        Selection {
            word_index,
            reason: TriggerReason::Beat(CandidateSource::Grammatical),
        }
    }

    fn iconic(word_index: usize, kind: IconicKind) -> Selection {
        Selection {
            word_index,
            reason: TriggerReason::Iconic(kind),
        }
    }

    #[test]
    fn test_iconic_selection_gets_its_fixed_template() {
        let catalog = GestureCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let scheduled = assign_gestures(
            &[iconic(0, IconicKind::Greeting)],
            &catalog,
            &mut rng,
        )
        .unwrap();

        assert_eq!(scheduled.len(), 1);
        assert_eq!(
            scheduled[0].template.name(),
            catalog.iconic(IconicKind::Greeting).name()
        );
    }

    #[test]
    fn test_beats_cycle_through_the_shuffled_pool() {
        let catalog = GestureCatalog::builtin();
        let pool_size = catalog.beats().len();
        let mut rng = StdRng::seed_from_u64(7);

        let selections: Vec<Selection> =
            (0..pool_size + 2).map(|i| beat(i * 10)).collect();
        let scheduled = assign_gestures(&selections, &catalog, &mut rng).unwrap();

        // a full cycle visits every template exactly once
        let mut first_cycle: Vec<&str> = scheduled[..pool_size]
            .iter()
            .map(|gesture| gesture.template.name())
            .collect();
        first_cycle.sort_unstable();
        first_cycle.dedup();
        assert_eq!(first_cycle.len(), pool_size);

        // the pool wraps around in the same shuffled order
        assert_eq!(
            scheduled[pool_size].template.name(),
            scheduled[0].template.name()
        );
        assert_eq!(
            scheduled[pool_size + 1].template.name(),
            scheduled[1].template.name()
        );
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let catalog = GestureCatalog::builtin();
        let selections: Vec<Selection> = (0..4).map(|i| beat(i * 10)).collect();

        let first = assign_gestures(&selections, &catalog, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = assign_gestures(&selections, &catalog, &mut StdRng::seed_from_u64(42)).unwrap();

        let names = |scheduled: &[ScheduledGesture]| {
            scheduled
                .iter()
                .map(|gesture| gesture.template.name().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_empty_pool_is_a_configuration_error() {
        let stock = GestureCatalog::builtin();
        let broken = GestureCatalog::new(
            vec![],
            stock.iconic(IconicKind::Greeting).clone(),
            stock.iconic(IconicKind::SelfReference).clone(),
            stock.iconic(IconicKind::Addressee).clone(),
            gestura_core::Pose::rest(),
        );
        // the catalog already refuses to exist without beats
        assert!(matches!(broken, Err(GestureError::EmptyGesturePool)));
    }
}
