//! Itinerary ranking.
//!
//! Orders candidate itineraries so the most useful option comes first.

use crate::domain::Itinerary;

/// Rank itineraries by preference, best first.
///
/// The key is [`Itinerary::score`]: arrival epoch plus half the travel
/// time, so a later but much shorter trip can beat an earlier long one. The
/// sort is stable; itineraries with equal scores keep the order the journey
/// planner returned them in.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(Itinerary::score);
    itineraries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{direct, leg};

    #[test]
    fn short_trip_beats_early_long_trip() {
        // A: arrival 1000, duration 600, score 1300
        let a = direct(400, 1000);
        // B: arrival 1200, duration 0, score 1200
        let b = direct(1200, 1200);

        let ranked = rank_itineraries(vec![a.clone(), b.clone()]);
        assert_eq!(ranked, vec![b, a]);
    }

    #[test]
    fn ties_keep_input_order() {
        // Both score 1300, told apart by origin
        let first = Itinerary::new(leg("Gent-Sint-Pieters", 400), vec![], leg("Brugge", 1000)).unwrap();
        let second = Itinerary::new(leg("Oostende", 400), vec![], leg("Brugge", 1000)).unwrap();

        let ranked = rank_itineraries(vec![first.clone(), second.clone()]);
        assert_eq!(ranked[0].departure().station, "Gent-Sint-Pieters");
        assert_eq!(ranked[1].departure().station, "Oostende");

        let ranked = rank_itineraries(vec![second, first]);
        assert_eq!(ranked[0].departure().station, "Oostende");
    }

    #[test]
    fn empty_input() {
        assert!(rank_itineraries(vec![]).is_empty());
    }
}
