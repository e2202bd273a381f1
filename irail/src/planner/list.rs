//! The ranked working set of one route query.

use crate::domain::Itinerary;

/// Error choosing an itinerary from the list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Index outside the remaining options
    #[error("no option {index}, there are {len} left")]
    IndexOutOfRange { index: i64, len: usize },
}

/// Remaining itineraries, best first.
///
/// Every removal takes exactly one entry; the relative order of the rest
/// never changes, so displayed indices stay meaningful until the next
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryList {
    items: Vec<Itinerary>,
}

impl ItineraryList {
    /// Wrap an already ranked list.
    pub fn new(ranked: Vec<Itinerary>) -> Self {
        Self { items: ranked }
    }

    /// Remove and return the top-ranked itinerary.
    pub fn pop_best(&mut self) -> Option<Itinerary> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Remove and return the itinerary at `index`.
    ///
    /// Leaves the list unchanged on error.
    pub fn take(&mut self, index: i64) -> Result<Itinerary, SelectionError> {
        let len = self.items.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(self.items.remove(i)),
            _ => Err(SelectionError::IndexOutOfRange { index, len }),
        }
    }

    /// Remove every itinerary, in order.
    pub fn drain_all(&mut self) -> Vec<Itinerary> {
        std::mem::take(&mut self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Itinerary> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::direct;

    fn sample() -> ItineraryList {
        ItineraryList::new(vec![direct(0, 100), direct(0, 200), direct(0, 300)])
    }

    #[test]
    fn pop_best_takes_the_head() {
        let mut list = sample();
        assert_eq!(list.pop_best(), Some(direct(0, 100)));
        assert_eq!(list.len(), 2);

        let mut empty = ItineraryList::default();
        assert_eq!(empty.pop_best(), None);
    }

    #[test]
    fn take_removes_exactly_one() {
        let mut list = sample();
        assert_eq!(list.take(1), Ok(direct(0, 200)));
        assert_eq!(
            list.iter().cloned().collect::<Vec<_>>(),
            vec![direct(0, 100), direct(0, 300)]
        );
    }

    #[test]
    fn out_of_range_leaves_list_unchanged() {
        let mut list = sample();
        assert_eq!(
            list.take(5),
            Err(SelectionError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(
            list.take(-1),
            Err(SelectionError::IndexOutOfRange { index: -1, len: 3 })
        );
        assert_eq!(list, sample());
    }

    #[test]
    fn drain_all_empties() {
        let mut list = sample();
        assert_eq!(list.drain_all().len(), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn error_message() {
        let err = SelectionError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "no option 5, there are 3 left");
    }
}
