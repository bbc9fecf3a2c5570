// Generic first-in-first-out queue
//
// Emptiness is observable as Option: draining past the last element
// yields None instead of panicking, and callers decide what that
// means for them.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Fifo<T> {
    elements: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Fifo {
            elements: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add an element at the back of the queue
    pub fn push(&mut self, element: T) {
        self.elements.push_back(element);
    }

    /// Remove and return the oldest element, None when the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Look at the oldest element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Person;

    #[test]
    fn test_empty_queue_returns_none() {
        let mut queue: Fifo<Person> = Fifo::new();

        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
        assert!(queue.peek().is_none());

        // Still None on repeated drains
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_first_in_first_out_order() {
        let mut queue = Fifo::new();
        queue.push(Person::new("Mathias", "Grønne", 29));
        queue.push(Person::new("Tobias", "Nielsen", 35));

        assert_eq!(queue.len(), 2);

        let first = queue.pop().unwrap();
        assert_eq!(first.full_name(), "Mathias Grønne");
        assert_eq!(queue.len(), 1);

        let second = queue.pop().unwrap();
        assert_eq!(second.full_name(), "Tobias Nielsen");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = Fifo::new();
        queue.push(42);

        assert_eq!(queue.peek(), Some(&42));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(42));
    }

    #[test]
    fn test_interleaved_push_and_pop() {
        let mut queue = Fifo::new();
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.pop(), Some(1));

        queue.push(3);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert!(queue.is_empty());
    }
}
