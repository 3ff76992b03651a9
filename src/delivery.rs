//! Gift hand-off between two people.
//!
//! [`send`] checks that a gift is addressed to the person it is handed to
//! and then passes it on to that person's [`Person::receive_gift`].

use std::fmt;

use thiserror::Error;

/// Identity of a person taking part in a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId {
    pub first_name: String,
    pub last_name: String,
}

impl PersonId {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A gift carrying some content `T` from a sender to an intended receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Gift<T> {
    pub description: String,
    pub content: T,
    pub sender: PersonId,
    pub receiver: PersonId,
}

/// Anyone who can be handed a gift.
pub trait Person<T> {
    fn id(&self) -> &PersonId;

    /// Called once per successful delivery.
    fn receive_gift(&mut self, gift: Gift<T>);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("wrong receiver: gift is for {expected}, not {actual}")]
    WrongReceiver { expected: PersonId, actual: PersonId },
}

/// Hand `gift` to `receiver` if it is addressed to them.
pub fn send<T, P>(receiver: &mut P, gift: Gift<T>) -> Result<(), DeliveryError>
where
    P: Person<T> + ?Sized,
{
    if receiver.id() != &gift.receiver {
        return Err(DeliveryError::WrongReceiver {
            expected: gift.receiver,
            actual: receiver.id().clone(),
        });
    }

    log::debug!("delivering '{}' from {} to {}", gift.description, gift.sender, gift.receiver);
    receiver.receive_gift(gift);
    Ok(())
}

/// A person that keeps every gift it receives.
#[derive(Debug)]
pub struct DefaultPerson<T> {
    id: PersonId,
    received: Vec<Gift<T>>,
}

impl<T> DefaultPerson<T> {
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            received: Vec::new(),
        }
    }

    pub fn received(&self) -> &[Gift<T>] {
        &self.received
    }
}

impl<T> Person<T> for DefaultPerson<T> {
    fn id(&self) -> &PersonId {
        &self.id
    }

    fn receive_gift(&mut self, gift: Gift<T>) {
        self.received.push(gift);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn gift_for(receiver: PersonId) -> Gift<&'static str> {
        Gift {
            description: "book".to_string(),
            content: "Dune",
            sender: PersonId::new("Ann", "Lee"),
            receiver,
        }
    }

    struct CountingPerson {
        id: PersonId,
        calls: usize,
    }

    impl Person<&'static str> for CountingPerson {
        fn id(&self) -> &PersonId {
            &self.id
        }

        fn receive_gift(&mut self, _gift: Gift<&'static str>) {
            self.calls += 1;
        }
    }

    #[test]
    fn matching_receiver_gets_gift_once() {
        let mut bob = CountingPerson {
            id: PersonId::new("Bob", "Stone"),
            calls: 0,
        };
        send(&mut bob, gift_for(PersonId::new("Bob", "Stone"))).unwrap();
        assert_eq!(bob.calls, 1);
    }

    #[test]
    fn wrong_receiver_is_rejected_without_delivery() {
        let mut bob = CountingPerson {
            id: PersonId::new("Bob", "Stone"),
            calls: 0,
        };
        let err = send(&mut bob, gift_for(PersonId::new("Eve", "Moss"))).unwrap_err();
        assert_eq!(
            err,
            DeliveryError::WrongReceiver {
                expected: PersonId::new("Eve", "Moss"),
                actual: PersonId::new("Bob", "Stone"),
            }
        );
        assert_eq!(bob.calls, 0);
    }

    #[test]
    fn default_person_keeps_received_gifts() {
        let id = PersonId::new("Bob", "Stone");
        let mut bob = DefaultPerson::new(id.clone());
        send(&mut bob, gift_for(id)).unwrap();
        assert_eq!(bob.received().len(), 1);
        assert_eq!(bob.received()[0].content, "Dune");
    }
}
