//! Gift hand-off through the public API.
//!
//! # Running
//!
//! ```sh
//! cargo test --test delivery_harness
//! ```

use pretty_assertions::assert_eq;

use game_recommender::delivery::{DefaultPerson, DeliveryError, Gift, PersonId, send};

fn gift(to: &PersonId) -> Gift<u32> {
    Gift {
        description: "coins".to_string(),
        content: 50,
        sender: PersonId::new("Ivan", "Petrov"),
        receiver: to.clone(),
    }
}

#[test]
fn delivered_gift_reaches_receiver() {
    let maria = PersonId::new("Maria", "Ivanova");
    let mut receiver = DefaultPerson::new(maria.clone());

    send(&mut receiver, gift(&maria)).expect("delivery");
    send(&mut receiver, gift(&maria)).expect("delivery");

    let contents: Vec<u32> = receiver.received().iter().map(|g| g.content).collect();
    assert_eq!(contents, vec![50, 50]);
}

#[test]
fn gift_for_someone_else_is_refused() {
    let maria = PersonId::new("Maria", "Ivanova");
    let georgi = PersonId::new("Georgi", "Dimitrov");
    let mut receiver = DefaultPerson::new(maria);

    let err = send(&mut receiver, gift(&georgi)).expect_err("wrong receiver");
    assert!(matches!(err, DeliveryError::WrongReceiver { .. }));
    assert!(receiver.received().is_empty());
}
