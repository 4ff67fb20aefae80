// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! In-memory card collection.
use std::str::FromStr;
use thiserror::Error;

use crate::card::{Card, CardId, Suit, Value};

/// The cards present when a collection is created.
const SEED_CARDS: [(Suit, Value); 4] = [
    (Suit::Hearts, Value::Ace),
    (Suit::Spades, Value::King),
    (Suit::Diamonds, Value::Queen),
    (Suit::Clubs, Value::Jack),
];

/// Errors returned by collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The id is not an integer.
    #[error("Invalid ID format. ID must be a number.")]
    InvalidId,
    /// The suit or the value of a new card is missing.
    #[error("Missing required fields. Both \"suit\" and \"value\" are required.")]
    MissingField,
    /// The suit is not one of the known suits.
    #[error("Invalid suit. Valid suits are: {}", valid_suits())]
    InvalidSuit,
    /// The value is not one of the known values.
    #[error("Invalid value. Valid values are: {}", valid_values())]
    InvalidValue,
    /// A card with the same suit and value is already in the collection.
    #[error("Card {value} of {suit} already exists in the collection")]
    Duplicate {
        /// The duplicated suit.
        suit: Suit,
        /// The duplicated value.
        value: Value,
    },
    /// No card with the given id.
    #[error("Card with ID {0} not found")]
    NotFound(CardId),
    /// The id is an integer outside the range of card ids.
    #[error("Card with ID {0} not found")]
    UnknownId(String),
}

fn valid_suits() -> String {
    Suit::suits().map(|s| s.name()).collect::<Vec<_>>().join(", ")
}

fn valid_values() -> String {
    Value::values().map(|v| v.name()).collect::<Vec<_>>().join(", ")
}

impl FromStr for CardId {
    type Err = CardError;

    /// Parses the leading integer of a string.
    ///
    /// Leading whitespace and an optional sign are accepted, anything after
    /// the first run of digits is ignored. Returns [CardError::InvalidId] if
    /// there are no digits and [CardError::UnknownId] if the integer is too
    /// large for an id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
        let sign_len = s.len() - unsigned.len();

        let digits_len = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        if digits_len == 0 {
            return Err(CardError::InvalidId);
        }

        let number = &s[..sign_len + digits_len];
        number
            .parse::<i64>()
            .map(CardId::new)
            .map_err(|_| CardError::UnknownId(number.trim_start_matches('+').to_string()))
    }
}

/// An ordered collection of unique cards.
///
/// Cards are kept in insertion order, ids are assigned from a counter that
/// only moves forward so an id is never given to two cards.
#[derive(Debug, Clone)]
pub struct CardCollection {
    cards: Vec<Card>,
    next_id: CardId,
}

impl CardCollection {
    /// Creates an empty collection whose first card gets id 1.
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            next_id: CardId::new(1),
        }
    }

    /// Creates a collection with the four seed cards.
    pub fn with_seed_cards() -> Self {
        let mut collection = Self::empty();
        for (suit, value) in SEED_CARDS {
            let id = collection.next_id.post_increment();
            collection.cards.push(Card::new(id, suit, value));
        }

        collection
    }

    /// All the cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the collection.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Gets the card with the given id.
    pub fn get(&self, id: CardId) -> Result<Card, CardError> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .copied()
            .ok_or(CardError::NotFound(id))
    }

    /// Adds a new card to the end of the collection.
    ///
    /// Returns error if a card with the same suit and value exists.
    pub fn create(&mut self, suit: Suit, value: Value) -> Result<Card, CardError> {
        if self.cards.iter().any(|c| c.matches(suit, value)) {
            return Err(CardError::Duplicate { suit, value });
        }

        let card = Card::new(self.next_id.post_increment(), suit, value);
        self.cards.push(card);
        Ok(card)
    }

    /// Removes the card with the given id and returns it.
    pub fn delete(&mut self, id: CardId) -> Result<Card, CardError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(CardError::NotFound(id))?;
        Ok(self.cards.remove(pos))
    }
}

impl Default for CardCollection {
    fn default() -> Self {
        Self::with_seed_cards()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn id(n: i64) -> CardId {
        CardId::new(n)
    }

    #[test]
    fn seed_cards() {
        let cc = CardCollection::default();
        assert_eq!(cc.count(), 4);

        let cards = cc
            .cards()
            .iter()
            .map(|c| (c.id.value(), c.suit, c.value))
            .collect::<Vec<_>>();
        assert_eq!(
            cards,
            vec![
                (1, Suit::Hearts, Value::Ace),
                (2, Suit::Spades, Value::King),
                (3, Suit::Diamonds, Value::Queen),
                (4, Suit::Clubs, Value::Jack),
            ]
        );

        assert_eq!(CardCollection::empty().count(), 0);
    }

    #[test]
    fn get_card() {
        let cc = CardCollection::default();
        let card = cc.get(id(3)).unwrap();
        assert_eq!(card, Card::new(id(3), Suit::Diamonds, Value::Queen));

        assert_eq!(cc.get(id(999)), Err(CardError::NotFound(id(999))));
        assert_eq!(cc.get(id(-1)), Err(CardError::NotFound(id(-1))));
    }

    #[test]
    fn parse_id() {
        assert_eq!("12".parse::<CardId>(), Ok(id(12)));
        assert_eq!("-3".parse::<CardId>(), Ok(id(-3)));
        assert_eq!("+7".parse::<CardId>(), Ok(id(7)));
        assert_eq!("007".parse::<CardId>(), Ok(id(7)));

        // Leading whitespace and trailing characters are ignored.
        assert_eq!(" 1".parse::<CardId>(), Ok(id(1)));
        assert_eq!("1abc".parse::<CardId>(), Ok(id(1)));
        assert_eq!("1.5".parse::<CardId>(), Ok(id(1)));
        assert_eq!("-2x".parse::<CardId>(), Ok(id(-2)));

        assert_eq!("abc".parse::<CardId>(), Err(CardError::InvalidId));
        assert_eq!("".parse::<CardId>(), Err(CardError::InvalidId));
        assert_eq!("-".parse::<CardId>(), Err(CardError::InvalidId));
        assert_eq!("+-1".parse::<CardId>(), Err(CardError::InvalidId));
        assert_eq!(".5".parse::<CardId>(), Err(CardError::InvalidId));

        // Too large for an id.
        let res = "99999999999999999999".parse::<CardId>();
        assert_eq!(
            res,
            Err(CardError::UnknownId("99999999999999999999".to_string()))
        );
        assert_eq!(
            res.unwrap_err().to_string(),
            "Card with ID 99999999999999999999 not found"
        );
        assert_eq!(
            "-99999999999999999999abc".parse::<CardId>(),
            Err(CardError::UnknownId("-99999999999999999999".to_string()))
        );
    }

    #[test]
    fn create_cards() {
        let mut cc = CardCollection::default();

        let card = cc.create(Suit::Hearts, Value::Deuce).unwrap();
        assert_eq!(card, Card::new(id(5), Suit::Hearts, Value::Deuce));
        assert_eq!(cc.count(), 5);
        assert_eq!(cc.cards().last(), Some(&card));

        // Same suit and value must fail.
        let res = cc.create(Suit::Hearts, Value::Ace);
        assert_eq!(
            res,
            Err(CardError::Duplicate {
                suit: Suit::Hearts,
                value: Value::Ace
            })
        );
        assert_eq!(cc.count(), 5);

        // A failed create doesn't consume an id.
        let card = cc.create(Suit::Clubs, Value::Ten).unwrap();
        assert_eq!(card.id, id(6));
    }

    #[test]
    fn ids_always_increase() {
        let mut cc = CardCollection::default();
        let mut ids = cc.cards().iter().map(|c| c.id).collect::<HashSet<_>>();
        let mut last = cc.cards().iter().map(|c| c.id).max().unwrap();

        for suit in Suit::suits() {
            for value in Value::values() {
                if let Ok(card) = cc.create(suit, value) {
                    assert!(card.id > last);
                    last = card.id;
                    assert!(ids.insert(card.id));
                }
            }
        }

        // A full deck.
        assert_eq!(cc.count(), 52);
        assert_eq!(ids.len(), 52);

        // Ids are not reused after a delete.
        cc.delete(last).unwrap();
        let card = cc.create(Suit::Spades, Value::King);
        assert!(card.is_err());
        let card = cc.delete(id(2)).unwrap();
        let card = cc.create(card.suit, card.value).unwrap();
        assert!(card.id > last);
    }

    #[test]
    fn delete_card() {
        let mut cc = CardCollection::default();

        let card = cc.delete(id(2)).unwrap();
        assert_eq!(card, Card::new(id(2), Suit::Spades, Value::King));
        assert_eq!(cc.get(id(2)), Err(CardError::NotFound(id(2))));
        assert_eq!(cc.delete(id(2)), Err(CardError::NotFound(id(2))));

        // Order is preserved.
        let ids = cc.cards().iter().map(|c| c.id.value()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3, 4]);

        // The card can be added back with a new id.
        let card = cc.create(Suit::Spades, Value::King).unwrap();
        assert_eq!(card.id, id(5));
        let ids = cc.cards().iter().map(|c| c.id.value()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CardError::InvalidSuit.to_string(),
            "Invalid suit. Valid suits are: Hearts, Diamonds, Clubs, Spades"
        );
        assert_eq!(
            CardError::InvalidValue.to_string(),
            "Invalid value. Valid values are: Ace, 2, 3, 4, 5, 6, 7, 8, 9, 10, Jack, Queen, King"
        );
        assert_eq!(
            CardError::Duplicate {
                suit: Suit::Hearts,
                value: Value::Ace
            }
            .to_string(),
            "Card Ace of Hearts already exists in the collection"
        );
        assert_eq!(
            CardError::NotFound(id(999)).to_string(),
            "Card with ID 999 not found"
        );
    }
}
