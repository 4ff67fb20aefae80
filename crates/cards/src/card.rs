// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing card definitions.
use serde::Serialize;
use std::{fmt, str::FromStr};

/// A unique card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CardId(i64);

impl CardId {
    /// Creates an id with the given value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns this id and advances it to the next one.
    pub(crate) fn post_increment(&mut self) -> CardId {
        let id = *self;
        self.0 += 1;
        id
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }

    /// The suit name as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ();

    /// Parses a suit name, the match is case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::suits().find(|suit| suit.name() == s).ok_or(())
    }
}

/// Card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Value {
    /// Ace
    Ace,
    /// Deuce
    #[serde(rename = "2")]
    Deuce,
    /// Trey
    #[serde(rename = "3")]
    Trey,
    /// Four
    #[serde(rename = "4")]
    Four,
    /// Five
    #[serde(rename = "5")]
    Five,
    /// Six
    #[serde(rename = "6")]
    Six,
    /// Seven
    #[serde(rename = "7")]
    Seven,
    /// Eight
    #[serde(rename = "8")]
    Eight,
    /// Nine
    #[serde(rename = "9")]
    Nine,
    /// Ten
    #[serde(rename = "10")]
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Value {
    /// Returns all values.
    pub fn values() -> impl DoubleEndedIterator<Item = Value> {
        use Value::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// The value name as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Value::Ace => "Ace",
            Value::Deuce => "2",
            Value::Trey => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Value {
    type Err = ();

    /// Parses a value name, the match is case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::values().find(|value| value.name() == s).ok_or(())
    }
}

/// A card in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    /// The card id.
    pub id: CardId,
    /// The card suit.
    pub suit: Suit,
    /// The card value.
    pub value: Value,
}

impl Card {
    /// Create a card given an id, suit and value.
    pub fn new(id: CardId, suit: Suit, value: Value) -> Card {
        Self { id, suit, value }
    }

    /// Checks if this card has the given suit and value.
    pub fn matches(&self, suit: Suit, value: Value) -> bool {
        self.suit == suit && self.value == value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}
