// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardstore playing cards types.
//!
//! This crate defines the cards stored by the collection service:
//!
//! ```
//! # use cardstore_cards::{Suit, Value};
//! let suit = "Hearts".parse::<Suit>().unwrap();
//! let value = "10".parse::<Value>().unwrap();
//! assert_eq!(value, Value::Ten);
//! ```
//!
//! and a [CardCollection] that keeps unique cards in insertion order:
//!
//! ```
//! # use cardstore_cards::{CardCollection, CardError, Suit, Value};
//! let mut cards = CardCollection::default();
//! assert_eq!(cards.count(), 4);
//!
//! let card = cards.create(Suit::Hearts, Value::Deuce).unwrap();
//! assert_eq!(card.id.value(), 5);
//!
//! // Ace of Hearts is one of the seed cards.
//! let res = cards.create(Suit::Hearts, Value::Ace);
//! assert!(matches!(res, Err(CardError::Duplicate { .. })));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod card;
mod collection;

pub use card::{Card, CardId, Suit, Value};
pub use collection::{CardCollection, CardError};
