//! Color channels and per-channel storage.
//!
//! `Channel` names one of the three scoring dimensions. `ChannelMap<T>`
//! stores exactly one `T` per channel and backs the coefficient, bound,
//! and RGB sample types.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the three scoring dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Upper-case letter used in effect text.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Channel::R => 'R',
            Channel::G => 'G',
            Channel::B => 'B',
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Fixed-size map with one entry per channel.
///
/// ## Example
///
/// ```
/// use rgba_puzzle::core::{Channel, ChannelMap};
///
/// let mut weights = ChannelMap::splat(0.33);
/// weights[Channel::G] = 0.5;
///
/// assert_eq!(weights[Channel::R], 0.33);
/// assert_eq!(weights[Channel::G], 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMap<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T> ChannelMap<T> {
    /// Create a map from explicit per-channel values.
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Channel) -> T) -> Self {
        Self {
            r: factory(Channel::R),
            g: factory(Channel::G),
            b: factory(Channel::B),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Iterate over (Channel, &T) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> {
        [(Channel::R, &self.r), (Channel::G, &self.g), (Channel::B, &self.b)].into_iter()
    }
}

impl<T> Index<Channel> for ChannelMap<T> {
    type Output = T;

    fn index(&self, channel: Channel) -> &Self::Output {
        match channel {
            Channel::R => &self.r,
            Channel::G => &self.g,
            Channel::B => &self.b,
        }
    }
}

impl<T> IndexMut<Channel> for ChannelMap<T> {
    fn index_mut(&mut self, channel: Channel) -> &mut Self::Output {
        match channel {
            Channel::R => &mut self.r,
            Channel::G => &mut self.g,
            Channel::B => &mut self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_order() {
        let letters: String = Channel::ALL.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, "RGB");
        assert_eq!(format!("{}", Channel::G), "G");
    }

    #[test]
    fn test_channel_map_from_fn() {
        let map = ChannelMap::from_fn(|c| c.letter());

        assert_eq!(map[Channel::R], 'R');
        assert_eq!(map[Channel::G], 'G');
        assert_eq!(map[Channel::B], 'B');
    }

    #[test]
    fn test_channel_map_index_mut() {
        let mut map = ChannelMap::splat(1);
        map[Channel::B] = 7;

        let values: Vec<_> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 1, 7]);
    }
}
