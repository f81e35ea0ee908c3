//! Mapping from typed keys to string indices.

use crate::{Error, Result};

/// The 37-key layout: two piano-style rows on a QWERTY keyboard.
pub const GUITAR_HERO_KEYS: &str = "q2we4r5ty7u8i9op-[=zxdcfvgbnjmk,.;/' ";

/// An ordered set of keys; the position of a key is the index of the string
/// it plucks.
///
/// # Examples
///
/// ```
/// use plectrum::KeyLayout;
///
/// let layout = KeyLayout::guitar_hero();
/// assert_eq!(layout.len(), 37);
/// assert_eq!(layout.index_of('q'), Some(0));
/// assert_eq!(layout.index_of('v'), Some(24));
/// assert_eq!(layout.index_of('#'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    keys: Vec<char>,
}

impl KeyLayout {
    /// Creates a layout from the characters of `keys`, lowest pitch first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `keys` is empty or repeats a key.
    pub fn new(keys: &str) -> Result<Self> {
        let keys: Vec<char> = keys.chars().collect();
        if keys.is_empty() {
            return Err(Error::InvalidConfiguration(
                "keyboard layout is empty".into(),
            ));
        }
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(Error::InvalidConfiguration(format!(
                    "key '{}' appears more than once in the layout",
                    key
                )));
            }
        }
        Ok(Self { keys })
    }

    /// The default 37-key layout.
    pub fn guitar_hero() -> Self {
        Self {
            keys: GUITAR_HERO_KEYS.chars().collect(),
        }
    }

    /// Index of the string plucked by `key`, if the key is mapped.
    pub fn index_of(&self, key: char) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    /// Key mapped to `index`.
    pub fn key_at(&self, index: usize) -> Option<char> {
        self.keys.get(index).copied()
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a constructed layout.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the keys in index order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.keys.iter().copied()
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::guitar_hero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guitar_hero_layout() {
        let layout = KeyLayout::guitar_hero();
        assert_eq!(layout.len(), 37);
        assert_eq!(layout.key_at(0), Some('q'));
        assert_eq!(layout.key_at(36), Some(' '));
        assert_eq!(layout.key_at(37), None);
        assert_eq!(layout.index_of(' '), Some(36));
        assert_eq!(layout.index_of('z'), Some(19));
    }

    #[test]
    fn test_guitar_hero_keys_are_unique() {
        assert!(KeyLayout::new(GUITAR_HERO_KEYS).is_ok());
    }

    #[test]
    fn test_round_trip_every_key() {
        let layout = KeyLayout::guitar_hero();
        for (i, key) in layout.keys().enumerate() {
            assert_eq!(layout.index_of(key), Some(i));
        }
    }

    #[test]
    fn test_custom_layout() {
        let layout = KeyLayout::new("asdf").unwrap();
        assert_eq!(layout.index_of('f'), Some(3));
        assert_eq!(layout.index_of('q'), None);
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(matches!(
            KeyLayout::new(""),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            KeyLayout::new("abca"),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
