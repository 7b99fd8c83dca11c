use thiserror::Error;

/// 単語長の範囲。`min <= max` が常に成り立つ。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// 最小長と最大長から `LengthRange` を作る。`min > max` ならエラーを返す。
    pub const fn new(min: usize, max: usize) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    /// 単一の長さのみを含む `LengthRange` を作る。
    pub const fn pinned(len: usize) -> Self {
        Self { min: len, max: len }
    }

    /// 最小長を返す。
    pub const fn min(self) -> usize {
        self.min
    }

    /// 最大長を返す。
    pub const fn max(self) -> usize {
        self.max
    }

    /// `len` が範囲内にあるかどうかを返す。
    pub const fn contains(self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// 範囲内の長さを昇順で返す。
    pub fn lengths(self) -> std::ops::RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// 長さ範囲の構築時に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    /// 最小長が最大長を超えている。
    #[error("minimum length {min} is greater than maximum length {max}")]
    Inverted { min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    #[test]
    fn test_length_range_new() {
        let range = LengthRange::new(1, 3).unwrap();
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), 3);

        assert!(LengthRange::new(0, 0).is_ok());
        assert_eq!(
            LengthRange::new(3, 1),
            Err(RangeError::Inverted { min: 3, max: 1 })
        );
    }

    #[test]
    fn test_length_range_pinned() {
        let range = LengthRange::pinned(5);
        assert_eq!(range.min(), 5);
        assert_eq!(range.max(), 5);
    }

    #[test]
    fn test_length_range_contains() {
        let range = LengthRange::new(1, 3).unwrap();
        assert!(range.contains(1));
        assert!(range.contains(3));
        assert!(!range.contains(0));
        assert!(!range.contains(4));
    }

    #[test]
    fn test_length_range_lengths() {
        assert_equal(LengthRange::new(1, 3).unwrap().lengths(), 1..=3);
        assert_equal(LengthRange::pinned(2).lengths(), 2..=2);
    }
}
