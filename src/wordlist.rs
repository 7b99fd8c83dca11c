use crate::charset::Charset;
use crate::pattern::Pattern;
use crate::range::LengthRange;

/// ワードリスト生成の設定一式。
///
/// 文字セット・長さ範囲・パターン (省略可) を保持し、`words` で候補単語の
/// 遅延イテレータを作る。構築後は不変。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Wordlist {
    charset: Charset,
    range: LengthRange,
    pattern: Option<Pattern>,
}

impl Wordlist {
    /// 設定から `Wordlist` を作る。
    ///
    /// パターンの長さが範囲外にある場合、範囲はパターンの長さに固定される。
    /// これはエラーではない。固定が起きたかどうかは `range` を比較すれば分かる。
    pub fn new(charset: Charset, range: LengthRange, pattern: Option<Pattern>) -> Self {
        let range = match &pattern {
            Some(pattern) if !range.contains(pattern.len()) => {
                LengthRange::pinned(pattern.len())
            }
            _ => range,
        };

        Self {
            charset,
            range,
            pattern,
        }
    }

    /// 文字セットを返す。
    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// 実効の長さ範囲を返す。パターンによる固定後の値。
    pub fn range(&self) -> LengthRange {
        self.range
    }

    /// パターンを返す。
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// 候補単語を列挙する遅延イテレータを返す。
    ///
    /// 呼び出すたびに先頭の組み合わせから列挙し直す。途中から再開する手段はない。
    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }
}

/// `Wordlist::words` が返す遅延イテレータ。
///
/// 長さごとに文字セットの直積を列挙する。順序は文字セットを桁記号とする
/// 基数 `|charset|` のカウントアップと同じで、最右位置が最速で変化する:
///
/// ```text
/// aa, ab, ba, bb      (charset = "ab", 長さ 2)
/// ```
///
/// パターンがある場合、長さの一致しない長さは丸ごと飛ばし、
/// 一致する長さの候補はパターン判定を通った単語のみを返す。
/// 内部状態は文字セットへの桁インデックス列のみであり、
/// 候補単語を一度に 1 つしか保持しない。
#[derive(Clone, Debug)]
pub struct Words<'a> {
    charset: &'a Charset,
    pattern: Option<&'a Pattern>,
    lengths: std::ops::RangeInclusive<usize>,
    digits: Option<Vec<usize>>,
}

impl<'a> Words<'a> {
    fn new(wordlist: &'a Wordlist) -> Self {
        Self {
            charset: &wordlist.charset,
            pattern: wordlist.pattern.as_ref(),
            lengths: wordlist.range.lengths(),
            digits: None,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let charset = self.charset;

        loop {
            if let Some(digits) = &mut self.digits {
                let word: String = digits.iter().map(|&i| charset[i]).collect();

                // 最右位置から桁上がり付きでインクリメントする。
                // 全桁が一巡したらこの長さは終わり。
                let mut exhausted = true;
                for d in digits.iter_mut().rev() {
                    *d += 1;
                    if *d < charset.len() {
                        exhausted = false;
                        break;
                    }
                    *d = 0;
                }
                if exhausted {
                    self.digits = None;
                }

                match self.pattern {
                    Some(pattern) if !pattern.matches(&word) => {}
                    _ => return Some(word),
                }
            } else {
                // 次の長さへ。パターンと長さの合わない長さは丸ごと飛ばす。
                let len = self.lengths.next()?;
                if matches!(self.pattern, Some(pattern) if pattern.len() != len) {
                    continue;
                }
                self.digits = Some(vec![0; len]);
            }
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}
