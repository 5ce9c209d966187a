//! 書き換え規則の定義

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, NoExpand, Regex};

use crate::error::{RuleError, TokenizerResult};

/// マッチした箇所をどう書き換えるか
#[derive(Clone, Copy)]
pub enum Replacement {
    /// 固定文字列で置き換える（`$` は展開しない）
    Literal(&'static str),
    /// キャプチャから置換文字列を組み立てる
    With(fn(&Captures<'_>) -> String),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(s) => write!(f, "Literal({:?})", s),
            Replacement::With(_) => write!(f, "With(<fn>)"),
        }
    }
}

/// パターンと置換方法の組
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// パターンをコンパイルして規則を作成
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: Replacement,
    ) -> TokenizerResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|source| RuleError::InvalidPattern { rule: name, source })?;
        Ok(Self {
            name,
            pattern,
            replacement,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    /// バッファ全体を左から一度だけ走査し、重ならないマッチをすべて書き換える
    ///
    /// マッチがなければ借用のまま返す。
    pub fn apply<'t>(&self, buffer: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Literal(text) => self.pattern.replace_all(buffer, NoExpand(text)),
            Replacement::With(build) => self.pattern.replace_all(buffer, build),
        }
    }
}

/// マッチ全体の前後に空白を入れる
pub fn surround_with_spaces(caps: &Captures<'_>) -> String {
    format!(" {} ", &caps[0])
}

/// 2つのグループそれぞれの前に空白を入れる
pub fn prefix_groups_with_spaces(caps: &Captures<'_>) -> String {
    format!(" {} {}", &caps[1], &caps[2])
}

/// 2つのグループそれぞれの後に空白を入れる
pub fn suffix_groups_with_spaces(caps: &Captures<'_>) -> String {
    format!("{} {} ", &caps[1], &caps[2])
}
