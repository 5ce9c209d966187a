//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、トークナイザ全体で使用される統一的なエラー型を提供します。
//! 書き換え規則の適用そのものは失敗しないため、エラーになるのは
//! 入力の受け取りと規則の構築だけです。

use thiserror::Error;

/// トークナイザの統一エラー型
#[derive(Error, Debug, Clone)]
pub enum TokenizerError {
    /// 入力エラー
    #[error("入力エラー: {0}")]
    Input(#[from] InputError),

    /// 規則構築エラー
    #[error("規則構築エラー: {0}")]
    Rule(#[from] RuleError),

    /// 入出力エラー
    #[error("入出力エラー: {0}")]
    Io(String),
}

/// 入力エラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("入力が有効なUTF-8ではありません (バイトオフセット {offset})")]
    InvalidUtf8 { offset: usize },
}

/// 規則構築エラーの詳細
#[derive(Error, Debug, Clone)]
pub enum RuleError {
    #[error("規則 {rule} のパターンが不正です: {source}")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl TokenizerError {
    /// 不正なUTF-8入力のエラーを作成
    pub fn invalid_utf8(offset: usize) -> Self {
        TokenizerError::Input(InputError::InvalidUtf8 { offset })
    }
}

impl From<std::io::Error> for TokenizerError {
    fn from(e: std::io::Error) -> Self {
        TokenizerError::Io(e.to_string())
    }
}

/// Result型のエイリアス
pub type TokenizerResult<T> = Result<T, TokenizerError>;
