//! 内容审核
//!
//! 按单个空格切分正文，逐词（忽略大小写、整词匹配）替换屏蔽词。

use std::collections::HashSet;

/// 屏蔽词的替换文本。
pub const MASK: &str = "****";

/// 对 `text` 进行屏蔽词替换。
///
/// 词与 `banned_words` 的比较两侧都忽略大小写。连续空格会产生空词并原样保留，
/// 拼接时始终使用单个空格，因此输出与输入的空格布局一致。
pub fn moderate(text: &str, banned_words: &HashSet<String>) -> String {
    mask_words(text, |folded| {
        banned_words.contains(folded)
            || banned_words
                .iter()
                .any(|banned| banned.to_lowercase() == folded)
    })
}

/// `is_banned` 接收小写后的词
fn mask_words(text: &str, is_banned: impl Fn(&str) -> bool) -> String {
    text.split(' ')
        .map(|word| {
            if is_banned(&word.to_lowercase()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 持有一组屏蔽词的审核器。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentModerator {
    banned_words: HashSet<String>,
}

impl ContentModerator {
    pub fn new<I, S>(banned_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            banned_words: banned_words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn moderate(&self, text: &str) -> String {
        // 构造时已统一为小写
        mask_words(text, |folded| self.banned_words.contains(folded))
    }

    pub fn banned_words(&self) -> &HashSet<String> {
        &self.banned_words
    }
}

impl Default for ContentModerator {
    fn default() -> Self {
        Self::new(["kerfuffle", "sharbert", "fornax"])
    }
}
