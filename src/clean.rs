//! Optional pre-processing that removes comments the lexicon cannot judge:
//! emoji are stripped, and comments left empty or not written in English
//! are dropped.

use whatlang::Lang;
use yt_comments::Comment;

fn is_emoji(c: char) -> bool {
    matches!(c as u32,
        0x1F000..=0x1FAFF   // mahjong, cards, enclosed, pictographs, emoticons, transport, symbols
        | 0x2600..=0x27BF   // misc symbols, dingbats
        | 0x2B00..=0x2BFF   // arrows and stars
        | 0x2300..=0x23FF   // misc technical (watch, hourglass)
        | 0x2194..=0x2199   // arrows
        | 0x21A9..=0x21AA
        | 0x2934..=0x2935
        | 0x25AA..=0x25AB   // small squares
        | 0x25B6
        | 0x25C0
        | 0x25FB..=0x25FE
        | 0x00A9            // copyright
        | 0x00AE            // registered
        | 0x203C            // double exclamation
        | 0x2049            // exclamation question
        | 0x2122            // trade mark
        | 0x2139            // information
        | 0x24C2            // circled M
        | 0x3030            // wavy dash
        | 0x303D            // part alternation mark
        | 0x3297
        | 0x3299
        | 0xFE00..=0xFE0F   // variation selectors
        | 0x200D            // zero width joiner
        | 0x20E3            // combining keycap
        | 0xE0020..=0xE007F // tag sequences
    )
}

/// Remove emoji code points and trim what is left.
pub fn strip_emoji(text: &str) -> String {
    text.chars()
        .filter(|c| !is_emoji(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// True when the language detector settles on English.
pub fn is_english(text: &str) -> bool {
    whatlang::detect(text).is_some_and(|info| info.lang() == Lang::Eng)
}

/// Strip emoji from every comment and keep only the English ones.
/// Returns the kept comments in their original order and how many were dropped.
pub fn clean(comments: Vec<Comment>) -> (Vec<Comment>, usize) {
    let total = comments.len();
    let kept: Vec<Comment> = comments
        .into_iter()
        .filter_map(|mut comment| {
            comment.text = strip_emoji(&comment.text);
            if comment.text.is_empty() || !is_english(&comment.text) {
                tracing::debug!(comment_id = %comment.id, "dropping comment");
                return None;
            }
            Some(comment)
        })
        .collect();

    let removed = total - kept.len();
    (kept, removed)
}
