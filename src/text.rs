//! Small text helpers shared by the classifier and the runner state machine.

/// Clause separators used in live-text commentary.
const CLAUSE_SEPARATORS: &[char] = &['，', ',', '。', '；', ';', '、'];

/// Split commentary into trimmed, non-empty clauses.
///
/// "擊出一壘安打，一壘跑者上二壘" yields `["擊出一壘安打", "一壘跑者上二壘"]`.
pub fn clauses(s: &str) -> impl Iterator<Item = &str> {
    s.split(CLAUSE_SEPARATORS)
        .map(str::trim)
        .filter(|c| !c.is_empty())
}

/// True if `haystack` contains any of the `needles`.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| {
        let n = n.as_ref();
        !n.is_empty() && haystack.contains(n)
    })
}

/// Parse a small count written with ASCII digits, full-width digits, or
/// Chinese numerals ("3", "３", "三", "兩", "十").
pub fn parse_count(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let ascii: String = s
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            _ => c,
        })
        .collect();
    if ascii.chars().all(|c| c.is_ascii_digit()) {
        return ascii.parse().ok();
    }

    let mut chars = s.chars();
    let first = chars.next()?;
    let rest: String = chars.collect();
    match (chinese_digit(first), rest.as_str()) {
        (Some(d), "") => Some(d),
        // 十一 .. 十九
        (Some(10), tail) => tail.chars().next().and_then(chinese_digit).map(|d| 10 + d),
        _ => None,
    }
}

fn chinese_digit(c: char) -> Option<u32> {
    Some(match c {
        '零' => 0,
        '一' => 1,
        '二' | '兩' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' => 10,
        _ => return None,
    })
}
