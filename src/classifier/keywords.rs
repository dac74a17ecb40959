//! Built-in keyword tables for play classification.
//!
//! Order inside [`CATEGORY_TABLE`] is significant: sacrifice, fielder's
//! choice and error phrasing routinely also contains on-base or out words,
//! so those three categories are tested first.

use crate::event::ResultCategory;

/// Ordered (category, keywords) pairs. First matching category wins.
pub const CATEGORY_TABLE: &[(ResultCategory, &[&str])] = &[
    (
        ResultCategory::Sacrifice,
        &["犧牲觸擊", "犧牲短打", "犧牲飛球", "高飛犧牲打", "犧牲打", "犧牲"],
    ),
    (ResultCategory::FieldersChoice, &["野手選擇", "野選"]),
    (ResultCategory::Error, &["失誤"]),
    (
        ResultCategory::OnBase,
        &[
            "全壘打",
            "三壘安打",
            "二壘安打",
            "一壘安打",
            "內野安打",
            "安打",
            "故意四壞",
            "四壞球",
            "四壞",
            "保送",
            "觸身球",
            "觸身",
        ],
    ),
    (
        ResultCategory::Out,
        &[
            "三振",
            "滾地球出局",
            "飛球出局",
            "平飛球出局",
            "界外飛球",
            "雙殺",
            "封殺",
            "觸殺",
            "出局",
        ],
    ),
];

/// Phrases that describe something other than a completed plate appearance:
/// pickoffs, steals, wild pitches, passed balls, balks, substitutions,
/// timeouts and mound visits.
pub const NON_PLATE_APPEARANCE: &[&str] = &[
    "牽制",
    "盜壘",
    "暴投",
    "捕逸",
    "投手犯規",
    "更換",
    "替換",
    "代打",
    "代跑",
    "代守",
    "暫停",
    "投手丘",
];

/// Phrases that only appear when the batter's plate appearance ended.
/// Any of these overrides a non-plate-appearance phrase.
pub const PLATE_APPEARANCE_OUTCOME: &[&str] = &[
    "安打",
    "全壘打",
    "四壞",
    "保送",
    "三振",
    "犧牲",
    "失誤",
    "觸身",
    "野手選擇",
    "滾地球",
    "飛球",
    "平飛",
    "雙殺",
];
