//! Monthly Note Table.
//!
//! Fixed seasonal commentary for each calendar month, with an upright and a
//! reversed variant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::Orientation;
use crate::error::AppError;

/// Calendar month, 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 12;

    /// Out-of-range months are rejected with `AppError::Validation`.
    pub fn new(number: u8) -> Result<Self, AppError> {
        if (Self::FIRST..=Self::LAST).contains(&number) {
            Ok(Month(number))
        } else {
            Err(AppError::Validation(format!(
                "month must be between 1 and 12, got {}",
                number
            )))
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (Self::FIRST..=Self::LAST).map(Month)
    }
}

impl TryFrom<u8> for Month {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}月", self.0)
    }
}

struct MonthlyNote {
    normal: &'static str,
    reversed: &'static str,
}

static MONTHLY_NOTES: [MonthlyNote; 12] = [
    MonthlyNote {
        normal: "新年伊始，适合设定全年目标，为接下来的行动打好基础。",
        reversed: "新年伊始不宜仓促许下承诺，先观察再做决定。",
    },
    MonthlyNote {
        normal: "春节前后人情往来频繁，是加深关系与沟通的好时机。",
        reversed: "节日氛围中注意控制开销，避免人情负担过重。",
    },
    MonthlyNote {
        normal: "春回大地，万物复苏，适合启动新的计划。",
        reversed: "春季气候多变，计划推进时注意留有余地。",
    },
    MonthlyNote {
        normal: "春意正浓，学习与成长的效率较高。",
        reversed: "春困容易让人懈怠，注意保持节奏。",
    },
    MonthlyNote {
        normal: "初夏精力充沛，适合积极拓展与社交。",
        reversed: "忙碌中容易忽略休息，注意劳逸结合。",
    },
    MonthlyNote {
        normal: "年中是检视上半年成果、调整方向的好时机。",
        reversed: "年中压力集中显现，避免急于求成。",
    },
    MonthlyNote {
        normal: "盛夏能量旺盛，适合全力推进重要事项。",
        reversed: "暑热易使人烦躁，遇事先冷静再回应。",
    },
    MonthlyNote {
        normal: "夏末秋初，前期努力开始显现回报。",
        reversed: "换季时节注意身体，避免透支。",
    },
    MonthlyNote {
        normal: "金秋送爽，是收获与总结的季节。",
        reversed: "收获季节也要警惕过度乐观，稳中求进。",
    },
    MonthlyNote {
        normal: "秋高气爽，适合规划与稳固已有的成果。",
        reversed: "秋季易生倦意，注意调节情绪。",
    },
    MonthlyNote {
        normal: "深秋渐凉，适合沉淀与储备能量。",
        reversed: "年末将近，避免因焦虑而匆忙收尾。",
    },
    MonthlyNote {
        normal: "岁末年终，适合回顾全年、感恩并展望来年。",
        reversed: "年末事务繁杂，注意分清轻重缓急。",
    },
];

/// Seasonal note for a month in the given orientation
pub fn monthly_note(month: Month, orientation: Orientation) -> &'static str {
    let note = &MONTHLY_NOTES[usize::from(month.number() - 1)];
    match orientation {
        Orientation::Upright => note.normal,
        Orientation::Reversed => note.reversed,
    }
}
