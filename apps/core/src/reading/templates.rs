//! Interpretation templates.
//!
//! One template per major arcana card, one per minor suit, and a generic
//! fallback. All tables are `'static` and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{MajorArcana, Suit};

/// Life area a card speaks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Career,
    Finance,
    Love,
    Relationship,
    Health,
    Study,
    Family,
}

impl FocusArea {
    /// Display label used in generated interpretations
    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::Career => "事业",
            FocusArea::Finance => "财务",
            FocusArea::Love => "爱情",
            FocusArea::Relationship => "人际",
            FocusArea::Health => "健康",
            FocusArea::Study => "学习",
            FocusArea::Family => "家庭",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Static interpretation template for a canonical card key
#[derive(Debug, PartialEq, Eq)]
pub struct CardTemplate {
    pub year_keywords: &'static [&'static str],
    pub theme: &'static str,
    pub warning: &'static str,
    pub month_keywords: &'static [&'static str],
    pub focus_areas: &'static [FocusArea],
    pub advice: &'static str,
    pub risk: &'static str,
}

use FocusArea::*;

/// Indexed by `MajorArcana` discriminant; the array length makes a missing card a compile error.
static MAJOR_TEMPLATES: [CardTemplate; MajorArcana::COUNT] = [
    // 0 The Fool
    CardTemplate {
        year_keywords: &["新开始", "冒险", "自由", "纯真", "可能性"],
        theme: "这是一个充满新开始的年份，勇敢迈出第一步会带来意想不到的收获。",
        warning: "冲动行事可能让你忽略必要的准备与风险评估。",
        month_keywords: &["尝试", "出发"],
        focus_areas: &[Career, Study],
        advice: "保持开放的心态，大胆尝试新的方向。",
        risk: "计划不周可能导致半途而废。",
    },
    // I The Magician
    CardTemplate {
        year_keywords: &["创造", "行动力", "资源整合", "自信", "表达"],
        theme: "你拥有实现目标所需的一切资源，关键在于主动运用。",
        warning: "能力外露过度可能引来误解，注意言行一致。",
        month_keywords: &["行动", "创造"],
        focus_areas: &[Career, Finance],
        advice: "把想法付诸行动，善用手中已有的资源。",
        risk: "夸大其词或分心过多会削弱执行力。",
    },
    // II The High Priestess
    CardTemplate {
        year_keywords: &["直觉", "内省", "智慧", "沉静", "潜意识"],
        theme: "这一年更适合向内探索，倾听直觉会为你指明方向。",
        warning: "过度封闭自我可能错过与他人交流的机会。",
        month_keywords: &["直觉", "沉淀"],
        focus_areas: &[Study, Health],
        advice: "给自己留出安静思考的时间，相信内在的声音。",
        risk: "压抑情绪或拒绝沟通会造成误会。",
    },
    // III The Empress
    CardTemplate {
        year_keywords: &["丰盛", "滋养", "创造力", "美感", "收获"],
        theme: "丰盛与滋养是今年的主旋律，你播下的种子将逐渐开花结果。",
        warning: "过度安逸与享乐可能让你失去前进的动力。",
        month_keywords: &["滋养", "丰收"],
        focus_areas: &[Family, Love],
        advice: "关爱自己与身边的人，用耐心培育正在成长的事物。",
        risk: "过度付出或放纵消费会带来负担。",
    },
    // IV The Emperor
    CardTemplate {
        year_keywords: &["秩序", "权威", "稳定", "规划", "领导力"],
        theme: "建立结构与秩序是今年的关键，清晰的规划会带来稳定的成果。",
        warning: "控制欲过强可能让合作关系变得紧张。",
        month_keywords: &["规划", "掌控"],
        focus_areas: &[Career, Finance],
        advice: "制定明确的目标与规则，并以身作则地执行。",
        risk: "固执己见或过度控制会引发冲突。",
    },
    // V The Hierophant
    CardTemplate {
        year_keywords: &["传承", "学习", "信念", "规范", "指导"],
        theme: "向传统与前辈学习会让你少走弯路，这是积累与传承的一年。",
        warning: "墨守成规可能限制你的创新与突破。",
        month_keywords: &["学习", "传承"],
        focus_areas: &[Study, Family],
        advice: "寻找值得信赖的导师，系统地学习与积累。",
        risk: "盲从权威会让你失去自己的判断。",
    },
    // VI The Lovers
    CardTemplate {
        year_keywords: &["选择", "结合", "和谐", "价值观", "吸引"],
        theme: "今年你将面对重要的选择，遵从内心的价值观会带来和谐的关系。",
        warning: "在关系中摇摆不定可能错失真正重要的人与机会。",
        month_keywords: &["选择", "关系"],
        focus_areas: &[Love, Relationship],
        advice: "真诚地表达自己，在关系中寻求相互理解。",
        risk: "逃避选择或价值观冲突会带来关系裂痕。",
    },
    // VII The Chariot
    CardTemplate {
        year_keywords: &["前进", "意志力", "胜利", "掌控", "突破"],
        theme: "凭借坚定的意志力，你将在今年取得显著的进展与胜利。",
        warning: "急于求成可能让你忽视方向上的偏差。",
        month_keywords: &["推进", "突破"],
        focus_areas: &[Career, Study],
        advice: "集中精力朝目标前进，保持自律与专注。",
        risk: "方向失控或用力过猛会消耗过多精力。",
    },
    // VIII Strength
    CardTemplate {
        year_keywords: &["勇气", "耐心", "内在力量", "温柔", "自控"],
        theme: "真正的力量来自内心，以温柔与耐心面对挑战会让你更加强大。",
        warning: "压抑情绪或自我怀疑可能削弱你的力量。",
        month_keywords: &["勇气", "耐心"],
        focus_areas: &[Health, Relationship],
        advice: "以柔克刚，用耐心和同理心化解困难。",
        risk: "情绪失控或自信不足会让局面失衡。",
    },
    // IX The Hermit
    CardTemplate {
        year_keywords: &["独处", "反思", "寻求真理", "智慧", "指引"],
        theme: "这是适合沉淀与反思的一年，独处会帮助你找到真正的方向。",
        warning: "过度孤立可能让你与外界脱节。",
        month_keywords: &["反思", "独处"],
        focus_areas: &[Study, Health],
        advice: "为自己留出独处的时间，整理思绪与目标。",
        risk: "长期封闭自我会带来孤独感。",
    },
    // X Wheel of Fortune
    CardTemplate {
        year_keywords: &["转变", "机遇", "循环", "命运", "契机"],
        theme: "命运之轮正在转动，今年会出现改变局面的关键机遇。",
        warning: "运势起伏难免，不要把一切寄托于运气。",
        month_keywords: &["机遇", "转折"],
        focus_areas: &[Career, Finance],
        advice: "敏锐把握出现的机会，顺势而为。",
        risk: "抗拒变化或投机心态会让你错失良机。",
    },
    // XI Justice
    CardTemplate {
        year_keywords: &["公正", "平衡", "责任", "真相", "因果"],
        theme: "今年是收获因果的一年，公正与诚实会为你带来应得的回报。",
        warning: "在判断时带有偏见可能导致不公正的决定。",
        month_keywords: &["平衡", "决断"],
        focus_areas: &[Career, Relationship],
        advice: "做决定前全面权衡，坚持诚信与原则。",
        risk: "逃避责任或失衡的判断会带来后果。",
    },
    // XII The Hanged Man
    CardTemplate {
        year_keywords: &["暂停", "换位思考", "牺牲", "等待", "新视角"],
        theme: "暂时的停顿会带来新的视角，今年适合以不同角度看待问题。",
        warning: "无谓的拖延与牺牲可能让你陷入停滞。",
        month_keywords: &["等待", "换位"],
        focus_areas: &[Study, Health],
        advice: "放下执念，尝试从另一个角度理解现状。",
        risk: "无意义的等待会消磨意志。",
    },
    // XIII Death
    CardTemplate {
        year_keywords: &["结束", "转化", "重生", "放下", "新阶段"],
        theme: "旧阶段的结束意味着新阶段的开始，今年是深刻转化的一年。",
        warning: "抗拒必要的结束会让你停留在过去。",
        month_keywords: &["放下", "转化"],
        focus_areas: &[Career, Relationship],
        advice: "勇敢告别不再适合你的事物，为新事物腾出空间。",
        risk: "执着于过去会阻碍成长。",
    },
    // XIV Temperance
    CardTemplate {
        year_keywords: &["平衡", "调和", "耐心", "节制", "融合"],
        theme: "平衡与调和是今年的主题，循序渐进会带来持久的成果。",
        warning: "走极端或缺乏耐心可能破坏辛苦建立的平衡。",
        month_keywords: &["调和", "节制"],
        focus_areas: &[Health, Relationship],
        advice: "保持适度，在各方面之间寻找平衡点。",
        risk: "过度或失衡会带来身心疲惫。",
    },
    // XV The Devil
    CardTemplate {
        year_keywords: &["欲望", "束缚", "诱惑", "物质", "觉察"],
        theme: "今年需要正视内心的欲望与束缚，觉察是获得自由的第一步。",
        warning: "沉迷诱惑或不健康的依赖可能让你失去自主。",
        month_keywords: &["觉察", "克制"],
        focus_areas: &[Finance, Health],
        advice: "识别让你受困的模式，主动设立健康的界限。",
        risk: "放纵欲望或陷入依赖会带来损失。",
    },
    // XVI The Tower
    CardTemplate {
        year_keywords: &["突变", "觉醒", "打破", "重建", "释放"],
        theme: "突如其来的变化会打破旧有结构，也为重建更坚实的基础创造机会。",
        warning: "忽视潜在的隐患可能让变化来得更加猛烈。",
        month_keywords: &["突变", "重建"],
        focus_areas: &[Career, Family],
        advice: "接受无法避免的变化，把危机当作重建的契机。",
        risk: "抗拒变化或应对失措会扩大冲击。",
    },
    // XVII The Star
    CardTemplate {
        year_keywords: &["希望", "疗愈", "灵感", "信心", "愿景"],
        theme: "希望之光照亮这一年，疗愈与灵感将引领你走向理想。",
        warning: "过于理想化可能让你忽略现实中的细节。",
        month_keywords: &["希望", "疗愈"],
        focus_areas: &[Health, Love],
        advice: "坚定信心，朝着心中的愿景稳步前行。",
        risk: "失去信心或空想不做会让机会溜走。",
    },
    // XVIII The Moon
    CardTemplate {
        year_keywords: &["直觉", "不确定", "潜意识", "梦境", "迷雾"],
        theme: "今年有不少模糊不清的时刻，依靠直觉穿越迷雾才能看清真相。",
        warning: "焦虑与猜疑可能让你误判形势。",
        month_keywords: &["直觉", "探索"],
        focus_areas: &[Health, Relationship],
        advice: "在不确定中保持耐心，多方求证再做决定。",
        risk: "被假象迷惑或过度焦虑会影响判断。",
    },
    // XIX The Sun
    CardTemplate {
        year_keywords: &["成功", "喜悦", "活力", "光明", "自信"],
        theme: "阳光普照的一年，你的努力将获得认可，生活充满喜悦与活力。",
        warning: "过度自信可能让你忽略他人的感受。",
        month_keywords: &["成功", "喜悦"],
        focus_areas: &[Career, Family],
        advice: "尽情展现自我，与身边的人分享成功的喜悦。",
        risk: "骄傲自满会让好运打折扣。",
    },
    // XX Judgement
    CardTemplate {
        year_keywords: &["觉醒", "复兴", "召唤", "反省", "蜕变"],
        theme: "今年是觉醒与复兴之年，回应内心的召唤会迎来重要蜕变。",
        warning: "对过去的自我批判过度可能阻碍你前进。",
        month_keywords: &["觉醒", "评估"],
        focus_areas: &[Career, Study],
        advice: "回顾过往的经验，果断做出新的人生选择。",
        risk: "拒绝反省或犹豫不决会错过转机。",
    },
    // XXI The World
    CardTemplate {
        year_keywords: &["圆满", "完成", "整合", "成就", "旅程"],
        theme: "这是圆满与完成的一年，长期的努力将迎来丰硕的成果。",
        warning: "满足于现状可能让你错过下一段旅程的起点。",
        month_keywords: &["完成", "整合"],
        focus_areas: &[Career, Study],
        advice: "为阶段性成果画上句号，并规划下一段旅程。",
        risk: "收尾不完整会留下遗憾。",
    },
];

static WANDS_TEMPLATE: CardTemplate = CardTemplate {
    year_keywords: &["热情", "行动", "创造力", "事业发展"],
    theme: "热情与行动力推动着这一年，事业与创造方面将有积极进展。",
    warning: "热情过度可能导致精力分散与倦怠。",
    month_keywords: &["行动", "热情"],
    focus_areas: &[Career, Study],
    advice: "抓住灵感，积极推进手头的计划。",
    risk: "冲动或急躁会影响成果。",
};

static CUPS_TEMPLATE: CardTemplate = CardTemplate {
    year_keywords: &["情感", "关系", "直觉", "心灵满足"],
    theme: "情感与关系是这一年的重心，真诚的连接会带来心灵的满足。",
    warning: "情绪化的决定可能让关系出现波动。",
    month_keywords: &["情感", "连接"],
    focus_areas: &[Love, Relationship],
    advice: "真诚表达感受，用心经营重要的关系。",
    risk: "情绪起伏可能影响判断。",
};

static SWORDS_TEMPLATE: CardTemplate = CardTemplate {
    year_keywords: &["思考", "沟通", "决断", "真相"],
    theme: "理性思考与清晰沟通是这一年的关键，果断的决定会扫清障碍。",
    warning: "言语过于尖锐可能伤害到身边的人。",
    month_keywords: &["思考", "沟通"],
    focus_areas: &[Study, Relationship],
    advice: "理清思路，清楚而温和地表达观点。",
    risk: "争执或过度思虑会带来压力。",
};

static PENTACLES_TEMPLATE: CardTemplate = CardTemplate {
    year_keywords: &["物质", "财务", "稳定", "务实"],
    theme: "务实与积累是这一年的主旋律，财务与生活将逐步稳固。",
    warning: "过度关注物质可能忽略了生活的其他层面。",
    month_keywords: &["积累", "务实"],
    focus_areas: &[Finance, Career],
    advice: "脚踏实地，做好财务规划与长期积累。",
    risk: "保守过度或理财失误会影响收益。",
};

static FALLBACK_TEMPLATE: CardTemplate = CardTemplate {
    year_keywords: &["变化", "成长", "机遇"],
    theme: "这一年充满变化与成长的机会，保持灵活会让你收获更多。",
    warning: "面对变化时犹豫不决可能错失机遇。",
    month_keywords: &["变化", "成长"],
    focus_areas: &[Career, Health],
    advice: "顺应变化，灵活调整自己的节奏与计划。",
    risk: "抗拒变化会让你停滞不前。",
};

pub fn major_template(card: MajorArcana) -> &'static CardTemplate {
    &MAJOR_TEMPLATES[card.index()]
}

pub fn suit_template(suit: Suit) -> &'static CardTemplate {
    match suit {
        Suit::Wands => &WANDS_TEMPLATE,
        Suit::Cups => &CUPS_TEMPLATE,
        Suit::Swords => &SWORDS_TEMPLATE,
        Suit::Pentacles => &PENTACLES_TEMPLATE,
    }
}

pub fn fallback_template() -> &'static CardTemplate {
    &FALLBACK_TEMPLATE
}
